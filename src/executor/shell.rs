use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::runtime::{Builder, Runtime};

use super::{ExecError, Executor, ProcessOutput};
use crate::error::TutorError;
use crate::gate::approval::ApprovedCommand;

pub const DEFAULT_SHELL: &str = "sh";

/// Runs approved commands through `<shell> -c`, capturing stdout and stderr.
///
/// Owns a current-thread tokio runtime so callers get a plain blocking call.
/// On timeout the child is killed (`kill_on_drop`) and not waited for.
pub struct ShellExecutor {
    shell: String,
    runtime: Runtime,
}

impl std::fmt::Debug for ShellExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellExecutor")
            .field("shell", &self.shell)
            .finish()
    }
}

impl ShellExecutor {
    pub fn new(shell: &str) -> Result<Self, TutorError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TutorError::Runtime(e.to_string()))?;

        Ok(Self {
            shell: shell.to_owned(),
            runtime,
        })
    }

    async fn run_async(
        &self,
        command: &str,
        timeout: Duration,
    ) -> Result<ProcessOutput, ExecError> {
        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExecError::Spawn(e.to_string()))?;

        // Dropping the wait future on timeout drops the child, which kills it.
        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(ProcessOutput {
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }),
            Ok(Err(e)) => Err(ExecError::Io(e.to_string())),
            Err(_elapsed) => Err(ExecError::TimedOut(timeout)),
        }
    }
}

impl Executor for ShellExecutor {
    fn run(
        &self,
        command: &ApprovedCommand,
        timeout: Duration,
    ) -> Result<ProcessOutput, ExecError> {
        self.runtime.block_on(self.run_async(command.as_str(), timeout))
    }
}
