pub mod shell;

use std::time::Duration;

use thiserror::Error;

use crate::gate::approval::ApprovedCommand;

pub use shell::ShellExecutor;

/// Captured result of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was ended by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("command timed out after {0:?}")]
    TimedOut(Duration),

    #[error("failed to spawn shell: {0}")]
    Spawn(String),

    #[error("failed to collect command output: {0}")]
    Io(String),
}

/// Extension point for running approved commands. The gate owns one; tests
/// swap in a fake so no real process is spawned.
///
/// Only accepts `&ApprovedCommand`: an unchecked string cannot reach `run`.
pub trait Executor: Send + Sync {
    /// Run `command`, giving up after `timeout` of wall-clock time.
    fn run(
        &self,
        command: &ApprovedCommand,
        timeout: Duration,
    ) -> Result<ProcessOutput, ExecError>;
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn run(
        &self,
        command: &ApprovedCommand,
        timeout: Duration,
    ) -> Result<ProcessOutput, ExecError> {
        (**self).run(command, timeout)
    }
}
