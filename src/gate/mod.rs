pub mod approval;
pub mod policy;

use thiserror::Error;
use uuid::Uuid;

use crate::executor::{ExecError, Executor};
use policy::GatePolicy;

/// Outcome of a gate invocation. Failures are data, never panics or `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Success { stdout: String },
    Failure { reason: FailureReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("Command too complex or potentially unsafe")]
    TooComplex,

    #[error("Command took too long to execute")]
    Timeout,

    #[error("{0}")]
    ExecutionError(String),
}

impl CommandResult {
    fn failure(reason: FailureReason) -> Self {
        Self::Failure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// The single chokepoint where a command string becomes an OS process.
///
/// Callers build the full command line from their own templates; the gate
/// knows nothing about what the command is for.
pub struct CommandGate<E> {
    policy: GatePolicy,
    executor: E,
}

impl<E: Executor> CommandGate<E> {
    pub fn new(policy: GatePolicy, executor: E) -> Self {
        Self { policy, executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Check `command` against the policy, run it, and classify the result.
    ///
    /// Blocks until the process exits or the policy timeout fires.
    pub fn execute(&self, command: &str) -> CommandResult {
        let span = tracing::info_span!("gate", request_id = %Uuid::now_v7());
        let _enter = span.enter();

        let approved = match self.policy.check(command) {
            Ok(approved) => approved,
            Err(reason) => return CommandResult::failure(reason),
        };

        tracing::debug!(command = approved.as_str(), "executing");
        match self.executor.run(&approved, self.policy.timeout()) {
            Ok(output) => {
                tracing::debug!(
                    exit_code = ?output.exit_code,
                    stdout_bytes = output.stdout.len(),
                    stderr_bytes = output.stderr.len(),
                    "command finished"
                );
                // Exit status alone is not an error: grep exits 1 on no match.
                if output.stderr.is_empty() {
                    CommandResult::Success {
                        stdout: output.stdout,
                    }
                } else {
                    CommandResult::failure(FailureReason::ExecutionError(output.stderr))
                }
            }
            Err(ExecError::TimedOut(after)) => {
                tracing::warn!(?after, "command timed out");
                CommandResult::failure(FailureReason::Timeout)
            }
            Err(err) => {
                tracing::warn!(error = %err, "command failed to run");
                CommandResult::failure(FailureReason::ExecutionError(err.to_string()))
            }
        }
    }
}
