use std::fmt;
use std::time::Duration;

use super::FailureReason;
use super::approval::ApprovedCommand;

pub const DEFAULT_MAX_LENGTH: usize = 200;
pub const DEFAULT_FORBIDDEN: [&str; 2] = [";", "|"];
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pre-execution rules for the command gate.
///
/// This is a complexity filter, not a sandbox. Backticks, `$()`, `&&`,
/// redirection and quote-breaking all pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePolicy {
    max_length: usize,
    forbidden: Vec<String>,
    timeout: Duration,
}

/// Why a command was refused. Only used for logging; callers see `TooComplex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Violation {
    TooLong { length: usize, max: usize },
    Forbidden(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { length, max } => write!(f, "length {length} exceeds {max}"),
            Self::Forbidden(token) => write!(f, "contains forbidden `{token}`"),
        }
    }
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            forbidden: DEFAULT_FORBIDDEN.iter().map(|s| (*s).to_owned()).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatePolicy {
    /// Build a policy from already-validated limits (see `Config`).
    pub fn new(max_length: usize, forbidden: Vec<String>, timeout: Duration) -> Self {
        Self {
            max_length,
            forbidden,
            timeout,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn forbidden(&self) -> &[String] {
        &self.forbidden
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Approve a command or refuse it as too complex. Nothing is spawned here.
    pub fn check(&self, command: &str) -> Result<ApprovedCommand, FailureReason> {
        match self.violation(command) {
            Some(violation) => {
                tracing::warn!(%violation, "command rejected by gate policy");
                Err(FailureReason::TooComplex)
            }
            None => Ok(ApprovedCommand::new(command)),
        }
    }

    /// Length is counted in characters, not bytes.
    pub(super) fn violation(&self, command: &str) -> Option<Violation> {
        let length = command.chars().count();
        if length > self.max_length {
            return Some(Violation::TooLong {
                length,
                max: self.max_length,
            });
        }

        self.forbidden
            .iter()
            .find(|token| command.contains(token.as_str()))
            .map(|token| Violation::Forbidden(token.clone()))
    }
}
