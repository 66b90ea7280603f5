/// Unforgeable proof that a command string passed the gate policy.
///
/// Construction is double-locked:
/// 1. `Seal` is a private type, so no struct literal outside this file.
/// 2. `new()` is `pub(super)`, so only `gate/` submodules can call it.
///
/// No `Clone`, `Default`, or `From`. Executors borrow it; they never mint one.
///
/// ```compile_fail
/// use texttutor::gate::approval::ApprovedCommand;
///
/// // new() is pub(super): this must not compile outside the gate module.
/// let _approved = ApprovedCommand::new("echo hi");
/// ```
#[derive(Debug)]
pub struct ApprovedCommand {
    command: String,
    _seal: Seal,
}

#[derive(Debug)]
struct Seal;

impl ApprovedCommand {
    pub(super) fn new(command: &str) -> Self {
        Self {
            command: command.to_owned(),
            _seal: Seal,
        }
    }

    /// The command line exactly as the caller built it.
    pub fn as_str(&self) -> &str {
        &self.command
    }
}
