use anyhow::Context;
use tracing_subscriber::EnvFilter;

use texttutor::app::Tutor;
use texttutor::config::{CONFIG_ENV_VAR, Config};
use texttutor::console::TerminalConsole;
use texttutor::executor::ShellExecutor;
use texttutor::gate::CommandGate;
use texttutor::prompt::LinePrompter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the menus on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()
        .with_context(|| format!("loading config from ${CONFIG_ENV_VAR}"))?;
    let executor = ShellExecutor::new(config.shell()).context("starting shell executor")?;
    let gate = CommandGate::new(config.gate_policy().clone(), executor);
    let prompter = LinePrompter::new().context("opening line editor")?;
    let console = TerminalConsole::stdout(config.color());

    tracing::debug!(shell = config.shell(), "starting tutor");
    Tutor::new(console, prompter, gate).run()?;
    Ok(())
}
