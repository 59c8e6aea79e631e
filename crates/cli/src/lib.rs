//! `stockbook` command-line front end over the inventory ledger.

pub mod args;
pub mod commands;
pub mod config;

pub use args::{Cli, Command};
pub use config::Config;

/// Resolve configuration from parsed arguments and run the command, writing
/// command output to `out`.
pub fn run(cli: Cli, out: &mut dyn std::io::Write) -> anyhow::Result<()> {
    let config = Config::from_cli(&cli);
    tracing::debug!(file = %config.file.display(), threshold = config.threshold, "config resolved");
    commands::execute(&config, cli.command, out)
}
