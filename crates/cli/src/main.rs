use std::io;
use std::process::ExitCode;

use clap::Parser;

use stockbook_cli::Cli;

fn main() -> ExitCode {
    stockbook_observability::init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match stockbook_cli::run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
