//! Resolved runtime configuration.

use std::path::PathBuf;

use stockbook_core::Quantity;

use crate::args::Cli;

/// Settings the commands run with. Flags win over `STOCKBOOK_*` environment
/// variables, which win over built-in defaults (clap resolves the precedence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub threshold: Quantity,
    /// Read-only commands error out instead of treating a missing file as empty.
    pub require_file: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            file: cli.file.clone(),
            threshold: cli.threshold,
            require_file: cli.require_file,
        }
    }
}
