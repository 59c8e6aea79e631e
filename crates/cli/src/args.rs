//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockbook_core::Quantity;
use stockbook_inventory::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD};

/// stockbook - a small file-backed inventory ledger
#[derive(Parser, Debug)]
#[command(name = "stockbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Inventory file to load from and save to
    #[arg(long, global = true, env = "STOCKBOOK_FILE", default_value = DEFAULT_INVENTORY_PATH)]
    pub file: PathBuf,

    /// Items strictly below this quantity count as low stock
    #[arg(
        long,
        global = true,
        env = "STOCKBOOK_LOW_THRESHOLD",
        default_value_t = DEFAULT_LOW_STOCK_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub threshold: Quantity,

    /// Fail read-only commands when the inventory file does not exist
    #[arg(long, global = true, env = "STOCKBOOK_REQUIRE_FILE")]
    pub require_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add units of an item (negative quantities subtract without pruning)
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: Quantity,
    },

    /// Remove units of an item; the entry is deleted once it reaches zero
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: Quantity,
    },

    /// Print the quantity of an item (0 when absent)
    Get { item: String },

    /// List items below the low-stock threshold
    Low,

    /// Print every item and its quantity
    Report,

    /// Run the reference scenario on a fresh store, save it, reload it and report
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_quantities() {
        let cli = Cli::try_parse_from(["stockbook", "add", "banana", "-2"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Add {
                item: "banana".into(),
                qty: -2
            }
        );
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["stockbook", "low", "--threshold", "3", "--file", "x.json"]).unwrap();
        assert_eq!(cli.command, Command::Low);
        assert_eq!(cli.threshold, 3);
        assert_eq!(cli.file, PathBuf::from("x.json"));
        assert!(!cli.require_file);

        let cli = Cli::try_parse_from(["stockbook", "report", "--require-file"]).unwrap();
        assert!(cli.require_file);
    }

    #[test]
    fn rejects_non_integer_quantity() {
        assert!(Cli::try_parse_from(["stockbook", "add", "apple", "ten"]).is_err());
    }
}
