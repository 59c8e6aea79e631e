//! Command execution.
//!
//! Every command loads the configured file first; mutating commands save it
//! back when the store changed. A missing file starts from an empty store
//! unless `require_file` is set, in which case read-only commands fail.

use std::io::Write;

use anyhow::Context;

use stockbook_inventory::{AddOutcome, InventoryStore, LogEntry, RemoveOutcome};

use crate::args::Command;
use crate::config::Config;

pub fn execute(config: &Config, command: Command, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Add { item, qty } => add(config, &item, qty, out),
        Command::Remove { item, qty } => remove(config, &item, qty, out),
        Command::Get { item } => {
            let store = open_for_read(config)?;
            writeln!(out, "{}", store.quantity(&item))?;
            Ok(())
        }
        Command::Low => {
            let store = open_for_read(config)?;
            for item in store.low_stock(config.threshold) {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
        Command::Report => {
            let store = open_for_read(config)?;
            store.write_report(out)?;
            Ok(())
        }
        Command::Demo => demo(config, out),
    }
}

fn open(config: &Config) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new();
    store
        .load(&config.file)
        .with_context(|| format!("failed to load {}", config.file.display()))?;
    Ok(store)
}

fn open_for_read(config: &Config) -> anyhow::Result<InventoryStore> {
    if !config.require_file {
        return open(config);
    }
    let mut store = InventoryStore::new();
    store
        .load_required(&config.file)
        .with_context(|| format!("failed to load {}", config.file.display()))?;
    Ok(store)
}

fn persist(config: &Config, store: &InventoryStore) -> anyhow::Result<()> {
    store
        .save(&config.file)
        .with_context(|| format!("failed to save {}", config.file.display()))
}

fn add(config: &Config, item: &str, qty: i64, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut store = open(config)?;
    let mut log: Vec<LogEntry> = Vec::new();

    if store.add(Some(item), qty, Some(&mut log)) == AddOutcome::Ignored {
        writeln!(out, "ignored: empty item name")?;
        return Ok(());
    }
    persist(config, &store)?;

    for entry in &log {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

fn remove(config: &Config, item: &str, qty: i64, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut store = open(config)?;

    match store.remove(item, qty) {
        RemoveOutcome::Missing => writeln!(out, "{item}: not in stock")?,
        RemoveOutcome::Pruned => {
            persist(config, &store)?;
            writeln!(out, "{item}: removed")?;
        }
        RemoveOutcome::Decremented { remaining } => {
            persist(config, &store)?;
            writeln!(out, "{item} -> {remaining}")?;
        }
    }
    Ok(())
}

/// Reference walkthrough: apple 10, banana -2, remove 3 apples, remove an
/// orange that was never stocked.
fn demo(config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    let mut log: Vec<String> = Vec::new();

    store.add(Some("apple"), 10, Some(&mut log));
    store.add(Some("banana"), -2, Some(&mut log));
    store.remove("apple", 3);
    store.remove("orange", 1);

    for line in &log {
        tracing::info!(entry = %line, "activity");
    }

    writeln!(out, "Apple stock: {}", store.quantity("apple"))?;
    let low: Vec<String> = store
        .low_stock(config.threshold)
        .into_iter()
        .map(|i| i.into_inner())
        .collect();
    writeln!(out, "Low items: {low:?}")?;

    persist(config, &store)?;
    let store = open(config)?;
    store.write_report(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> Config {
        Config {
            file: dir.path().join("inventory.json"),
            threshold: 5,
            require_file: false,
        }
    }

    fn run(config: &Config, command: Command) -> String {
        let mut out = Vec::new();
        execute(config, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_persists_and_get_reads_back() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let line = run(&config, Command::Add { item: "apple".into(), qty: 10 });
        assert!(line.trim_end().ends_with("Added 10 of apple"));

        assert_eq!(run(&config, Command::Get { item: "apple".into() }), "10\n");
        assert_eq!(run(&config, Command::Get { item: "pear".into() }), "0\n");
    }

    #[test]
    fn remove_of_unknown_item_is_reported_not_failed() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        assert_eq!(
            run(&config, Command::Remove { item: "orange".into(), qty: 1 }),
            "orange: not in stock\n"
        );
        assert!(!config.file.exists());
    }

    #[test]
    fn remove_prunes_and_reports() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        run(&config, Command::Add { item: "apple".into(), qty: 2 });

        assert_eq!(
            run(&config, Command::Remove { item: "apple".into(), qty: 2 }),
            "apple: removed\n"
        );
        assert_eq!(run(&config, Command::Report), "Items Report\n");
    }

    #[test]
    fn demo_prints_reference_output() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        assert_eq!(
            run(&config, Command::Demo),
            "Apple stock: 7\nLow items: [\"banana\"]\nItems Report\napple -> 7\nbanana -> -2\n"
        );
        assert_eq!(run(&config, Command::Low), "banana\n");
    }

    #[test]
    fn add_with_empty_name_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        assert_eq!(
            run(&config, Command::Add { item: String::new(), qty: 3 }),
            "ignored: empty item name\n"
        );
        assert!(!config.file.exists());
    }

    #[test]
    fn whitespace_item_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        run(&config, Command::Add { item: " ".into(), qty: 2 });
        assert_eq!(run(&config, Command::Get { item: " ".into() }), "2\n");
    }

    #[test]
    fn required_file_must_exist_for_reads() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            require_file: true,
            ..config(&dir)
        };

        let mut out = Vec::new();
        let err = execute(&config, Command::Report, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("file not found"));

        run(&config, Command::Add { item: "apple".into(), qty: 1 });
        assert_eq!(run(&config, Command::Report), "Items Report\napple -> 1\n");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        std::fs::write(&config.file, "[1, 2, 3]").unwrap();

        let mut out = Vec::new();
        let err = execute(&config, Command::Report, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load"));
    }
}
