//! Inventory ledger: an owned item -> quantity map with JSON file persistence.
//!
//! The store itself is deterministic in-memory logic; file IO lives in
//! [`persistence`] and console output in [`report`].

pub mod activity;
pub mod persistence;
pub mod report;
pub mod store;

pub use activity::{Action, LogEntry, LogSink};
pub use persistence::{DEFAULT_INVENTORY_PATH, LoadOutcome, decode_inventory, encode_inventory};
pub use store::{AddOutcome, DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, RemoveOutcome};
