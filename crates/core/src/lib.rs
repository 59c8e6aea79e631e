//! `stockbook-core` — domain building blocks for the stock ledger.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod item;

pub use error::{StockError, StockResult};
pub use item::{ItemName, Quantity};
