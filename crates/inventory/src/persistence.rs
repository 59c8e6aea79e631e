//! JSON file persistence.
//!
//! The file holds a single object mapping item name to integer quantity:
//!
//! ```json
//! {
//!   "apple": 7,
//!   "banana": -2
//! }
//! ```
//!
//! Saves overwrite in place; there is no atomic rename or backup.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use stockbook_core::{ItemName, Quantity, StockError, StockResult};

use crate::store::InventoryStore;

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Result of [`InventoryStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file did not exist; the store was left untouched.
    NotFound,
    /// The store was replaced with `items` entries from the file.
    Loaded { items: usize },
}

impl InventoryStore {
    /// Replace the whole store with the contents of `path`.
    ///
    /// A missing file is not an error. Malformed content is rejected before
    /// anything in the store changes.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StockResult<LoadOutcome> {
        let path = path.as_ref();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "inventory file not found; keeping current store");
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(StockError::malformed(path, "file is not valid UTF-8"));
            }
            Err(e) => return Err(StockError::io(path, &e)),
        };

        let stock = decode_inventory(&text).map_err(|e| match e {
            StockError::MalformedData { reason, .. } => StockError::malformed(path, reason),
            other => other,
        })?;

        let items = stock.len();
        self.replace(stock);
        tracing::info!(path = %path.display(), items, "inventory loaded");
        Ok(LoadOutcome::Loaded { items })
    }

    /// Like [`load`](Self::load), but a missing file is an error.
    ///
    /// Returns the number of items loaded.
    pub fn load_required(&mut self, path: impl AsRef<Path>) -> StockResult<usize> {
        let path = path.as_ref();
        match self.load(path)? {
            LoadOutcome::Loaded { items } => Ok(items),
            LoadOutcome::NotFound => Err(StockError::missing_file(path)),
        }
    }

    /// Write the whole store to `path`, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> StockResult<()> {
        let path = path.as_ref();
        let content = encode_inventory(self.stock()).map_err(|e| match e {
            StockError::MalformedData { reason, .. } => StockError::malformed(path, reason),
            other => other,
        })?;

        fs::write(path, content).map_err(|e| StockError::io(path, &e))?;
        tracing::info!(path = %path.display(), items = self.len(), "inventory saved");
        Ok(())
    }
}

/// Parse inventory JSON text, keeping the key order of the document.
///
/// Errors carry an empty path; [`InventoryStore::load`] fills in the file.
pub fn decode_inventory(text: &str) -> StockResult<IndexMap<ItemName, Quantity>> {
    let value: JsonValue =
        serde_json::from_str(text).map_err(|e| StockError::malformed("", format!("invalid JSON: {e}")))?;

    let JsonValue::Object(entries) = value else {
        return Err(StockError::malformed("", "top-level value is not an object"));
    };

    let mut stock = IndexMap::new();
    for (key, value) in entries {
        let qty = value.as_i64().ok_or_else(|| {
            StockError::malformed("", format!("quantity for {key:?} is not an integer: {value}"))
        })?;
        let item = ItemName::new(key)
            .map_err(|_| StockError::malformed("", "item names cannot be empty"))?;
        stock.insert(item, qty);
    }

    Ok(stock)
}

/// Render inventory as pretty-printed JSON, keys in store order.
pub fn encode_inventory(stock: &IndexMap<ItemName, Quantity>) -> StockResult<String> {
    serde_json::to_string_pretty(stock)
        .map_err(|e| StockError::malformed("", format!("failed to serialize inventory: {e}")))
}
