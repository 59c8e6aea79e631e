use indexmap::IndexMap;

use stockbook_core::{ItemName, Quantity, StockError, StockResult};

use crate::activity::{Action, LogEntry, LogSink};

/// Threshold used by callers that do not pick one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Result of [`InventoryStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item name was absent or empty; nothing changed.
    Ignored,
    /// The entry now holds `quantity`.
    Applied { quantity: Quantity },
}

/// Result of [`InventoryStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item was not in the store; nothing changed.
    Missing,
    /// The entry still exists with `remaining` units.
    Decremented { remaining: Quantity },
    /// The entry dropped to zero or below and was deleted.
    Pruned,
}

/// In-memory mapping from item name to quantity.
///
/// Iteration follows insertion order; `load` keeps the order of the file. Only [`remove`](Self::remove)
/// prunes entries; [`add`](Self::add) may leave an entry at zero or below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    stock: IndexMap<ItemName, Quantity>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` (possibly negative) units of `item`, creating the entry if needed.
    ///
    /// An absent or empty name is ignored. When `sink` is given, an activity
    /// entry is recorded for the change.
    pub fn add(
        &mut self,
        item: Option<&str>,
        qty: Quantity,
        sink: Option<&mut dyn LogSink>,
    ) -> AddOutcome {
        let Some(item) = ItemName::parse_opt(item) else {
            return AddOutcome::Ignored;
        };

        let entry = self.stock.entry(item.clone()).or_insert(0);
        *entry = entry.saturating_add(qty);
        let quantity = *entry;

        tracing::debug!(item = %item, delta = qty, quantity, "stock added");

        if let Some(sink) = sink {
            sink.record(LogEntry::now(Action::Added { item, qty }));
        }

        AddOutcome::Applied { quantity }
    }

    /// Subtract `qty` units of `item`, deleting the entry once it reaches zero or below.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> RemoveOutcome {
        let Some(current) = self.stock.get_mut(item) else {
            tracing::debug!(item, "remove of unknown item ignored");
            return RemoveOutcome::Missing;
        };

        let remaining = current.saturating_sub(qty);
        if remaining <= 0 {
            self.stock.shift_remove(item);
            tracing::debug!(item, delta = qty, "stock removed; entry pruned");
            return RemoveOutcome::Pruned;
        }

        *current = remaining;
        tracing::debug!(item, delta = qty, remaining, "stock removed");
        RemoveOutcome::Decremented { remaining }
    }

    /// Stored quantity, or 0 when the item is absent.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Stored quantity, distinguishing absence from zero.
    pub fn try_quantity(&self, item: &str) -> StockResult<Quantity> {
        self.stock
            .get(item)
            .copied()
            .ok_or_else(|| StockError::missing_item(item))
    }

    /// Items whose quantity is strictly below `threshold`, in store order.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        self.stock
            .iter()
            .filter(|(_, q)| **q < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.stock.iter().map(|(item, q)| (item, *q))
    }

    pub fn snapshot(&self) -> IndexMap<ItemName, Quantity> {
        self.stock.clone()
    }

    pub(crate) fn stock(&self) -> &IndexMap<ItemName, Quantity> {
        &self.stock
    }

    /// Full-state replacement.
    pub(crate) fn replace(&mut self, stock: IndexMap<ItemName, Quantity>) {
        self.stock = stock;
    }
}
