//! Human-readable activity log entries handed to caller-supplied sinks.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{ItemName, Quantity};

/// What happened to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Added { item: ItemName, qty: Quantity },
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::Added { item, qty } => write!(f, "Added {qty} of {item}"),
        }
    }
}

/// One timestamped activity line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub action: Action,
}

impl LogEntry {
    pub fn new(at: DateTime<Utc>, action: Action) -> Self {
        Self { at, action }
    }

    pub fn now(action: Action) -> Self {
        Self::new(Utc::now(), action)
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.action
        )
    }
}

/// Ordered destination for activity entries. Not persisted by the store.
pub trait LogSink {
    fn record(&mut self, entry: LogEntry);
}

impl LogSink for Vec<LogEntry> {
    fn record(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

/// Keeps only the rendered line.
impl LogSink for Vec<String> {
    fn record(&mut self, entry: LogEntry) {
        self.push(entry.to_string());
    }
}
