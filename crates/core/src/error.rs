//! Domain error model.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used across the stock ledger.
pub type StockResult<T> = Result<T, StockError>;

/// Stock-ledger error.
///
/// Absence of an item on `remove` and absence of the file on `load` are
/// ordinary outcomes, reported through outcome values rather than this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not present in the store.
    #[error("item not found: {0}")]
    MissingItem(String),

    /// A file the caller required does not exist.
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Persisted data is not an object of item name to integer quantity.
    #[error("malformed inventory data in {}: {reason}", path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// Any other filesystem failure.
    #[error("io error on {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

impl StockError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_item(item: impl Into<String>) -> Self {
        Self::MissingItem(item.into())
    }

    pub fn missing_file(path: impl AsRef<Path>) -> Self {
        Self::MissingFile(path.as_ref().to_path_buf())
    }

    pub fn malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let err = StockError::malformed("inventory.json", "top-level value is not an object");
        assert_eq!(
            err.to_string(),
            "malformed inventory data in inventory.json: top-level value is not an object"
        );

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StockError::io("/tmp/x.json", &io);
        assert!(err.to_string().starts_with("io error on /tmp/x.json"));
    }
}
