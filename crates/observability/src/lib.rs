//! Tracing/logging setup shared by the stockbook binaries.

/// Initialize process-wide tracing using the format named by
/// `STOCKBOOK_LOG_FORMAT` (`json` or `pretty`, default `pretty`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, init_with};
