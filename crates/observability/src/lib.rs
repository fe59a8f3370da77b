//! Tracing/logging setup shared by storefront binaries.

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging, choosing the format from
/// `STOREFRONT_LOG_FORMAT` (`json` by default, `pretty` for humans).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let format = std::env::var(tracing::LOG_FORMAT_ENV)
        .map(|value| LogFormat::parse(&value))
        .unwrap_or_default();
    tracing::init(format);
}

/// Initialize logging with an explicit format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}
