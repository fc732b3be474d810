//! Structured tag-based logging for the swap client
//!
//! Provides the `log(LogTag, "EVENT", message)` call used throughout the
//! crate plus level-specific helpers:
//! - `log` / `info` - standard operational messages, always shown
//! - `error` / `warning` - always shown
//! - `debug` - only with `--debug-<module>` (e.g. `--debug-swap`)
//! - `verbose` - only with `--verbose`
//!
//! Output is colored console only; there is no file sink.

mod core;
mod format;
mod levels;
mod tags;

pub use levels::LogLevel;
pub use tags::LogTag;

/// Log a tagged event at INFO level
///
/// This is the primary call site form used across the crate:
/// `log(LogTag::Swap, "QUOTE_START", &format!(...))`
pub fn log(tag: LogTag, event: &str, message: &str) {
    core::log_internal(tag, LogLevel::Info, event, message);
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, event: &str, message: &str) {
    core::log_internal(tag, LogLevel::Error, event, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, event: &str, message: &str) {
    core::log_internal(tag, LogLevel::Warning, event, message);
}

/// Log at DEBUG level (gated by --debug-<module>)
pub fn debug(tag: LogTag, event: &str, message: &str) {
    core::log_internal(tag, LogLevel::Debug, event, message);
}

/// Log at VERBOSE level (gated by --verbose)
pub fn verbose(tag: LogTag, event: &str, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, event, message);
}
