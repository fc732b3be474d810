/// Core logging implementation with automatic filtering
///
/// Central logic that decides whether a message should be displayed based on
/// its level, the tag's debug flag and the global verbosity, then delegates
/// to the format module for output.
use crate::global::{
    is_debug_api_enabled, is_debug_swap_enabled, is_debug_tokens_enabled, is_debug_wallet_enabled,
    is_verbose_enabled,
};

use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a debug flag is set for the given tag
fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    match tag {
        LogTag::Swap => is_debug_swap_enabled(),
        LogTag::Api | LogTag::Price => is_debug_api_enabled(),
        LogTag::Tokens | LogTag::Cache => is_debug_tokens_enabled(),
        LogTag::Wallet => is_debug_wallet_enabled(),
        LogTag::System => is_verbose_enabled(),
    }
}

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Debug level requires the --debug-<module> flag for that tag
/// 3. Verbose level requires the --verbose flag
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    match level {
        LogLevel::Error => true,
        LogLevel::Warning | LogLevel::Info => true,
        LogLevel::Debug => is_debug_enabled_for_tag(tag),
        LogLevel::Verbose => is_verbose_enabled(),
    }
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, event: &str, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, event, message);
}
