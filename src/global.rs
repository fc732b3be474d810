/// Centralized argument handling and debug flag checking
///
/// Stores the process arguments once so that library code (and tests, via
/// `set_cmd_args`) can check `--debug-<module>` flags without threading a
/// config object through every call.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by binaries and tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// Check if swap debug logging is enabled (--debug-swap)
pub fn is_debug_swap_enabled() -> bool {
    has_arg("--debug-swap") || has_arg("--debug-all")
}

/// Check if API debug logging is enabled (--debug-api)
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api") || has_arg("--debug-all")
}

/// Check if token debug logging is enabled (--debug-tokens)
pub fn is_debug_tokens_enabled() -> bool {
    has_arg("--debug-tokens") || has_arg("--debug-all")
}

/// Check if wallet debug logging is enabled (--debug-wallet)
pub fn is_debug_wallet_enabled() -> bool {
    has_arg("--debug-wallet") || has_arg("--debug-all")
}

/// Check if verbose logging is enabled (--verbose)
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

#[cfg(test)]
mod tests {
    use super::*;

    // The arg snapshot is process-wide; this is the only test that mutates it
    #[test]
    fn overridden_args_drive_the_flag_checks() {
        set_cmd_args(vec!["nearswap".to_string(), "--debug-swap".to_string()]);
        assert!(has_arg("--debug-swap"));
        assert!(is_debug_swap_enabled());
        assert!(!is_debug_api_enabled());
        assert!(!is_verbose_enabled());

        set_cmd_args(vec!["nearswap".to_string(), "--debug-all".to_string()]);
        assert!(is_debug_swap_enabled());
        assert!(is_debug_api_enabled());
        assert!(is_debug_tokens_enabled());
        assert!(is_debug_wallet_enabled());

        set_cmd_args(vec!["nearswap".to_string()]);
        assert!(!is_debug_swap_enabled());
        assert_eq!(get_cmd_args(), vec!["nearswap".to_string()]);
    }
}
