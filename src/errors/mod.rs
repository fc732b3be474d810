/// Structured error handling for the swap client
/// Every public operation returns one of these; nothing here is fatal to the
/// process - the worst outcome is a failed swap surfaced as a message.
use crate::wallet::WalletError;

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Debug)]
pub enum SwapError {
    /// A swap parameter failed a precondition check (user-correctable)
    Validation(String),

    /// The aggregator returned no usable routes for the pair/amount
    NoRoutesFound,

    /// The aggregator was unreachable or returned something unparsable
    QuoteFetchFailed(String),

    /// Execution was attempted on a quote with no selected route
    NoRouteSelected,

    /// The selected route carries no execution instructions
    NoInstructions,

    /// An execution instruction's payload could not be decoded
    MalformedInstruction(String),

    /// The wallet provider rejected or failed the operation
    Wallet(WalletError),
}

impl std::fmt::Display for SwapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            SwapError::NoRoutesFound => write!(f, "No routes found for this swap"),
            SwapError::QuoteFetchFailed(msg) => write!(f, "Quote Fetch Failed: {}", msg),
            SwapError::NoRouteSelected => write!(f, "No route selected"),
            SwapError::NoInstructions => write!(f, "No execution instructions found"),
            SwapError::MalformedInstruction(msg) => {
                write!(f, "Malformed Instruction: {}", msg)
            }
            SwapError::Wallet(err) => write!(f, "Wallet Error: {}", err),
        }
    }
}

impl std::error::Error for SwapError {}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        SwapError::QuoteFetchFailed(err.to_string())
    }
}

impl From<WalletError> for SwapError {
    fn from(err: WalletError) -> Self {
        SwapError::Wallet(err)
    }
}

impl SwapError {
    /// Whether retrying the same request may succeed (remote-side failures)
    pub fn is_retryable(&self) -> bool {
        matches!(self, SwapError::NoRoutesFound | SwapError::QuoteFetchFailed(_))
    }

    /// Message suitable for direct display in a swap form
    pub fn user_message(&self) -> String {
        match self {
            SwapError::Validation(msg) => msg.clone(),
            SwapError::NoRoutesFound => {
                "No routes found for this swap. Try a different amount or pair.".to_string()
            }
            SwapError::QuoteFetchFailed(_) => {
                "Failed to fetch a quote. Please try again.".to_string()
            }
            SwapError::NoRouteSelected
            | SwapError::NoInstructions
            | SwapError::MalformedInstruction(_) => "Swap failed".to_string(),
            SwapError::Wallet(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_covers_exactly_the_quote_level_failures() {
        assert!(SwapError::NoRoutesFound.is_retryable());
        assert!(SwapError::QuoteFetchFailed("HTTP 500 from aggregator".to_string()).is_retryable());

        assert!(!SwapError::Validation("Amount must be greater than 0".to_string()).is_retryable());
        assert!(!SwapError::NoRouteSelected.is_retryable());
        assert!(!SwapError::NoInstructions.is_retryable());
        assert!(!SwapError::MalformedInstruction("bad base64".to_string()).is_retryable());
        assert!(!SwapError::Wallet(WalletError::NotSignedIn).is_retryable());
    }

    #[test]
    fn validation_messages_pass_through_verbatim() {
        let err = SwapError::Validation("Slippage must be between 0.1% and 50%".to_string());
        assert_eq!(err.user_message(), "Slippage must be between 0.1% and 50%");
    }

    #[test]
    fn quote_failures_suggest_retrying() {
        assert_eq!(
            SwapError::NoRoutesFound.user_message(),
            "No routes found for this swap. Try a different amount or pair."
        );
        assert_eq!(
            SwapError::QuoteFetchFailed("timeout".to_string()).user_message(),
            "Failed to fetch a quote. Please try again."
        );
    }

    #[test]
    fn internal_consistency_failures_show_a_generic_message() {
        for err in [
            SwapError::NoRouteSelected,
            SwapError::NoInstructions,
            SwapError::MalformedInstruction("bad base64".to_string()),
        ] {
            assert_eq!(err.user_message(), "Swap failed");
        }
    }

    #[test]
    fn wallet_failures_relay_the_provider_message() {
        let err = SwapError::Wallet(WalletError::Rejected("user closed the popup".to_string()));
        assert_eq!(err.user_message(), "Transaction rejected: user closed the popup");
    }
}
