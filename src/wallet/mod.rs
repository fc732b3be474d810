/// Wallet provider capability consumed by the swap client
///
/// The swap logic never talks to a concrete wallet implementation; it is
/// handed anything implementing [`Wallet`]. Production code wraps the
/// injected browser/extension provider, tests use [`mock::MockWallet`].
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[cfg(test)]
pub mod mock;

// =============================================================================
// WALLET ERRORS
// =============================================================================

/// Failures surfaced by the wallet provider
///
/// These are opaque to the swap logic and relayed to the user unchanged.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    #[error("No account signed in")]
    NotSignedIn,

    #[error("Transaction rejected: {0}")]
    Rejected(String),

    #[error("Wallet provider error: {0}")]
    Provider(String),
}

// =============================================================================
// TRANSACTION BATCH TYPES
// =============================================================================

/// A single function-call action within a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallAction {
    pub method_name: String,
    /// JSON-decoded arguments (the aggregator ships these base64-encoded)
    pub args: Value,
    pub gas: String,
    pub deposit: String,
}

/// One transaction in a batch: a receiver plus its ordered actions
#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub signer_id: String,
    pub receiver_id: String,
    pub actions: Vec<FunctionCallAction>,
}

// =============================================================================
// WALLET CAPABILITY
// =============================================================================

/// The injected wallet capability
///
/// Exactly the five operations the swap flow needs: session identity,
/// read-only view calls, sign-in/out, and batched transaction submission.
/// `send_transactions` submits the whole batch under one user approval.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Currently signed-in account id, if any
    fn account_id(&self) -> Option<String>;

    /// Read-only contract view call returning the method's JSON result
    async fn view(
        &self,
        contract_id: &str,
        method_name: &str,
        args: Value,
    ) -> Result<Value, WalletError>;

    /// Open the provider's sign-in flow
    async fn request_sign_in(&self) -> Result<(), WalletError>;

    /// Drop the current session
    fn sign_out(&self);

    /// Submit an ordered batch of transactions as one approval request
    async fn send_transactions(
        &self,
        transactions: Vec<WalletTransaction>,
    ) -> Result<(), WalletError>;
}
