/// Swap execution through the injected wallet capability
///
/// A route's execution instructions become one ordered transaction batch
/// submitted under a single wallet approval - one popup for N transactions.
/// The executor holds no state and records nothing; transaction outcomes
/// live entirely with the wallet provider.
use crate::errors::SwapError;
use crate::logger::{log, LogTag};
use crate::wallet::{FunctionCallAction, Wallet, WalletError, WalletTransaction};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;

use super::types::{NearTransaction, SwapQuote};

/// Execute the quote's selected route
pub async fn execute_swap(wallet: &dyn Wallet, quote: &SwapQuote) -> Result<(), SwapError> {
    let route = quote.selected_route().ok_or(SwapError::NoRouteSelected)?;

    if route.execution_instructions.is_empty() {
        return Err(SwapError::NoInstructions);
    }

    let account_id = wallet
        .account_id()
        .ok_or(SwapError::Wallet(WalletError::NotSignedIn))?;

    let mut transactions = Vec::new();
    for instruction in &route.execution_instructions {
        // Unknown instruction kinds are skipped, same as the route parser
        let Some(near_transaction) = &instruction.near_transaction else {
            continue;
        };
        transactions.push(build_transaction(&account_id, near_transaction)?);
    }

    log(
        LogTag::Swap,
        "EXECUTE",
        &format!(
            "submitting {} transaction(s) via {} in one approval",
            transactions.len(),
            route.dex_id
        ),
    );

    wallet.send_transactions(transactions).await?;

    log(LogTag::Swap, "EXECUTE_OK", "batch accepted by wallet");
    Ok(())
}

/// Decode one instruction into a wallet transaction
///
/// Action payloads arrive base64-encoded; they are JSON-decoded here and
/// otherwise handed to the wallet unmodified.
fn build_transaction(
    account_id: &str,
    near_transaction: &NearTransaction,
) -> Result<WalletTransaction, SwapError> {
    let mut actions = Vec::new();

    for action in &near_transaction.actions {
        let Some(call) = &action.function_call else {
            continue;
        };

        let decoded = BASE64.decode(&call.args).map_err(|e| {
            SwapError::MalformedInstruction(format!(
                "invalid base64 args for {}: {}",
                call.method_name, e
            ))
        })?;

        let args: Value = serde_json::from_slice(&decoded).map_err(|e| {
            SwapError::MalformedInstruction(format!(
                "invalid JSON args for {}: {}",
                call.method_name, e
            ))
        })?;

        actions.push(FunctionCallAction {
            method_name: call.method_name.clone(),
            args,
            gas: call.gas.clone(),
            deposit: call.deposit.clone(),
        });
    }

    Ok(WalletTransaction {
        signer_id: account_id.to_string(),
        receiver_id: near_transaction.receiver_id.clone(),
        actions,
    })
}
