/// Token preparation for the swap form
///
/// Assembles metadata, balance and price for a selected token. Balance and
/// price failures degrade to "0" - selection must always succeed so the form
/// stays usable.
use crate::apis::PricesClient;
use crate::logger::{self, LogTag};
use crate::tokens::price::fetch_token_price;
use crate::tokens::{MetadataCache, PreparedToken, Token};
use crate::wallet::Wallet;

use serde_json::json;
use std::sync::Arc;

/// Fetch a token balance for an account via `ft_balance_of`, "0" on failure
pub async fn fetch_token_balance(
    wallet: &dyn Wallet,
    contract_id: &str,
    account_id: &str,
) -> String {
    let result = wallet
        .view(contract_id, "ft_balance_of", json!({ "account_id": account_id }))
        .await;

    match result {
        Ok(value) => value.as_str().unwrap_or("0").to_string(),
        Err(e) => {
            logger::debug(
                LogTag::Tokens,
                "BALANCE_UNAVAILABLE",
                &format!("{} for {}: {}", contract_id, account_id, e),
            );
            "0".to_string()
        }
    }
}

/// Resolve a catalog token into a fully prepared swap token
///
/// The native asset keeps its fixed metadata and is priced through wrap;
/// its account balance is not reachable through the wallet capability, so it
/// reports "0".
pub async fn prepare_token(
    wallet: Arc<dyn Wallet>,
    cache: &Arc<MetadataCache>,
    prices: &PricesClient,
    token: &Token,
) -> PreparedToken {
    let account_id = wallet.account_id();

    let (metadata, price_usd) = tokio::join!(
        cache.fetch(wallet.clone(), &token.contract_id),
        fetch_token_price(prices, &token.contract_id),
    );

    let balance = match &account_id {
        Some(account) if !token.is_native => {
            fetch_token_balance(wallet.as_ref(), &token.contract_id, account).await
        }
        _ => "0".to_string(),
    };

    PreparedToken {
        contract_id: token.contract_id.clone(),
        display_name: if metadata.symbol.is_empty() {
            token.display_name.clone()
        } else {
            metadata.symbol.clone()
        },
        is_native: token.is_native,
        metadata,
        balance,
        price_usd,
    }
}
