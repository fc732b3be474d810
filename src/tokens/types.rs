/// Token data structures shared across the catalog and swap modules
use crate::config::DEFAULT_TOKEN_DECIMALS;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// On-chain fungible token metadata (the `ft_metadata` view result)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub icon: Option<String>,
}

impl TokenMetadata {
    /// Build metadata from a view-call result, filling gaps from the
    /// contract id the way the catalog displays unknown tokens
    pub fn from_view_result(contract_id: &str, result: &Value) -> Self {
        Self {
            name: result
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(contract_id)
                .to_string(),
            symbol: result
                .get("symbol")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| default_symbol(contract_id)),
            decimals: result
                .get("decimals")
                .and_then(Value::as_u64)
                .map(|d| d as u32)
                .unwrap_or(DEFAULT_TOKEN_DECIMALS),
            icon: result
                .get("icon")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Placeholder metadata when the contract cannot be queried
    pub fn fallback(contract_id: &str) -> Self {
        Self {
            name: contract_id.to_string(),
            symbol: default_symbol(contract_id),
            decimals: DEFAULT_TOKEN_DECIMALS,
            icon: None,
        }
    }
}

/// Uppercased first label of the contract id ("usdt.tether-token.near" -> "USDT")
fn default_symbol(contract_id: &str) -> String {
    contract_id
        .split('.')
        .next()
        .unwrap_or(contract_id)
        .to_uppercase()
}

/// A catalog entry: identity plus whatever metadata is known so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub contract_id: String,
    pub display_name: String,
    #[serde(default)]
    pub is_native: bool,
    pub metadata: Option<TokenMetadata>,
}

/// A token readied for the swap form: metadata, balance and price resolved
#[derive(Debug, Clone)]
pub struct PreparedToken {
    pub contract_id: String,
    pub display_name: String,
    pub is_native: bool,
    pub metadata: TokenMetadata,
    /// Raw balance of the trading account ("0" when signed out or unknown)
    pub balance: String,
    /// USD price, 0.0 when unknown
    pub price_usd: f64,
}
