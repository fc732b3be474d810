/// USD price lookups for catalog tokens
///
/// The price service only knows contract-issued tokens, so the native asset
/// is priced through its wrapped form. Prices are cosmetic: unknown is 0.0,
/// never an error.
use crate::apis::PricesClient;
use crate::config::{NATIVE_TOKEN_ID, WRAPPED_NATIVE_TOKEN_ID};

/// Contract id to use when asking the price service about a token
pub fn pricing_token_id(contract_id: &str) -> &str {
    if contract_id == NATIVE_TOKEN_ID {
        WRAPPED_NATIVE_TOKEN_ID
    } else {
        contract_id
    }
}

/// Fetch the USD price for a token, mapping the native sentinel to its
/// wrapped form first
pub async fn fetch_token_price(prices: &PricesClient, contract_id: &str) -> f64 {
    prices.fetch_price(pricing_token_id(contract_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::prices::parse_price_value;
    use serde_json::json;

    #[test]
    fn native_asset_is_priced_through_wrap() {
        assert_eq!(pricing_token_id("near"), "wrap.near");
        assert_eq!(pricing_token_id("wrap.near"), "wrap.near");
        assert_eq!(pricing_token_id("usdt.tether-token.near"), "usdt.tether-token.near");
    }

    #[test]
    fn price_parsing_accepts_every_documented_shape() {
        assert_eq!(parse_price_value(&json!("3.25")), 3.25);
        assert_eq!(parse_price_value(&json!(3.25)), 3.25);
        assert_eq!(parse_price_value(&json!({ "price": 3.25 })), 3.25);
        assert_eq!(parse_price_value(&json!({ "price_usd": "3.25" })), 3.25);
        assert_eq!(parse_price_value(&json!({ "usd_price": 3.25 })), 3.25);
    }

    #[test]
    fn unparsable_prices_become_zero() {
        assert_eq!(parse_price_value(&json!("not a number")), 0.0);
        assert_eq!(parse_price_value(&json!(null)), 0.0);
        assert_eq!(parse_price_value(&json!({ "unrelated": 1 })), 0.0);
        assert_eq!(parse_price_value(&json!(-1.0)), 0.0);
    }
}
