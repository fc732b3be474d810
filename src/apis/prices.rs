/// USD price client
///
/// Price display is cosmetic: every failure path here resolves to price 0
/// (unknown) so a price outage can never block a swap.
use crate::config::{PRICES_API_URL, PRICE_REQUESTS_PER_MINUTE, PRICE_TIMEOUT_SECS};
use crate::errors::SwapError;
use crate::logger::{self, LogTag};
use serde_json::Value;

use super::client::{HttpClient, RateLimiter};

pub struct PricesClient {
    http: HttpClient,
    limiter: RateLimiter,
    base_url: String,
}

impl PricesClient {
    pub fn new() -> Result<Self, SwapError> {
        Self::with_base_url(PRICES_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, SwapError> {
        Ok(Self {
            http: HttpClient::new(PRICE_TIMEOUT_SECS)?,
            limiter: RateLimiter::new(PRICE_REQUESTS_PER_MINUTE),
            base_url: base_url.to_string(),
        })
    }

    /// Fetch the USD price for a token contract, 0.0 when unknown
    pub async fn fetch_price(&self, token_id: &str) -> f64 {
        let _guard = match self.limiter.acquire().await {
            Ok(guard) => guard,
            Err(_) => return 0.0,
        };

        let response = match self
            .http
            .client()
            .get(&self.base_url)
            .query(&[("token_id", token_id)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                logger::debug(
                    LogTag::Price,
                    "PRICE_UNAVAILABLE",
                    &format!("{}: {}", token_id, e),
                );
                return 0.0;
            }
        };

        if !response.status().is_success() {
            return 0.0;
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(_) => return 0.0,
        };

        let price = parse_price_value(&body);

        logger::verbose(
            LogTag::Price,
            "PRICE",
            &format!("{} = {} USD", token_id, price),
        );

        price
    }
}

/// Extract a price from the endpoint's response shapes
///
/// The super-precise endpoint returns a bare numeric string; older endpoints
/// return a number or an object with a price field. Anything else is 0.
pub fn parse_price_value(body: &Value) -> f64 {
    let price = match body {
        Value::String(s) => s.parse::<f64>().unwrap_or(0.0),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Object(fields) => ["price", "price_usd", "usd_price"]
            .iter()
            .find_map(|key| fields.get(*key))
            .map(|value| match value {
                Value::String(s) => s.parse::<f64>().unwrap_or(0.0),
                Value::Number(n) => n.as_f64().unwrap_or(0.0),
                _ => 0.0,
            })
            .unwrap_or(0.0),
        _ => 0.0,
    };

    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}
