/// DEX aggregator route client
///
/// Issues one GET per quote request and returns the raw route array. The
/// aggregator pre-sorts routes best-first; this client does not reorder or
/// retry - retry policy belongs to the caller.
use crate::config::{
    ALLOWED_DEXES, DEX_AGGREGATOR_URL, MAX_WAIT_MS, QUOTE_TIMEOUT_SECS, SLIPPAGE_TYPE,
};
use crate::errors::SwapError;
use crate::logger::{self, LogTag};
use crate::swaps::types::SwapRoute;

use super::client::HttpClient;

/// Which side of the swap the caller fixed
#[derive(Debug, Clone)]
pub enum RouteAmount {
    /// Exact input: the aggregator quotes the output
    In(String),
    /// Exact output: the aggregator quotes the required input
    Out(String),
}

/// One route request to the aggregator
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub token_in: String,
    pub token_out: String,
    pub amount: RouteAmount,
    /// Slippage tolerance in percent (e.g. 1.0 for 1%)
    pub slippage_tolerance: f64,
    pub trader_account_id: Option<String>,
}

pub struct AggregatorClient {
    http: HttpClient,
    base_url: String,
}

impl AggregatorClient {
    pub fn new() -> Result<Self, SwapError> {
        Self::with_base_url(DEX_AGGREGATOR_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, SwapError> {
        Ok(Self {
            http: HttpClient::new(QUOTE_TIMEOUT_SECS)?,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch candidate routes for a swap
    ///
    /// Returns the array exactly as the service ranked it; an empty array is
    /// returned as-is and mapped to `NoRoutesFound` by the quote layer.
    pub async fn fetch_routes(&self, request: &RouteRequest) -> Result<Vec<SwapRoute>, SwapError> {
        // The service takes the slippage as a decimal fraction
        let slippage_fraction = request.slippage_tolerance / 100.0;

        let mut params: Vec<(&str, String)> = vec![
            ("token_in", request.token_in.clone()),
            ("token_out", request.token_out.clone()),
        ];

        match &request.amount {
            RouteAmount::In(amount) => params.push(("amount_in", amount.clone())),
            RouteAmount::Out(amount) => params.push(("amount_out", amount.clone())),
        }

        params.push(("max_wait_ms", MAX_WAIT_MS.to_string()));
        params.push(("slippage_type", SLIPPAGE_TYPE.to_string()));
        params.push(("slippage", slippage_fraction.to_string()));
        params.push(("dexes", ALLOWED_DEXES.to_string()));

        if let Some(trader) = &request.trader_account_id {
            params.push(("trader_account_id", trader.clone()));
        }

        logger::debug(
            LogTag::Api,
            "ROUTE_REQUEST",
            &format!(
                "{} -> {} ({:?}, slippage {}%)",
                request.token_in, request.token_out, request.amount, request.slippage_tolerance
            ),
        );

        let response = self
            .http
            .client()
            .get(&self.base_url)
            .query(&params)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SwapError::QuoteFetchFailed(format!(
                "HTTP {} from aggregator",
                response.status()
            )));
        }

        let routes: Vec<SwapRoute> = response
            .json()
            .await
            .map_err(|e| SwapError::QuoteFetchFailed(format!("Invalid route response: {}", e)))?;

        logger::debug(
            LogTag::Api,
            "ROUTE_RESPONSE",
            &format!("{} candidate route(s)", routes.len()),
        );

        Ok(routes)
    }
}
