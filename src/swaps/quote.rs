/// Quote fetching against the DEX aggregator
///
/// One request per call, no internal retry - retry/backoff policy belongs to
/// the caller. USD values are best-effort: a price outage produces a quote
/// without them, never a failure.
use crate::apis::{AggregatorClient, PricesClient, RouteAmount, RouteRequest};
use crate::config::DEFAULT_TOKEN_DECIMALS;
use crate::errors::SwapError;
use crate::logger::{self, log, LogTag};
use crate::tokens::price::fetch_token_price;
use crate::utils::raw_amount_to_f64;

use super::types::{SwapQuote, SwapRoute};

/// Fetch a quote for an exact input amount
///
/// `raw_amount_in` is the input in raw units; `input_decimals` is only used
/// for the USD display value.
pub async fn fetch_swap_quote(
    aggregator: &AggregatorClient,
    prices: &PricesClient,
    token_in: &str,
    token_out: &str,
    raw_amount_in: &str,
    slippage_tolerance: f64,
    input_decimals: u32,
    trader_account_id: Option<&str>,
) -> Result<SwapQuote, SwapError> {
    log(
        LogTag::Swap,
        "QUOTE_START",
        &format!(
            "{} -> {} (amount_in: {}, slippage: {}%)",
            token_in, token_out, raw_amount_in, slippage_tolerance
        ),
    );

    let request = RouteRequest {
        token_in: token_in.to_string(),
        token_out: token_out.to_string(),
        amount: RouteAmount::In(raw_amount_in.to_string()),
        slippage_tolerance,
        trader_account_id: trader_account_id.map(str::to_string),
    };

    let routes = aggregator.fetch_routes(&request).await?;

    // Price lookups run concurrently and never block the quote
    let (input_price, output_price) = tokio::join!(
        fetch_token_price(prices, token_in),
        fetch_token_price(prices, token_out),
    );

    let quote = quote_from_routes(routes, raw_amount_in, input_decimals, input_price, output_price)?;

    log(
        LogTag::Swap,
        "QUOTE_OK",
        &format!(
            "{} route(s), best via {} (out: {})",
            quote.available_routes.len(),
            quote
                .selected_route()
                .map(|route| route.dex_id.as_str())
                .unwrap_or("?"),
            quote.output_amount
        ),
    );

    Ok(quote)
}

/// Fetch a quote for an exact output amount
///
/// The aggregator quotes the required input; everything else matches
/// `fetch_swap_quote`.
pub async fn fetch_swap_quote_for_output(
    aggregator: &AggregatorClient,
    prices: &PricesClient,
    token_in: &str,
    token_out: &str,
    raw_amount_out: &str,
    slippage_tolerance: f64,
    output_decimals: u32,
    trader_account_id: Option<&str>,
) -> Result<SwapQuote, SwapError> {
    log(
        LogTag::Swap,
        "QUOTE_START",
        &format!(
            "{} -> {} (amount_out: {}, slippage: {}%)",
            token_in, token_out, raw_amount_out, slippage_tolerance
        ),
    );

    let request = RouteRequest {
        token_in: token_in.to_string(),
        token_out: token_out.to_string(),
        amount: RouteAmount::Out(raw_amount_out.to_string()),
        slippage_tolerance,
        trader_account_id: trader_account_id.map(str::to_string),
    };

    let routes = aggregator.fetch_routes(&request).await?;

    let (input_price, output_price) = tokio::join!(
        fetch_token_price(prices, token_in),
        fetch_token_price(prices, token_out),
    );

    quote_from_routes_for_output(routes, raw_amount_out, output_decimals, input_price, output_price)
}

/// Build a quote from a fetched route array (exact-input form)
///
/// Pure: route ranking is trusted as-is, element 0 becomes the selection.
pub fn quote_from_routes(
    routes: Vec<SwapRoute>,
    raw_amount_in: &str,
    input_decimals: u32,
    input_price: f64,
    output_price: f64,
) -> Result<SwapQuote, SwapError> {
    if routes.is_empty() {
        logger::warning(LogTag::Swap, "NO_ROUTES", "aggregator returned no routes");
        return Err(SwapError::NoRoutesFound);
    }

    let best = &routes[0];
    let output_amount = best.estimated_amount_out().to_string();
    let gas_estimate = best.gas_estimate_or_default();

    let input_value = raw_amount_to_f64(raw_amount_in, input_decimals);
    let output_value = raw_amount_to_f64(&output_amount, DEFAULT_TOKEN_DECIMALS);

    Ok(SwapQuote {
        input_amount: raw_amount_in.to_string(),
        output_amount,
        gas_estimate,
        input_value_usd: positive_value(input_price, input_value),
        output_value_usd: positive_value(output_price, output_value),
        available_routes: routes,
        selected_route_index: 0,
    })
}

/// Build a quote from a fetched route array (exact-output form)
///
/// The best route's `amount_in` estimate becomes the quote's input amount.
pub fn quote_from_routes_for_output(
    routes: Vec<SwapRoute>,
    raw_amount_out: &str,
    output_decimals: u32,
    input_price: f64,
    output_price: f64,
) -> Result<SwapQuote, SwapError> {
    if routes.is_empty() {
        logger::warning(LogTag::Swap, "NO_ROUTES", "aggregator returned no routes");
        return Err(SwapError::NoRoutesFound);
    }

    let best = &routes[0];
    let input_amount = best.estimated_amount_in().to_string();
    let gas_estimate = best.gas_estimate_or_default();

    let input_value = raw_amount_to_f64(&input_amount, DEFAULT_TOKEN_DECIMALS);
    let output_value = raw_amount_to_f64(raw_amount_out, output_decimals);

    Ok(SwapQuote {
        input_amount,
        output_amount: raw_amount_out.to_string(),
        gas_estimate,
        input_value_usd: positive_value(input_price, input_value),
        output_value_usd: positive_value(output_price, output_value),
        available_routes: routes,
        selected_route_index: 0,
    })
}

/// USD value only when the price lookup actually produced a price
fn positive_value(price: f64, amount: f64) -> Option<f64> {
    if price > 0.0 {
        Some(amount * price)
    } else {
        None
    }
}
