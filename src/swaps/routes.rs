/// Route switching on an existing quote
///
/// Switching is a local, offline recomputation - nothing is re-fetched.
use crate::config::DEFAULT_TOKEN_DECIMALS;
use crate::logger::{log, LogTag};
use crate::utils::raw_amount_to_f64;

use super::types::SwapQuote;

/// Produce a new quote with a different candidate route selected
///
/// An out-of-bounds index returns the quote unchanged. The output USD value
/// is rescaled from the original quote's implied exchange rate; this assumes
/// the original price ratio still approximates the newly selected route and
/// is an approximation, not a re-quote.
pub fn select_route(quote: &SwapQuote, route_index: usize) -> SwapQuote {
    let route = match quote.available_routes.get(route_index) {
        Some(route) => route,
        None => return quote.clone(),
    };

    let output_amount = route.estimated_amount_out().to_string();
    let output_value = raw_amount_to_f64(&output_amount, DEFAULT_TOKEN_DECIMALS);

    let output_value_usd = quote.input_value_usd.and_then(|input_usd| {
        let input_value = raw_amount_to_f64(&quote.input_amount, DEFAULT_TOKEN_DECIMALS);
        if input_value > 0.0 {
            Some(output_value * (input_usd / input_value))
        } else {
            None
        }
    });

    log(
        LogTag::Swap,
        "ROUTE_SELECT",
        &format!("switched to route {} via {}", route_index, route.dex_id),
    );

    SwapQuote {
        output_amount,
        gas_estimate: route.gas_estimate_or_default(),
        output_value_usd,
        selected_route_index: route_index,
        ..quote.clone()
    }
}
