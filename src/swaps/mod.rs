/// Swap module: quoting, route selection, validation and execution
/// against the Intear DEX aggregator

pub mod execution;
pub mod quote;
pub mod routes;
pub mod types;
pub mod validation;


pub use execution::execute_swap;
pub use quote::{
    fetch_swap_quote, fetch_swap_quote_for_output, quote_from_routes, quote_from_routes_for_output,
};
pub use routes::select_route;
pub use types::{SwapParams, SwapQuote, SwapRoute};
pub use validation::validate_swap_params;
