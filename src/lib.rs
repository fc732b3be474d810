/// nearswap: NEAR token swap library built on the Intear DEX aggregator
///
/// The crate is organized around one flow: convert a display amount to raw
/// units, fetch ranked routes plus best-effort USD prices, optionally switch
/// routes offline, validate, and execute the selected route through an
/// injected wallet capability in a single approval.

pub mod apis;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod global;
pub mod logger;
pub mod swaps;
pub mod tokens;
pub mod utils;
pub mod wallet;

pub use debounce::QuoteDebouncer;
pub use errors::SwapError;
pub use swaps::{
    execute_swap, fetch_swap_quote, fetch_swap_quote_for_output, select_route,
    validate_swap_params, SwapParams, SwapQuote, SwapRoute,
};
pub use tokens::types::{PreparedToken, Token, TokenMetadata};
pub use wallet::{Wallet, WalletError, WalletTransaction};
