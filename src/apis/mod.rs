/// HTTP clients for the external services the swap flow depends on
///
/// - `aggregator`: the DEX aggregator route endpoint (quote source)
/// - `prices`: the USD price endpoint (best-effort, cosmetic)
/// - `client`: shared reqwest wrapper with timeout and rate limiting

pub mod aggregator;
pub mod client;
pub mod prices;

pub use aggregator::{AggregatorClient, RouteAmount, RouteRequest};
pub use client::{HttpClient, RateLimiter};
pub use prices::PricesClient;
