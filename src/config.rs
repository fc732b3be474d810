/// Swap client configuration - hardcoded parameters
/// Endpoints, timeouts and limits for the aggregator and price services

// =============================================================================
// SERVICE ENDPOINTS
// =============================================================================

/// Intear DEX aggregator route endpoint
pub const DEX_AGGREGATOR_URL: &str = "https://router.intear.tech/route";

/// Intear super-precise price endpoint
pub const PRICES_API_URL: &str = "https://prices.intear.tech/super-precise-price";

// =============================================================================
// AGGREGATOR REQUEST PARAMETERS
// =============================================================================

/// Maximum time the aggregator may spend collecting routes (sent as a string)
pub const MAX_WAIT_MS: u64 = 3000;

/// Slippage model requested from the aggregator
pub const SLIPPAGE_TYPE: &str = "Fixed";

/// Venues the aggregator is allowed to route through
pub const ALLOWED_DEXES: &str = "Rhea,Veax,Aidols,GraFun,Wrap,RheaDcl";

/// Gas estimate used when a route omits one (30 Tgas)
pub const DEFAULT_GAS_ESTIMATE: &str = "30000000000000";

// =============================================================================
// HTTP TIMEOUTS
// =============================================================================

/// Quote request timeout (seconds)
pub const QUOTE_TIMEOUT_SECS: u64 = 15;

/// Price request timeout (seconds)
pub const PRICE_TIMEOUT_SECS: u64 = 10;

/// Price endpoint request budget per minute
pub const PRICE_REQUESTS_PER_MINUTE: usize = 120;

// =============================================================================
// TOKEN IDENTIFIERS
// =============================================================================

/// Sentinel contract id for the chain's native asset
pub const NATIVE_TOKEN_ID: &str = "near";

/// Wrapped-native contract used as the pricing proxy for the native asset
pub const WRAPPED_NATIVE_TOKEN_ID: &str = "wrap.near";

/// Native asset decimals (yoctoNEAR)
pub const NATIVE_TOKEN_DECIMALS: u32 = 24;

/// Fallback decimals when a token's metadata is unavailable
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

// =============================================================================
// SLIPPAGE CONFIGURATION
// =============================================================================

/// Minimum accepted slippage tolerance (percent)
pub const MIN_SLIPPAGE_PERCENT: f64 = 0.1;

/// Maximum accepted slippage tolerance (percent)
pub const MAX_SLIPPAGE_PERCENT: f64 = 50.0;

/// Default slippage tolerance (percent)
pub const DEFAULT_SLIPPAGE_PERCENT: f64 = 1.0;

// =============================================================================
// QUOTE REFRESH BEHAVIOR
// =============================================================================

/// Delay before a user edit triggers a quote fetch (milliseconds)
pub const QUOTE_DEBOUNCE_MS: u64 = 500;

// =============================================================================
// STORAGE
// =============================================================================

/// SQLite database file for the persisted token catalog
pub const TOKENS_DATABASE: &str = "tokens.db";
