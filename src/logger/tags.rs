/// Log tag definitions - one per subsystem
///
/// Tags drive both the colored console prefix and the per-module
/// `--debug-<tag>` gating.
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Api,
    Swap,
    Tokens,
    Price,
    Wallet,
    Cache,
}

impl LogTag {
    /// Plain string for file-style output and tests
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Api => "API",
            LogTag::Swap => "SWAP",
            LogTag::Tokens => "TOKENS",
            LogTag::Price => "PRICE",
            LogTag::Wallet => "WALLET",
            LogTag::Cache => "CACHE",
        }
    }

    /// Key used in `--debug-<key>` command-line flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Api => "api",
            LogTag::Swap => "swap",
            LogTag::Tokens => "tokens",
            LogTag::Price => "price",
            LogTag::Wallet => "wallet",
            LogTag::Cache => "cache",
        }
    }

    /// Colored representation for console output
    pub fn colored(&self) -> ColoredString {
        match self {
            LogTag::System => self.to_plain_string().white().bold(),
            LogTag::Api => self.to_plain_string().cyan(),
            LogTag::Swap => self.to_plain_string().green().bold(),
            LogTag::Tokens => self.to_plain_string().yellow(),
            LogTag::Price => self.to_plain_string().magenta(),
            LogTag::Wallet => self.to_plain_string().blue().bold(),
            LogTag::Cache => self.to_plain_string().bright_black(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
