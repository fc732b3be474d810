/// nearswap command-line interface
///
/// Thin front-end over the library: quote a swap or look up a USD price from
/// the terminal. Execution is not wired here since signing needs a wallet
/// provider; integrators inject one through the `Wallet` trait.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use nearswap::apis::{AggregatorClient, PricesClient};
use nearswap::config::{
    DEFAULT_SLIPPAGE_PERCENT, DEFAULT_TOKEN_DECIMALS, NATIVE_TOKEN_DECIMALS, NATIVE_TOKEN_ID,
};
use nearswap::logger::{self, log, LogTag};
use nearswap::swaps::{fetch_swap_quote, validate_swap_params, SwapParams};
use nearswap::utils::{format_token_amount, to_raw_amount};

#[derive(Parser)]
#[command(name = "nearswap", version, about = "NEAR token swap quoting via the Intear DEX aggregator")]
struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Enable debug logging for all modules
    #[arg(long, global = true)]
    debug_all: bool,

    /// Enable swap debug logging
    #[arg(long, global = true)]
    debug_swap: bool,

    /// Enable API debug logging
    #[arg(long, global = true)]
    debug_api: bool,

    /// Enable token debug logging
    #[arg(long, global = true)]
    debug_tokens: bool,

    /// Enable wallet debug logging
    #[arg(long, global = true)]
    debug_wallet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the best routes for a swap
    Quote {
        /// Input token contract id ("near" for the native token)
        token_in: String,
        /// Output token contract id
        token_out: String,
        /// Display amount of the input token, e.g. "1.5"
        amount: String,
        /// Slippage tolerance in percent
        #[arg(long, default_value_t = DEFAULT_SLIPPAGE_PERCENT)]
        slippage: f64,
        /// Account the routes will be executed from
        #[arg(long, default_value = "quote-only.near")]
        account: String,
        /// Input token decimals (native and 18-decimal tokens need no override)
        #[arg(long)]
        decimals_in: Option<u32>,
        /// Output token decimals, used only for display
        #[arg(long)]
        decimals_out: Option<u32>,
    },
    /// Fetch the USD price for a token contract
    Price {
        /// Token contract id ("near" for the native token)
        token_id: String,
    },
}

fn token_decimals(token_id: &str, override_decimals: Option<u32>) -> u32 {
    if let Some(decimals) = override_decimals {
        return decimals;
    }
    if token_id == NATIVE_TOKEN_ID {
        NATIVE_TOKEN_DECIMALS
    } else {
        DEFAULT_TOKEN_DECIMALS
    }
}

async fn run_quote(
    token_in: String,
    token_out: String,
    amount: String,
    slippage: f64,
    account: String,
    decimals_in: Option<u32>,
    decimals_out: Option<u32>,
) -> Result<()> {
    let params = SwapParams {
        token_in: token_in.clone(),
        token_out: token_out.clone(),
        amount_in: amount.clone(),
        account_id: account.clone(),
        slippage_tolerance: slippage,
    };
    if let Err(e) = validate_swap_params(&params) {
        println!("{}", e.user_message().red());
        return Err(e.into());
    }

    let input_decimals = token_decimals(&token_in, decimals_in);
    let output_decimals = token_decimals(&token_out, decimals_out);

    let raw_amount_in = to_raw_amount(&amount, input_decimals);

    let aggregator = AggregatorClient::new().context("failed to build aggregator client")?;
    let prices = PricesClient::new().context("failed to build prices client")?;

    let quote = match fetch_swap_quote(
        &aggregator,
        &prices,
        &token_in,
        &token_out,
        &raw_amount_in,
        slippage,
        input_decimals,
        Some(&account),
    )
    .await
    {
        Ok(quote) => quote,
        Err(e) => {
            logger::error(LogTag::Swap, "QUOTE_FAILED", &e.to_string());
            println!("{}", e.user_message().red());
            return Err(e.into());
        }
    };

    println!();
    println!(
        "  {} {} -> {}",
        "Swap".bold(),
        token_in.cyan(),
        token_out.cyan()
    );
    println!(
        "  {}  {} ({})",
        "In:".bold(),
        format_token_amount(&quote.input_amount, input_decimals),
        usd_label(quote.input_value_usd)
    );
    println!(
        "  {} {} ({})",
        "Out:".bold(),
        format_token_amount(&quote.output_amount, output_decimals),
        usd_label(quote.output_value_usd)
    );
    println!("  {} {}", "Gas:".bold(), quote.gas_estimate.dimmed());
    println!();
    println!("  {}", "Routes (best first):".bold());
    for (index, route) in quote.available_routes.iter().enumerate() {
        let marker = if index == quote.selected_route_index {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "  {} [{}] {} (out: {})",
            marker,
            index,
            route.dex_id,
            format_token_amount(route.estimated_amount_out(), output_decimals)
        );
    }
    println!();

    Ok(())
}

async fn run_price(token_id: String) -> Result<()> {
    let prices = PricesClient::new().context("failed to build prices client")?;
    let price = nearswap::tokens::price::fetch_token_price(&prices, &token_id).await;

    if price > 0.0 {
        println!("{} = {} USD", token_id.cyan(), format!("{}", price).green());
    } else {
        println!("{} = {}", token_id.cyan(), "price unavailable".yellow());
    }

    Ok(())
}

fn usd_label(value: Option<f64>) -> String {
    match value {
        Some(usd) => format!("${:.2}", usd),
        None => "USD n/a".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The logger reads these flags from the raw argument list; clap only
    // needs them declared so they are accepted
    let debugging = cli.verbose
        || cli.debug_all
        || cli.debug_swap
        || cli.debug_api
        || cli.debug_tokens
        || cli.debug_wallet;
    if debugging {
        log(LogTag::System, "START", "nearswap CLI (debug logging on)");
    }

    match cli.command {
        Command::Quote {
            token_in,
            token_out,
            amount,
            slippage,
            account,
            decimals_in,
            decimals_out,
        } => {
            run_quote(
                token_in,
                token_out,
                amount,
                slippage,
                account,
                decimals_in,
                decimals_out,
            )
            .await
        }
        Command::Price { token_id } => run_price(token_id).await,
    }
}
