//! Command-line downloader for Syve OHLC price history.
//!
//! Loads (or prompts for) the API key, validates it against the usage
//! endpoint, normalizes the requested window, issues one fetch and writes
//! the result as a CSV file.

use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use chrono::{Days, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use syve_ohlc::api::{ApiError, OhlcParams, SyveApiClient};
use syve_ohlc::config::{AppConfig, DEFAULT_CONFIG_PATH};
use syve_ohlc::export;
use syve_ohlc::shared::{
    parse_user_window, Chain, Interval, OpenMethod, Precision, PriceType, SortOrder,
};

const MAX_SIZES: [u32; 5] = [100, 150, 200, 250, 1000];

fn parse_max_size(s: &str) -> Result<u32, String> {
    let value: u32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if MAX_SIZES.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "max size must be one of {}",
            MAX_SIZES.map(|v| v.to_string()).join(", ")
        ))
    }
}

/// Download token OHLC price history from the Syve API as CSV.
#[derive(Debug, Parser)]
#[command(name = "syve-ohlc", version, about)]
struct Args {
    /// Token contract address
    token_address: String,

    /// Pool address, or "all" to aggregate across pools
    #[arg(long, default_value = "all")]
    pool_address: String,

    /// Chain the token trades on (eth, matic, base)
    #[arg(long, default_value = "eth", value_parser = Chain::from_str)]
    chain: Chain,

    /// Price series the candles are built from
    #[arg(long, default_value = "robust", value_parser = PriceType::from_str)]
    price_type: PriceType,

    /// Candle interval (1m, 5m, 15m, 30m, 1h, 4h, 1d)
    #[arg(long, default_value = "1h", value_parser = Interval::from_str)]
    interval: Interval,

    /// Window start date, YYYY-MM-DD UTC (default: 7 days ago)
    #[arg(long)]
    from: Option<String>,

    /// Window end date, YYYY-MM-DD UTC (default: today)
    #[arg(long)]
    until: Option<String>,

    /// Price display precision in significant digits (2g..6g)
    #[arg(long, default_value = "4g", value_parser = Precision::from_str)]
    precision: Precision,

    /// Drop candles with no trades
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    skip_null: bool,

    /// Forward-fill gaps between candles
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    fill: bool,

    /// Ordering of the returned candles (asc, desc)
    #[arg(long, default_value = "desc", value_parser = SortOrder::from_str)]
    order: SortOrder,

    /// Maximum number of candles (100, 150, 200, 250, 1000)
    #[arg(long, default_value_t = 200, value_parser = parse_max_size)]
    max_size: u32,

    /// Open-price derivation method (prev_close, first_trade)
    #[arg(long, default_value = "prev_close", value_parser = OpenMethod::from_str)]
    open_method: OpenMethod,

    /// Directory the CSV file is written to
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Path of the API-key config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let (mut config, mut from_file) = match AppConfig::load(&config_path) {
        Ok(config) => (config, true),
        Err(_) => (AppConfig::new(prompt_for_key()?), false),
    };

    let mut client = SyveApiClient::new(config.syve_api_key.clone())?;
    if let Err(e) = client.check_usage().await {
        match e {
            ApiError::InvalidApiKey(_) if from_file => {
                // Stored key no longer valid, ask for a fresh one.
                eprintln!("Stored Syve API key is invalid.");
                config = AppConfig::new(prompt_for_key()?);
                from_file = false;
                client = SyveApiClient::new(config.syve_api_key.clone())?;
                client
                    .check_usage()
                    .await
                    .context("provided Syve API key is invalid")?;
            }
            e => return Err(e).context("provided Syve API key is invalid"),
        }
    }
    if !from_file {
        config
            .store(&config_path)
            .with_context(|| format!("failed to store config at {}", config_path.display()))?;
    }
    tracing::info!("API key validated");

    let today = Utc::now().date_naive();
    let until_date = args
        .until
        .clone()
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
    let from_date = args.from.clone().unwrap_or_else(|| {
        (today - Days::new(7)).format("%Y-%m-%d").to_string()
    });

    let window = parse_user_window(&args.token_address, &from_date, &until_date, args.interval)?;
    let params = OhlcParams::from_window(&window)
        .with_pool_address(args.pool_address.clone())
        .with_chain(args.chain)
        .with_interval(args.interval)
        .with_price_type(args.price_type)
        .with_skip_null(args.skip_null)
        .with_fill(args.fill)
        .with_order(args.order)
        .with_max_size(args.max_size)
        .with_open_method(args.open_method);

    let rows = client.fetch_ohlc(&params, args.precision).await?;

    let csv = export::to_csv(&rows);
    let file_name = export::file_name(&window.token_address, &from_date, &until_date);
    fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let out_path = args.output.join(file_name);
    fs::write(&out_path, csv)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("Wrote {} rows to {}", rows.len(), out_path.display());
    Ok(())
}

fn prompt_for_key() -> anyhow::Result<String> {
    print!("Enter Syve API Key: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
