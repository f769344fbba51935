//! # Syve OHLC Client
//!
//! A Rust client for the Syve historical OHLC price API.
//!
//! ## Modules
//!
//! - [`api`]: REST client for the OHLC endpoint and the key usage check
//! - [`shared`]: intervals, window normalization, price formatting, input
//!   enums
//! - [`export`]: CSV rendering of fetched candles
//! - [`config`]: local API-key configuration
//! - [`network`]: endpoint URL constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use syve_ohlc::api::{OhlcParams, SyveApiClient};
//! use syve_ohlc::shared::{parse_user_window, Interval, Precision};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SyveApiClient::new("my-api-key")?;
//!     client.check_usage().await?;
//!
//!     let window = parse_user_window(
//!         "0x6982508145454Ce325dDbE47a25d4ec3d2311933",
//!         "2024-01-01",
//!         "2024-01-07",
//!         Interval::OneHour,
//!     )?;
//!
//!     let params = OhlcParams::from_window(&window);
//!     let rows = client.fetch_ohlc(&params, Precision::FourSig).await?;
//!     println!("{}", syve_ohlc::export::to_csv(&rows));
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module for OHLC price history.
pub mod api;

/// Local API-key configuration.
pub mod config;

/// CSV export of fetched candles.
pub mod export;

/// Network URL constants.
pub mod network;

/// Shared utilities and types: intervals, window normalization, price
/// formatting and the request input enums.
pub mod shared;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use syve_ohlc::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    pub use crate::api::{
        ApiError, ApiResult, ErrorResponse, FetchFailure, OhlcParams, OhlcRecord, OhlcResponse,
        OhlcRow, SyveApiClient, SyveApiClientBuilder,
    };

    // Shared utilities
    pub use crate::shared::{
        align_until_to_interval, interval_to_seconds, parse_user_window, round_to_precision,
        Chain, Interval, InvalidDate, InvalidInterval, OpenMethod, Precision, PriceType,
        SortOrder, UserWindow,
    };

    // Config and export
    pub use crate::config::{AppConfig, ConfigError};
    pub use crate::export::{file_name, to_csv, CSV_HEADER};

    // Network constants
    pub use crate::network::DEFAULT_API_URL;
}
