//! REST API client module for the Syve price service.
//!
//! This module provides a typed HTTP client for the historical OHLC price
//! endpoint and the API-key usage check.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use syve_ohlc::api::{OhlcParams, SyveApiClient};
//! use syve_ohlc::shared::Precision;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with default settings
//!     let client = SyveApiClient::new("my-api-key")?;
//!
//!     // Validate the key once at startup
//!     client.check_usage().await?;
//!
//!     // Fetch rounded display rows
//!     let params = OhlcParams::new("0x6982508145454ce325ddbe47a25d4ec3d2311933")
//!         .with_time_range(1_704_067_200, 1_704_671_999);
//!     let rows = client.fetch_ohlc(&params, Precision::FourSig).await?;
//!     println!("{} rows", rows.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use syve_ohlc::api::SyveApiClient;
//!
//! let client = SyveApiClient::builder("my-api-key")
//!     .base_url("https://staging.syve.ai")
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! Typed endpoint calls return `ApiResult<T>`, an alias for
//! `Result<T, ApiError>`. The fetch pipeline deliberately collapses every
//! cause into [`FetchFailure`]: callers get a tagged result, never a magic
//! sentinel error payload.

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{SyveApiClient, SyveApiClientBuilder};
pub use error::{ApiError, ApiResult, ErrorResponse, FetchFailure};
pub use types::*;
