//! Network URL constants for the Syve OHLC client.

/// Default REST API base URL for Syve.
pub const DEFAULT_API_URL: &str = "https://api.syve.ai";

/// Path of the historical OHLC price endpoint.
pub const OHLC_PATH: &str = "/v1/price/historical/ohlc";

/// Path of the API-key usage check endpoint.
pub const CHECK_USAGE_PATH: &str = "/v1/check-usage";
