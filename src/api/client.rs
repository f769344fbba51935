//! Syve REST API client implementation.
//!
//! The [`SyveApiClient`] provides a typed interface to the Syve price API:
//! the raw OHLC endpoint ([`get_ohlc`](SyveApiClient::get_ohlc)), the full
//! fetch-and-reshape pipeline ([`fetch_ohlc`](SyveApiClient::fetch_ohlc))
//! and the API-key usage check ([`check_usage`](SyveApiClient::check_usage)).
//!
//! # Example
//!
//! ```rust,ignore
//! use syve_ohlc::api::SyveApiClient;
//! use syve_ohlc::shared::{parse_user_window, Interval, Precision};
//! use syve_ohlc::api::OhlcParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SyveApiClient::new("my-api-key")?;
//!
//!     let window = parse_user_window(
//!         "0x6982508145454Ce325dDbE47a25d4ec3d2311933",
//!         "2024-01-01",
//!         "2024-01-07",
//!         Interval::OneHour,
//!     )?;
//!     let params = OhlcParams::from_window(&window);
//!
//!     let rows = client.fetch_ohlc(&params, Precision::FourSig).await?;
//!     println!("{} candles", rows.len());
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::api::error::{ApiError, ApiResult, ErrorResponse, FetchFailure};
use crate::api::types::{OhlcParams, OhlcResponse, OhlcRow};
use crate::network::{CHECK_USAGE_PATH, DEFAULT_API_URL, OHLC_PATH};
use crate::shared::types::Precision;
use crate::shared::window::align_until_to_interval;

/// Builder for configuring [`SyveApiClient`].
#[derive(Debug, Clone)]
pub struct SyveApiClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl SyveApiClientBuilder {
    /// Create a new builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout. By default no timeout is configured and the
    /// HTTP client's own defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<SyveApiClient> {
        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = reqwest::header::HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let http_client = builder.default_headers(headers).build()?;

        Ok(SyveApiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        })
    }
}

/// Syve REST API client.
///
/// Holds the API key as configuration; it is appended to every request and
/// never travels inside the query parameter bundles.
#[derive(Debug, Clone)]
pub struct SyveApiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl SyveApiClient {
    /// Create a new client for the default API URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        SyveApiClientBuilder::new(api_key).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> SyveApiClientBuilder {
        SyveApiClientBuilder::new(api_key)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Execute a GET request and deserialize the JSON body.
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.parse_error_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize response: {}", e)))
    }

    /// Parse an error response into an ApiError.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status();
        let error_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                return Self::map_status_error(
                    status,
                    ErrorResponse::from_text(format!("HTTP {} (body unreadable: {})", status, e)),
                );
            }
        };

        let error_response = serde_json::from_str::<ErrorResponse>(&error_text)
            .unwrap_or_else(|_| ErrorResponse::from_text(error_text));

        Self::map_status_error(status, error_response)
    }

    /// Map HTTP status code to ApiError.
    fn map_status_error(status: StatusCode, response: ErrorResponse) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ApiError::InvalidApiKey(response.get_message())
            }
            _ => ApiError::UnexpectedStatus(status.as_u16(), response.get_message()),
        }
    }

    /// Extract the `error` field from a success body, if present. Syve
    /// reports some failures with HTTP 200 and an `error` field.
    fn body_error(value: &serde_json::Value) -> Option<String> {
        value
            .get("error")
            .map(|err| err.as_str().map(str::to_string).unwrap_or_else(|| err.to_string()))
    }

    // =========================================================================
    // API-key endpoints
    // =========================================================================

    /// Validate the configured API key against `GET /v1/check-usage`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidApiKey`] when the service reports an
    /// `error` field for the key.
    pub async fn check_usage(&self) -> ApiResult<()> {
        let url = format!(
            "{}{}?key={}",
            self.base_url,
            CHECK_USAGE_PATH,
            urlencoding::encode(&self.api_key)
        );
        let value: serde_json::Value = self.get(&url).await?;
        if let Some(message) = Self::body_error(&value) {
            return Err(ApiError::InvalidApiKey(message));
        }
        Ok(())
    }

    // =========================================================================
    // OHLC price-history endpoints
    // =========================================================================

    /// Get historical OHLC candles.
    ///
    /// Issues the raw endpoint call with every parameter of `params` plus
    /// the configured key, and returns the typed response. Callers wanting
    /// the display/export pipeline should use
    /// [`fetch_ohlc`](SyveApiClient::fetch_ohlc) instead.
    pub async fn get_ohlc(&self, params: &OhlcParams) -> ApiResult<OhlcResponse> {
        let mut url = format!(
            "{}{}?token_address={}",
            self.base_url,
            OHLC_PATH,
            urlencoding::encode(&params.token_address)
        );
        url.push_str(&format!(
            "&pool_address={}",
            urlencoding::encode(&params.pool_address)
        ));
        url.push_str(&format!("&interval={}", params.interval));
        url.push_str(&format!("&from_timestamp={}", params.from_timestamp));
        url.push_str(&format!("&until_timestamp={}", params.until_timestamp));
        url.push_str(&format!("&price_type={}", params.price_type));
        url.push_str(&format!("&chain={}", params.chain));
        url.push_str(&format!("&skip_null={}", params.skip_null));
        url.push_str(&format!("&fill={}", params.fill));
        url.push_str(&format!("&max_size={}", params.max_size));
        url.push_str(&format!("&order={}", params.order));
        url.push_str(&format!("&open_method={}", params.open_method));
        url.push_str(&format!("&key={}", urlencoding::encode(&self.api_key)));

        tracing::debug!(
            token_address = %params.token_address,
            interval = %params.interval,
            from = params.from_timestamp,
            until = params.until_timestamp,
            "requesting OHLC history"
        );

        let value: serde_json::Value = self.get(&url).await?;
        if let Some(message) = Self::body_error(&value) {
            return Err(ApiError::Api(message));
        }
        serde_json::from_value(value)
            .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize OHLC response: {}", e)))
    }

    /// Fetch candles and reshape them into display rows.
    ///
    /// The pipeline re-aligns the until-timestamp against the interval,
    /// lowercases the pool address, issues exactly one endpoint call, rounds
    /// the four price fields to `precision` and passes volume through. An
    /// empty result set becomes exactly one [`OhlcRow::sentinel`] row.
    ///
    /// # Errors
    ///
    /// Any failure in the pipeline collapses into [`FetchFailure`]; the
    /// cause is logged, not carried. No retry is attempted and no caller
    /// state is touched.
    pub async fn fetch_ohlc(
        &self,
        params: &OhlcParams,
        precision: Precision,
    ) -> Result<Vec<OhlcRow>, FetchFailure> {
        self.fetch_ohlc_inner(params, precision).await.map_err(|e| {
            tracing::warn!(
                token_address = %params.token_address,
                error = %e,
                "OHLC fetch failed"
            );
            FetchFailure
        })
    }

    async fn fetch_ohlc_inner(
        &self,
        params: &OhlcParams,
        precision: Precision,
    ) -> ApiResult<Vec<OhlcRow>> {
        let mut params = params.clone();
        params.pool_address = params.pool_address.to_lowercase();
        params.until_timestamp =
            align_until_to_interval(params.until_timestamp, params.interval);

        let response = self.get_ohlc(&params).await?;
        if response.data.is_empty() {
            return Ok(vec![OhlcRow::sentinel()]);
        }
        Ok(response
            .data
            .iter()
            .map(|record| OhlcRow::from_record(record, precision))
            .collect())
    }
}
