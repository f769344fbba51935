//! OHLC price-history types for the Syve REST API.

use serde::{Deserialize, Serialize};

use crate::shared::price::round_to_precision;
use crate::shared::types::{Chain, OpenMethod, Precision, PriceType, SortOrder};
use crate::shared::window::UserWindow;
use crate::shared::Interval;

/// Query parameters for `GET /v1/price/historical/ohlc`.
///
/// One immutable bundle per fetch. The API key is deliberately not a field
/// here; it is client configuration and gets appended by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcParams {
    /// Token contract address (required)
    pub token_address: String,
    /// Pool address, or `"all"` to aggregate across pools
    pub pool_address: String,
    /// Chain the token trades on
    pub chain: Chain,
    /// Candle interval
    pub interval: Interval,
    /// Window start, UNIX seconds UTC
    pub from_timestamp: i64,
    /// Window end, UNIX seconds UTC
    pub until_timestamp: i64,
    /// Price series the candles are built from
    pub price_type: PriceType,
    /// Drop candles with no trades instead of returning nulls
    pub skip_null: bool,
    /// Forward-fill gaps between candles
    pub fill: bool,
    /// Maximum number of candles returned
    pub max_size: u32,
    /// Ordering by open time
    pub order: SortOrder,
    /// Open-price derivation method
    pub open_method: OpenMethod,
}

impl OhlcParams {
    /// Create params for a token with the service defaults for everything
    /// else.
    pub fn new(token_address: impl Into<String>) -> Self {
        Self {
            token_address: token_address.into(),
            pool_address: "all".to_string(),
            chain: Chain::default(),
            interval: Interval::default(),
            from_timestamp: 0,
            until_timestamp: 0,
            price_type: PriceType::default(),
            skip_null: true,
            fill: true,
            max_size: 100,
            order: SortOrder::default(),
            open_method: OpenMethod::default(),
        }
    }

    /// Create params from a normalized [`UserWindow`].
    pub fn from_window(window: &UserWindow) -> Self {
        Self::new(window.token_address.clone())
            .with_time_range(window.from_timestamp, window.until_timestamp)
    }

    /// Set the pool address.
    pub fn with_pool_address(mut self, pool_address: impl Into<String>) -> Self {
        self.pool_address = pool_address.into();
        self
    }

    /// Set the chain.
    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chain = chain;
        self
    }

    /// Set the candle interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Set the fetch window.
    pub fn with_time_range(mut self, from: i64, until: i64) -> Self {
        self.from_timestamp = from;
        self.until_timestamp = until;
        self
    }

    /// Set the price series.
    pub fn with_price_type(mut self, price_type: PriceType) -> Self {
        self.price_type = price_type;
        self
    }

    /// Set whether empty candles are skipped.
    pub fn with_skip_null(mut self, skip_null: bool) -> Self {
        self.skip_null = skip_null;
        self
    }

    /// Set whether gaps are forward-filled.
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Set the result limit.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the result ordering.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the open-price method.
    pub fn with_open_method(mut self, open_method: OpenMethod) -> Self {
        self.open_method = open_method;
        self
    }
}

/// One raw candle as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    /// Candle open time, ISO-8601 UTC
    pub date_open: String,
    /// Open price
    pub price_open: f64,
    /// High price
    pub price_high: f64,
    /// Low price
    pub price_low: f64,
    /// Close price
    pub price_close: f64,
    /// Traded volume over the candle
    pub volume: f64,
}

/// Response for `GET /v1/price/historical/ohlc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OhlcResponse {
    /// Candles, ordered per the request's `order` parameter
    #[serde(default)]
    pub data: Vec<OhlcRecord>,
}

/// One display/export row: prices rounded to the requested precision and
/// rendered as strings, volume passed through unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OhlcRow {
    /// Candle open time
    pub date_open: String,
    /// Open price, rounded
    pub price_open: String,
    /// High price, rounded
    pub price_high: String,
    /// Low price, rounded
    pub price_low: String,
    /// Close price, rounded
    pub price_close: String,
    /// Traded volume over the candle
    pub volume: f64,
}

impl OhlcRow {
    /// Build a display row from a raw candle.
    pub fn from_record(record: &OhlcRecord, precision: Precision) -> Self {
        Self {
            date_open: record.date_open.clone(),
            price_open: round_to_precision(record.price_open, precision),
            price_high: round_to_precision(record.price_high, precision),
            price_low: round_to_precision(record.price_low, precision),
            price_close: round_to_precision(record.price_close, precision),
            volume: record.volume,
        }
    }

    /// The "no data" placeholder row: every field `-1`.
    ///
    /// Downstream renderers and the CSV artifact treat a single all`-1` row
    /// as an empty result set.
    pub fn sentinel() -> Self {
        Self {
            date_open: "-1".to_string(),
            price_open: "-1".to_string(),
            price_high: "-1".to_string(),
            price_low: "-1".to_string(),
            price_close: "-1".to_string(),
            volume: -1.0,
        }
    }
}
