//! Shared type definitions for the Syve OHLC client.
//!
//! These enums mirror the request parameters accepted by the historical
//! OHLC endpoint. Each carries its exact wire string via serde renames and
//! `as_str`.

use serde::{Deserialize, Serialize};

/// Error returned when a wire string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    /// Parameter name the value was offered for.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Chain
// ============================================================================

/// Chain the token is priced on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    /// Ethereum mainnet
    #[default]
    #[serde(rename = "eth")]
    Eth,
    /// Polygon PoS
    #[serde(rename = "matic")]
    Matic,
    /// Base
    #[serde(rename = "base")]
    Base,
}

impl Chain {
    /// Get the string representation sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eth => "eth",
            Self::Matic => "matic",
            Self::Base => "base",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Chain {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eth" => Ok(Self::Eth),
            "matic" => Ok(Self::Matic),
            "base" => Ok(Self::Base),
            other => Err(UnknownVariant::new("chain", other)),
        }
    }
}

// ============================================================================
// PriceType
// ============================================================================

/// Price series used to build the candles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceType {
    /// Outlier-filtered per-trade USD price.
    #[default]
    #[serde(rename = "price_token_usd_robust_tick_1")]
    RobustTick,
    /// Raw per-trade USD price.
    #[serde(rename = "price_token_usd_tick_1")]
    Tick,
}

impl PriceType {
    /// Get the string representation sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RobustTick => "price_token_usd_robust_tick_1",
            Self::Tick => "price_token_usd_tick_1",
        }
    }
}

impl std::fmt::Display for PriceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PriceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_token_usd_robust_tick_1" | "robust" => Ok(Self::RobustTick),
            "price_token_usd_tick_1" | "tick" => Ok(Self::Tick),
            other => Err(UnknownVariant::new("price type", other)),
        }
    }
}

// ============================================================================
// SortOrder
// ============================================================================

/// Ordering of the returned candles by open time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest first
    #[default]
    #[serde(rename = "asc")]
    Asc,
    /// Newest first
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    /// Get the string representation sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(UnknownVariant::new("order", other)),
        }
    }
}

// ============================================================================
// OpenMethod
// ============================================================================

/// How the open price of each candle is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenMethod {
    /// Close of the previous candle.
    #[default]
    #[serde(rename = "prev_close")]
    PrevClose,
    /// First trade inside the candle.
    #[serde(rename = "first_trade")]
    FirstTrade,
}

impl OpenMethod {
    /// Get the string representation sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrevClose => "prev_close",
            Self::FirstTrade => "first_trade",
        }
    }
}

impl std::fmt::Display for OpenMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OpenMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev_close" => Ok(Self::PrevClose),
            "first_trade" => Ok(Self::FirstTrade),
            other => Err(UnknownVariant::new("open method", other)),
        }
    }
}

// ============================================================================
// Precision
// ============================================================================

/// Display precision for price fields, in significant digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precision {
    /// 2 significant digits
    #[serde(rename = "2g")]
    TwoSig,
    /// 3 significant digits
    #[serde(rename = "3g")]
    ThreeSig,
    /// 4 significant digits
    #[default]
    #[serde(rename = "4g")]
    FourSig,
    /// 5 significant digits
    #[serde(rename = "5g")]
    FiveSig,
    /// 6 significant digits
    #[serde(rename = "6g")]
    SixSig,
}

impl Precision {
    /// Get the string representation (`"<N>g"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoSig => "2g",
            Self::ThreeSig => "3g",
            Self::FourSig => "4g",
            Self::FiveSig => "5g",
            Self::SixSig => "6g",
        }
    }

    /// Number of significant digits.
    pub fn significant_digits(&self) -> usize {
        match self {
            Self::TwoSig => 2,
            Self::ThreeSig => 3,
            Self::FourSig => 4,
            Self::FiveSig => 5,
            Self::SixSig => 6,
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Precision {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2g" => Ok(Self::TwoSig),
            "3g" => Ok(Self::ThreeSig),
            "4g" => Ok(Self::FourSig),
            "5g" => Ok(Self::FiveSig),
            "6g" => Ok(Self::SixSig),
            other => Err(UnknownVariant::new("precision", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(Chain::Matic.as_str(), "matic");
        assert_eq!(PriceType::RobustTick.as_str(), "price_token_usd_robust_tick_1");
        assert_eq!(SortOrder::Desc.as_str(), "desc");
        assert_eq!(OpenMethod::PrevClose.as_str(), "prev_close");
        assert_eq!(Precision::FiveSig.as_str(), "5g");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("base".parse::<Chain>().unwrap(), Chain::Base);
        assert_eq!("descending".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!("first_trade".parse::<OpenMethod>().unwrap(), OpenMethod::FirstTrade);
        assert_eq!("6g".parse::<Precision>().unwrap(), Precision::SixSig);
        assert!("sol".parse::<Chain>().is_err());
        assert!("7g".parse::<Precision>().is_err());
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&PriceType::Tick).unwrap();
        assert_eq!(json, r#""price_token_usd_tick_1""#);
        let chain: Chain = serde_json::from_str(r#""eth""#).unwrap();
        assert_eq!(chain, Chain::Eth);
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(Precision::TwoSig.significant_digits(), 2);
        assert_eq!(Precision::SixSig.significant_digits(), 6);
    }
}
