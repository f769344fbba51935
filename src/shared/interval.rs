//! Candle interval handling.
//!
//! The API accepts intervals as `"<amount><unit>"` strings where the unit is
//! one of `s`, `m`, `h`, `d`. The dashboard surface only ever sends the seven
//! canonical [`Interval`] values; [`interval_to_seconds`] additionally accepts
//! the free-form string so callers working with raw interval strings get the
//! same unit table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned for an interval string that is not `"<amount><unit>"` with
/// a positive integer amount and a unit in `{s, m, h, d}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid interval: '{0}'")]
pub struct InvalidInterval(pub String);

/// OHLC candle interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// 1 minute candles
    #[serde(rename = "1m")]
    OneMinute,
    /// 5 minute candles
    #[serde(rename = "5m")]
    FiveMinutes,
    /// 15 minute candles
    #[serde(rename = "15m")]
    FifteenMinutes,
    /// 30 minute candles
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// 1 hour candles
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    /// 4 hour candles
    #[serde(rename = "4h")]
    FourHours,
    /// 1 day candles
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    /// Get the string representation sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::FourHours => "4h",
            Self::OneDay => "1d",
        }
    }

    /// Length of one candle bucket in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Self::OneMinute => 60,
            Self::FiveMinutes => 300,
            Self::FifteenMinutes => 900,
            Self::ThirtyMinutes => 1800,
            Self::OneHour => 3600,
            Self::FourHours => 14400,
            Self::OneDay => 86400,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = InvalidInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::OneMinute),
            "5m" => Ok(Self::FiveMinutes),
            "15m" => Ok(Self::FifteenMinutes),
            "30m" => Ok(Self::ThirtyMinutes),
            "1h" => Ok(Self::OneHour),
            "4h" => Ok(Self::FourHours),
            "1d" => Ok(Self::OneDay),
            other => Err(InvalidInterval(other.to_string())),
        }
    }
}

/// Parse a free-form interval string into a duration in seconds.
///
/// The string is a positive base-10 integer immediately followed by a single
/// unit letter: `s` (×1), `m` (×60), `h` (×3600) or `d` (×86400).
///
/// # Errors
///
/// Returns [`InvalidInterval`] when the unit letter is unrecognized or the
/// amount prefix is not a positive integer.
pub fn interval_to_seconds(interval: &str) -> Result<i64, InvalidInterval> {
    let mut chars = interval.chars();
    let unit = chars
        .next_back()
        .ok_or_else(|| InvalidInterval(interval.to_string()))?;
    let amount: i64 = chars
        .as_str()
        .parse()
        .map_err(|_| InvalidInterval(interval.to_string()))?;
    if amount <= 0 {
        return Err(InvalidInterval(interval.to_string()));
    }
    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return Err(InvalidInterval(interval.to_string())),
    };
    Ok(amount * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_multipliers() {
        assert_eq!(interval_to_seconds("1s").unwrap(), 1);
        assert_eq!(interval_to_seconds("30s").unwrap(), 30);
        assert_eq!(interval_to_seconds("1m").unwrap(), 60);
        assert_eq!(interval_to_seconds("15m").unwrap(), 900);
        assert_eq!(interval_to_seconds("1h").unwrap(), 3600);
        assert_eq!(interval_to_seconds("4h").unwrap(), 14400);
        assert_eq!(interval_to_seconds("1d").unwrap(), 86400);
        assert_eq!(interval_to_seconds("7d").unwrap(), 604800);
    }

    #[test]
    fn test_invalid_unit() {
        assert!(interval_to_seconds("1w").is_err());
        assert!(interval_to_seconds("5y").is_err());
        assert!(interval_to_seconds("10").is_err());
    }

    #[test]
    fn test_invalid_amount() {
        assert!(interval_to_seconds("").is_err());
        assert!(interval_to_seconds("h").is_err());
        assert!(interval_to_seconds("0h").is_err());
        assert!(interval_to_seconds("-5m").is_err());
        assert!(interval_to_seconds("1.5h").is_err());
    }

    #[test]
    fn test_enum_matches_parser() {
        for interval in [
            Interval::OneMinute,
            Interval::FiveMinutes,
            Interval::FifteenMinutes,
            Interval::ThirtyMinutes,
            Interval::OneHour,
            Interval::FourHours,
            Interval::OneDay,
        ] {
            assert_eq!(interval_to_seconds(interval.as_str()).unwrap(), interval.seconds());
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        let interval: Interval = "4h".parse().unwrap();
        assert_eq!(interval, Interval::FourHours);
        assert!("2h".parse::<Interval>().is_err());
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&Interval::FifteenMinutes).unwrap();
        assert_eq!(json, r#""15m""#);
        let back: Interval = serde_json::from_str(r#""1d""#).unwrap();
        assert_eq!(back, Interval::OneDay);
    }
}
