//! Time-window normalization.
//!
//! User input arrives as calendar dates; the API wants UNIX-second
//! boundaries. The until side of the window is expanded to the end of its
//! calendar day and then snapped against "now": the remote service has no
//! data past the current wall clock, so a future-dated until collapses to
//! the next interval boundary instead of an arbitrary future instant.

use chrono::{NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use crate::shared::interval::Interval;

const DAY_SECONDS: i64 = 86400;

/// Error returned when a calendar date is not `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{value}': {source}")]
pub struct InvalidDate {
    /// The rejected input.
    pub value: String,
    source: chrono::ParseError,
}

/// Canonical fetch window derived from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWindow {
    /// Token address, lowercased (EVM addressing is case-insensitive).
    pub token_address: String,
    /// Window start, UNIX seconds UTC (midnight of the from-date).
    pub from_timestamp: i64,
    /// Window end, UNIX seconds UTC, interval-aligned per
    /// [`align_until_to_interval`].
    pub until_timestamp: i64,
}

/// Clamp an until-timestamp against the current wall clock.
///
/// A timestamp in the past is returned unchanged. A timestamp in the future
/// is replaced by the next interval boundary strictly after now, i.e. the
/// start of the current bucket plus one full interval.
pub fn align_until_to_interval(until_timestamp: i64, interval: Interval) -> i64 {
    align_until_at(until_timestamp, interval.seconds(), Utc::now().timestamp())
}

fn align_until_at(until_timestamp: i64, interval_secs: i64, now: i64) -> i64 {
    if until_timestamp > now {
        (now / interval_secs) * interval_secs + interval_secs
    } else {
        until_timestamp
    }
}

/// Turn user-entered dates into a canonical [`UserWindow`].
///
/// `from_date` maps to midnight UTC of that day; `until_date` maps to
/// 23:59:59 UTC of that day and is then clamped by
/// [`align_until_to_interval`]. The window is NOT checked for
/// `from <= until`; an inverted range is passed to the API as-is and yields
/// whatever (usually empty) result the service produces.
///
/// # Errors
///
/// Returns [`InvalidDate`] when either date is not a valid `YYYY-MM-DD`.
pub fn parse_user_window(
    token_address: &str,
    from_date: &str,
    until_date: &str,
    interval: Interval,
) -> Result<UserWindow, InvalidDate> {
    let from_timestamp = date_to_utc_midnight(from_date)?;
    let until_midnight = date_to_utc_midnight(until_date)?;
    let end_of_day = (until_midnight / DAY_SECONDS) * DAY_SECONDS + DAY_SECONDS - 1;
    Ok(UserWindow {
        token_address: token_address.to_lowercase(),
        from_timestamp,
        until_timestamp: align_until_to_interval(end_of_day, interval),
    })
}

fn date_to_utc_midnight(date: &str) -> Result<i64, InvalidDate> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| InvalidDate {
        value: date.to_string(),
        source,
    })?;
    Ok(parsed.and_time(NaiveTime::MIN).and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000; // 2023-11-14T22:13:20Z

    #[test]
    fn test_past_until_unchanged() {
        for until in [0, NOW - 86400, NOW - 1, NOW] {
            assert_eq!(align_until_at(until, 3600, NOW), until);
        }
    }

    #[test]
    fn test_future_until_snaps_to_next_boundary() {
        let hour = 3600;
        let aligned = align_until_at(NOW + 123_456, hour, NOW);
        assert_eq!(aligned % hour, 0);
        assert!(aligned > (NOW / hour) * hour);
        assert_eq!(aligned, (NOW / hour) * hour + hour);
    }

    #[test]
    fn test_future_until_day_interval() {
        let day = 86400;
        let aligned = align_until_at(NOW + 1, day, NOW);
        assert_eq!(aligned, (NOW / day) * day + day);
    }

    #[test]
    fn test_parse_user_window_golden() {
        let window = parse_user_window(
            "0x6982508145454Ce325dDbE47a25d4ec3d2311933",
            "2024-01-01",
            "2024-01-07",
            Interval::OneHour,
        )
        .unwrap();
        assert_eq!(
            window.token_address,
            "0x6982508145454ce325ddbe47a25d4ec3d2311933"
        );
        // 2024-01-01T00:00:00Z
        assert_eq!(window.from_timestamp, 1_704_067_200);
        // 2024-01-07T23:59:59Z, already in the past so the clamp is a no-op
        assert_eq!(window.until_timestamp, 1_704_671_999);
    }

    #[test]
    fn test_inverted_range_is_not_rejected() {
        let window =
            parse_user_window("0xABC", "2024-02-01", "2024-01-01", Interval::OneDay).unwrap();
        assert!(window.from_timestamp > window.until_timestamp);
    }

    #[test]
    fn test_invalid_date() {
        let err = parse_user_window("0xabc", "01/02/2024", "2024-01-07", Interval::OneHour)
            .unwrap_err();
        assert_eq!(err.value, "01/02/2024");
        assert!(parse_user_window("0xabc", "2024-01-01", "2024-13-40", Interval::OneHour).is_err());
    }
}
