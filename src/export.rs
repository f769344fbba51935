//! CSV export of fetched candles.
//!
//! The artifact mirrors the row layout exactly: one header line, one line
//! per row, prices already rounded to display strings upstream.

use crate::api::types::OhlcRow;

/// CSV header line.
pub const CSV_HEADER: &str = "date_open,price_open,price_high,price_low,price_close,volume";

/// Render rows as a UTF-8 CSV document.
pub fn to_csv(rows: &[OhlcRow]) -> String {
    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            row.date_open,
            row.price_open,
            row.price_high,
            row.price_low,
            row.price_close,
            row.volume
        ));
    }
    out
}

/// File name for an exported window:
/// `price_ohlc_<token_address>_<from_date>_<until_date>.csv`.
pub fn file_name(token_address: &str, from_date: &str, until_date: &str) -> String {
    format!("price_ohlc_{}_{}_{}.csv", token_address, from_date, until_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{OhlcRecord, OhlcRow};
    use crate::shared::types::Precision;

    #[test]
    fn test_csv_golden() {
        let record = OhlcRecord {
            date_open: "2024-01-01T00:00:00Z".to_string(),
            price_open: 1234.5678,
            price_high: 1300.0,
            price_low: 0.0001234,
            price_close: 1280.5,
            volume: 42.5,
        };
        let rows = vec![OhlcRow::from_record(&record, Precision::TwoSig)];
        let csv = to_csv(&rows);
        assert_eq!(
            csv,
            "date_open,price_open,price_high,price_low,price_close,volume\n\
             2024-01-01T00:00:00Z,1.2e+03,1.3e+03,0.00012,1.3e+03,42.5\n"
        );
    }

    #[test]
    fn test_csv_sentinel() {
        let csv = to_csv(&[OhlcRow::sentinel()]);
        assert_eq!(
            csv,
            "date_open,price_open,price_high,price_low,price_close,volume\n-1,-1,-1,-1,-1,-1\n"
        );
    }

    #[test]
    fn test_file_name_pattern() {
        assert_eq!(
            file_name(
                "0x6982508145454ce325ddbe47a25d4ec3d2311933",
                "2024-01-01",
                "2024-01-07"
            ),
            "price_ohlc_0x6982508145454ce325ddbe47a25d4ec3d2311933_2024-01-01_2024-01-07.csv"
        );
    }
}
