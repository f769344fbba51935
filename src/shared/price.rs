//! Price formatting utilities.
//!
//! Candle prices are displayed and exported at a fixed number of significant
//! digits. [`round_to_precision`] follows `%.<N>g` semantics: fixed notation
//! while the decimal exponent stays within `[-4, N)`, exponential notation
//! outside that range, insignificant trailing zeros removed.

use crate::shared::types::Precision;

/// Format a price at the given significant-digit precision.
///
/// Volume and other non-price fields are never routed through this; only the
/// four OHLC price fields are displayed rounded.
pub fn round_to_precision(value: f64, precision: Precision) -> String {
    format_significant(value, precision.significant_digits())
}

fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to `digits` significant digits first; the rounded exponent decides
    // between fixed and exponential notation.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_zeros(&fixed).to_string()
    }
}

/// Strip insignificant trailing zeros (and a dangling decimal point).
fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_notation() {
        assert_eq!(format_significant(1234.5678, 3), "1.23e+03");
        assert_eq!(format_significant(99999.9, 4), "1e+05");
        assert_eq!(format_significant(0.000001234, 3), "1.23e-06");
        assert_eq!(format_significant(-1234.5678, 3), "-1.23e+03");
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_significant(0.0001234, 2), "0.00012");
        assert_eq!(format_significant(1234.5678, 5), "1234.6");
        assert_eq!(format_significant(1.5, 3), "1.5");
        assert_eq!(format_significant(12.0, 4), "12");
        assert_eq!(format_significant(-0.0045, 2), "-0.0045");
    }

    #[test]
    fn test_rounding_carries_into_next_magnitude() {
        // 999.96 rounds up to 1000 at four significant digits, which still
        // fits fixed notation; one more push crosses into exponential.
        assert_eq!(format_significant(999.96, 4), "1000");
        assert_eq!(format_significant(999.96, 3), "1e+03");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(format_significant(0.0, 4), "0");
        assert_eq!(format_significant(f64::NAN, 4), "NaN");
        assert_eq!(format_significant(f64::INFINITY, 4), "inf");
    }

    #[test]
    fn test_precision_enum_entry_point() {
        assert_eq!(round_to_precision(1234.5678, Precision::ThreeSig), "1.23e+03");
        assert_eq!(round_to_precision(0.0001234, Precision::TwoSig), "0.00012");
        assert_eq!(round_to_precision(2.34567e-2, Precision::FiveSig), "0.023457");
    }
}
