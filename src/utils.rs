/// Token amount conversion helpers
///
/// Raw amounts are integers in the token's smallest unit, carried as strings
/// because they routinely exceed u64/f64 range (24-decimal tokens). The
/// display formatting tiers are a contract, not a convenience: tests rely on
/// amounts round-tripping predictably through them.
use crate::logger::{self, LogTag};

/// Converts a display amount to its raw representation
///
/// Truncates (never rounds) the fractional part at `decimals` digits.
/// Non-numeric or non-positive input converts to "0". The output contains
/// only digits - no separators, no decimal point, no exponent.
pub fn to_raw_amount(amount: &str, decimals: u32) -> String {
    let clean = amount.replace(',', "");

    // Anything outside digits and a decimal point (signs, exponents,
    // whitespace) is rejected outright rather than interpreted
    if clean.is_empty() || !clean.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return "0".to_string();
    }

    let value: f64 = match clean.parse() {
        Ok(value) => value,
        Err(_) => return "0".to_string(),
    };
    if value <= 0.0 {
        return "0".to_string();
    }

    let (integer_part, decimal_part) = match clean.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (clean.as_str(), ""),
    };

    let wanted = decimals as usize;
    let mut fraction = decimal_part.to_string();
    if fraction.len() < wanted {
        fraction.push_str(&"0".repeat(wanted - fraction.len()));
    } else {
        fraction.truncate(wanted);
    }

    let raw = format!("{}{}", integer_part, fraction);
    let trimmed = raw.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats a raw token amount for display
///
/// Tiered policy by magnitude:
/// - zero        -> "0"
/// - < 1e-6      -> exponential with 2 fraction digits
/// - < 1         -> fixed 6 fraction digits
/// - < 1000      -> fixed 4 fraction digits
/// - otherwise   -> comma-grouped with at most 2 fraction digits
pub fn format_token_amount(amount: &str, decimals: u32) -> String {
    let raw: f64 = match amount.replace(',', "").parse() {
        Ok(value) => value,
        Err(_) => {
            logger::debug(
                LogTag::Tokens,
                "FORMAT_FALLBACK",
                &format!("unparsable raw amount {:?}", amount),
            );
            return "0".to_string();
        }
    };

    let value = raw / 10f64.powi(decimals as i32);

    if value == 0.0 {
        return "0".to_string();
    }
    if value < 1e-6 {
        return format!("{:.2e}", value);
    }
    if value < 1.0 {
        return format!("{:.6}", value);
    }
    if value < 1000.0 {
        return format!("{:.4}", value);
    }

    format_grouped(value)
}

/// Raw amount as an f64 value, for USD math only
///
/// Loses precision beyond 2^53 - fine for display values, never used to
/// build transaction amounts.
pub fn raw_amount_to_f64(amount: &str, decimals: u32) -> f64 {
    let raw: f64 = amount.parse().unwrap_or(0.0);
    raw / 10f64.powi(decimals as i32)
}

/// Comma-grouped rendering with up to 2 fraction digits, trailing zeros trimmed
fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (integer_part, fraction_part) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (fixed.as_str(), ""),
    };

    let fraction = fraction_part.trim_end_matches('0');
    let grouped = group_thousands(integer_part);

    if fraction.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_conversion_pads_to_decimals() {
        assert_eq!(to_raw_amount("1", 6), "1000000");
        assert_eq!(to_raw_amount("1.5", 6), "1500000");
        assert_eq!(to_raw_amount("0.000001", 6), "1");
    }

    #[test]
    fn raw_conversion_truncates_not_rounds() {
        assert_eq!(to_raw_amount("1.23456789", 6), "1234567");
        assert_eq!(to_raw_amount("0.9999999", 6), "999999");
    }

    #[test]
    fn raw_conversion_rejects_invalid_input() {
        assert_eq!(to_raw_amount("", 6), "0");
        assert_eq!(to_raw_amount("0", 6), "0");
        assert_eq!(to_raw_amount("abc", 6), "0");
        assert_eq!(to_raw_amount("-5", 6), "0");
        assert_eq!(to_raw_amount("1e3", 6), "0");
        assert_eq!(to_raw_amount("1.2.3", 6), "0");
    }

    #[test]
    fn raw_conversion_strips_separators_and_leading_zeros() {
        assert_eq!(to_raw_amount("1,234.5", 2), "123450");
        assert_eq!(to_raw_amount("0007", 0), "7");
        // Sub-precision dust truncates to zero
        assert_eq!(to_raw_amount("0.0000001", 6), "0");
    }

    #[test]
    fn raw_conversion_never_emits_exponent() {
        let raw = to_raw_amount("123456789123456789", 24);
        assert!(raw.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(raw.len(), 18 + 24);
    }

    #[test]
    fn display_formatting_tiers() {
        assert_eq!(format_token_amount("0", 6), "0");
        // < 1e-6: exponential with 2 fraction digits
        assert_eq!(format_token_amount("25", 24), "2.50e-23");
        // < 1: fixed 6
        assert_eq!(format_token_amount("500000", 6), "0.500000");
        // < 1000: fixed 4
        assert_eq!(format_token_amount("1500000", 6), "1.5000");
        // >= 1000: grouped, <= 2 fraction digits
        assert_eq!(format_token_amount("1234567890000", 6), "1,234,567.89");
        assert_eq!(format_token_amount("5000000000", 6), "5,000");
    }

    #[test]
    fn display_round_trips_below_rounding_thresholds() {
        let raw = to_raw_amount("0.250000", 6);
        assert_eq!(format_token_amount(&raw, 6), "0.250000");
    }
}
