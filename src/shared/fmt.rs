//! Amount formatting for exchange request parameters.
//!
//! The exchange rejects amounts with more decimal places than the currency
//! supports, so every amount that leaves the SDK goes through
//! [`format_amount`] first.

use rust_decimal::Decimal;

/// Format an amount for submission to the exchange.
///
/// `dp` is the number of decimal places the currency requires, or `None` for
/// currencies without a known precision profile, which are sent in their
/// normalized natural representation (no trailing zeros).
pub fn format_amount(amount: Decimal, dp: Option<u32>) -> String {
    match dp {
        Some(dp) => format!("{:.prec$}", amount.round_dp(dp), prec = dp as usize),
        None => amount.normalize().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn quote_precision_pads_to_two_places() {
        assert_eq!(format_amount(dec("7.5"), Some(2)), "7.50");
        assert_eq!(format_amount(dec("10"), Some(2)), "10.00");
    }

    #[test]
    fn quote_precision_rounds_excess_places() {
        assert_eq!(format_amount(dec("1.005"), Some(2)), "1.00");
        assert_eq!(format_amount(dec("1.019"), Some(2)), "1.02");
    }

    #[test]
    fn base_precision_uses_eight_places() {
        assert_eq!(format_amount(dec("0.1"), Some(8)), "0.10000000");
        assert_eq!(format_amount(dec("0.123456789"), Some(8)), "0.12345679");
    }

    #[test]
    fn unknown_precision_keeps_natural_representation() {
        assert_eq!(format_amount(dec("3.1400"), None), "3.14");
        assert_eq!(format_amount(dec("42"), None), "42");
    }
}
