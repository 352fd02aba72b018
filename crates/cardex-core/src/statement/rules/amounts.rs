//! Amount normalization for statement fields.
//!
//! Matched amounts keep their printed grouping ("1,258.56" stays
//! "1,258.56", lakh-grouped "1,23,456.78" stays as printed); currency
//! symbols are stripped and `rust_decimal` gates out captures that are not
//! actually numbers.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a statement amount into a decimal value, ignoring currency symbols
/// and digit grouping.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Normalize a matched amount: strip currency symbols and surrounding
/// whitespace, keep the printed digit grouping. With `validate` set, captures
/// that do not parse as a decimal are rejected so the pattern chain can fall
/// through.
pub fn normalize_amount(raw: &str, validate: bool) -> Option<String> {
    let stripped = raw
        .trim()
        .trim_start_matches(['$', '₹'])
        .trim_start_matches("Rs.")
        .trim_start_matches("Rs")
        .trim()
        .to_string();

    if stripped.is_empty() {
        return None;
    }

    if validate && parse_amount(&stripped).is_none() {
        return None;
    }

    Some(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse_amount("1,258.56"),
            Some(Decimal::from_str("1258.56").unwrap())
        );
        assert_eq!(
            parse_amount("$45,320.15"),
            Some(Decimal::from_str("45320.15").unwrap())
        );
        // Indian lakh grouping
        assert_eq!(
            parse_amount("1,23,456.78"),
            Some(Decimal::from_str("123456.78").unwrap())
        );
        assert_eq!(parse_amount("no digits"), None);
    }

    #[test]
    fn test_normalize_preserves_grouping() {
        assert_eq!(
            normalize_amount("1,258.56", true),
            Some("1,258.56".to_string())
        );
        assert_eq!(
            normalize_amount("1,23,456.78", true),
            Some("1,23,456.78".to_string())
        );
    }

    #[test]
    fn test_normalize_strips_currency_symbols() {
        assert_eq!(
            normalize_amount("$1,258.56", true),
            Some("1,258.56".to_string())
        );
        assert_eq!(
            normalize_amount("₹ 45,320.15", true),
            Some("45,320.15".to_string())
        );
        assert_eq!(
            normalize_amount("Rs. 45,320.15", true),
            Some("45,320.15".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_junk_when_validating() {
        assert_eq!(normalize_amount("..", true), None);
        assert_eq!(normalize_amount("  ", true), None);
    }
}
