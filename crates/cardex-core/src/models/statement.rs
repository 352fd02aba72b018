//! Statement data models shared across detection and extraction.

use serde::{Deserialize, Serialize};

/// Placeholder stored when a field's pattern chain produced no match.
pub const NOT_FOUND: &str = "Not Found";

/// Placeholder stored when no transaction summary line was located.
pub const NO_SUMMARY: &str = "Summary not detected";

/// Card variant label used when the issuer is unrecognized.
pub const STANDARD_VARIANT: &str = "Standard Credit Card";

/// A card issuer recognized by the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bank {
    Hdfc,
    Chase,
    Sbi,
    Amex,
    Citi,
    /// No issuer marker was found in the document text.
    Unknown,
}

impl Bank {
    /// Human-readable issuer name as printed on result records.
    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Hdfc => "HDFC Bank",
            Bank::Chase => "Chase Bank",
            Bank::Sbi => "SBI Card",
            Bank::Amex => "American Express",
            Bank::Citi => "Citibank",
            Bank::Unknown => "Unknown Bank",
        }
    }

    /// Product label for the issuer. Statements rarely carry a clean
    /// machine-parseable product name, so this is a fixed label per issuer.
    pub fn card_variant(&self) -> &'static str {
        match self {
            Bank::Hdfc => "HDFC Credit Card",
            Bank::Chase => "Chase Credit Card",
            Bank::Sbi => "SBI Credit Card",
            Bank::Amex => "Amex Card",
            Bank::Citi => "Citi Card",
            Bank::Unknown => STANDARD_VARIANT,
        }
    }
}

/// The record produced for every processed statement.
///
/// All seven fields are always present; a field whose pattern chain found
/// nothing holds its placeholder string instead of being omitted, so the
/// serialized shape is identical whether or not extraction succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub bank_name: String,
    pub card_variant: String,
    pub card_last_4: String,
    pub billing_cycle: String,
    pub payment_due_date: String,
    pub total_balance: String,
    pub transaction_info: String,
}

impl StatementRecord {
    /// Record returned when no issuer could be detected: every field holds
    /// its placeholder and no issuer-specific patterns are consulted.
    pub fn unknown() -> Self {
        Self {
            bank_name: Bank::Unknown.display_name().to_string(),
            card_variant: STANDARD_VARIANT.to_string(),
            card_last_4: NOT_FOUND.to_string(),
            billing_cycle: NOT_FOUND.to_string(),
            payment_due_date: NOT_FOUND.to_string(),
            total_balance: NOT_FOUND.to_string(),
            transaction_info: NO_SUMMARY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_record_is_all_placeholders() {
        let record = StatementRecord::unknown();
        assert_eq!(record.bank_name, "Unknown Bank");
        assert_eq!(record.card_variant, "Standard Credit Card");
        assert_eq!(record.card_last_4, NOT_FOUND);
        assert_eq!(record.billing_cycle, NOT_FOUND);
        assert_eq!(record.payment_due_date, NOT_FOUND);
        assert_eq!(record.total_balance, NOT_FOUND);
        assert_eq!(record.transaction_info, NO_SUMMARY);
    }

    #[test]
    fn test_record_serializes_to_seven_keys() {
        let value = serde_json::to_value(StatementRecord::unknown()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        for key in [
            "bank_name",
            "card_variant",
            "card_last_4",
            "billing_cycle",
            "payment_due_date",
            "total_balance",
            "transaction_info",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_issuer_labels() {
        assert_eq!(Bank::Chase.display_name(), "Chase Bank");
        assert_eq!(Bank::Amex.display_name(), "American Express");
        assert_eq!(Bank::Hdfc.card_variant(), "HDFC Credit Card");
        assert_eq!(Bank::Citi.card_variant(), "Citi Card");
    }
}
