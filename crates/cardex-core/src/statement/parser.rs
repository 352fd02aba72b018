//! Rule-based statement parser and issuer dispatch.

use tracing::{debug, info};

use crate::models::statement::{Bank, StatementRecord, NOT_FOUND, NO_SUMMARY};
use crate::statement::detect::detect;

use super::rules::{amounts, dates, dates::DateOrder, patterns_for, Field, FIELD_ORDER};

/// Trait for statement parsing strategies.
pub trait StatementParser {
    /// Parse one statement's text into a fully-populated record.
    fn parse(&self, text: &str) -> StatementRecord;
}

/// Rule-based parser covering the supported issuer set.
///
/// Each call is independent: the parser holds no per-document state and a
/// single instance can serve concurrent extractions.
#[derive(Debug, Clone)]
pub struct RuleStatementParser {
    /// Whether to reject matched dates that are not valid calendar dates.
    validate_dates: bool,
    /// Whether to reject matched amounts that do not parse as decimals.
    validate_amounts: bool,
}

impl RuleStatementParser {
    /// Create a new parser with validation enabled.
    pub fn new() -> Self {
        Self {
            validate_dates: true,
            validate_amounts: true,
        }
    }

    /// Set date validation.
    pub fn with_date_validation(mut self, validate: bool) -> Self {
        self.validate_dates = validate;
        self
    }

    /// Set amount validation.
    pub fn with_amount_validation(mut self, validate: bool) -> Self {
        self.validate_amounts = validate;
        self
    }

    /// Detect the issuer and run its extraction strategy.
    ///
    /// Unrecognized or empty input yields the all-placeholder record without
    /// consulting any issuer's patterns: one issuer's field vocabulary can
    /// spuriously match another issuer's text, so there is no speculative
    /// strategy probing.
    pub fn process(&self, text: &str) -> StatementRecord {
        let bank = detect(text);
        if bank == Bank::Unknown {
            info!("No issuer marker found in {} characters of text", text.len());
            return StatementRecord::unknown();
        }

        info!("Parsing {:?} statement from {} characters of text", bank, text.len());
        self.extract(bank, text)
    }

    fn extract(&self, bank: Bank, text: &str) -> StatementRecord {
        let mut record = StatementRecord {
            bank_name: bank.display_name().to_string(),
            card_variant: bank.card_variant().to_string(),
            card_last_4: NOT_FOUND.to_string(),
            billing_cycle: NOT_FOUND.to_string(),
            payment_due_date: NOT_FOUND.to_string(),
            total_balance: NOT_FOUND.to_string(),
            transaction_info: NO_SUMMARY.to_string(),
        };

        for field in FIELD_ORDER {
            let Some(value) = self.match_field(bank, field, text) else {
                debug!("No pattern matched for {:?}", field);
                continue;
            };
            match field {
                Field::CardLast4 => record.card_last_4 = value,
                Field::BillingCycle => record.billing_cycle = value,
                Field::DueDate => record.payment_due_date = value,
                Field::TotalBalance => record.total_balance = value,
                Field::TransactionSummary => record.transaction_info = value,
            }
        }

        record
    }

    /// Try the field's pattern chain in order; the first capture that
    /// survives normalization wins, so a near-miss rejected by validation
    /// falls through to the next pattern.
    fn match_field(&self, bank: Bank, field: Field, text: &str) -> Option<String> {
        for regex in patterns_for(bank, field) {
            let Some(caps) = regex.captures(text) else {
                continue;
            };
            if let Some(value) = self.normalize(bank, field, &caps[1]) {
                return Some(value);
            }
        }
        None
    }

    fn normalize(&self, bank: Bank, field: Field, raw: &str) -> Option<String> {
        match field {
            Field::CardLast4 => Some(raw.trim().to_string()),
            Field::BillingCycle => self
                .normalize_cycle(bank, raw)
                .map(|date| decorate_cycle(bank, &date)),
            Field::DueDate => match bank {
                Bank::Amex => dates::canonicalize_month_name(raw, self.validate_dates),
                _ => dates::canonicalize_date(raw, date_order(bank), self.validate_dates),
            },
            Field::TotalBalance => amounts::normalize_amount(raw, self.validate_amounts),
            Field::TransactionSummary => amounts::normalize_amount(raw, self.validate_amounts)
                .map(|amount| decorate_summary(bank, &amount)),
        }
    }

    fn normalize_cycle(&self, bank: Bank, raw: &str) -> Option<String> {
        match bank {
            Bank::Chase => dates::canonicalize_range(raw, DateOrder::MonthFirst, self.validate_dates),
            Bank::Amex => dates::canonicalize_month_name(raw, self.validate_dates),
            _ => dates::canonicalize_date(raw, date_order(bank), self.validate_dates),
        }
    }
}

impl Default for RuleStatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for RuleStatementParser {
    fn parse(&self, text: &str) -> StatementRecord {
        self.process(text)
    }
}

fn date_order(bank: Bank) -> DateOrder {
    match bank {
        Bank::Hdfc | Bank::Sbi => DateOrder::DayFirst,
        _ => DateOrder::MonthFirst,
    }
}

/// Billing-cycle phrasing per issuer: Chase statements carry an explicit
/// opening/closing range; the others expose a single statement or closing
/// date.
fn decorate_cycle(bank: Bank, value: &str) -> String {
    match bank {
        Bank::Hdfc => format!("Ends on {}", value),
        Bank::Sbi => format!("Statement generated on {}", value),
        Bank::Amex => format!("Closing Date: {}", value),
        Bank::Citi => format!("Statement Date: {}", value),
        Bank::Chase | Bank::Unknown => value.to_string(),
    }
}

fn decorate_summary(bank: Bank, amount: &str) -> String {
    match bank {
        Bank::Chase => format!("Total Purchases: ${}", amount),
        Bank::Hdfc | Bank::Sbi => format!("Total Debits: {}", amount),
        Bank::Amex => format!("New Charges: ${}", amount),
        Bank::Citi => format!("Purchases: ${}", amount),
        Bank::Unknown => amount.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHASE_TEXT: &str = "\
JPMorgan Chase Bank, N.A.
Account ending in 1415
Opening/Closing Date 11/27/21 - 12/26/21
Minimum Payment Due 01/23/22
New Balance $1,258.56
";

    #[test]
    fn test_chase_statement() {
        let record = RuleStatementParser::new().process(CHASE_TEXT);

        assert_eq!(record.bank_name, "Chase Bank");
        assert_eq!(record.card_variant, "Chase Credit Card");
        assert_eq!(record.card_last_4, "1415");
        assert_eq!(record.billing_cycle, "11/27/21-12/26/21");
        assert_eq!(record.payment_due_date, "01/23/22");
        assert_eq!(record.total_balance, "1,258.56");
        assert_eq!(record.transaction_info, "Total Purchases: $1,258.56");
    }

    #[test]
    fn test_chase_prefers_labeled_due_date() {
        let text = "\
Chase Card Services
Payment Due Date 02/15/22
Minimum Payment Due 01/23/22
";
        let record = RuleStatementParser::new().process(text);
        assert_eq!(record.payment_due_date, "02/15/22");
    }

    #[test]
    fn test_hdfc_statement_without_summary() {
        let text = "\
HDFC Bank Ltd.
Card No: XXXXXXXXXXXX4412
Statement Date: 02/01/2024
Payment Due Date: 22/01/2024
Total Amount Due: 45,320.15
";
        let record = RuleStatementParser::new().process(text);

        assert_eq!(record.bank_name, "HDFC Bank");
        assert_eq!(record.card_variant, "HDFC Credit Card");
        assert_eq!(record.card_last_4, "4412");
        assert_eq!(record.billing_cycle, "Ends on 02/01/2024");
        assert_eq!(record.payment_due_date, "22/01/2024");
        assert_eq!(record.total_balance, "45,320.15");
        assert_eq!(record.transaction_info, "Summary not detected");
    }

    #[test]
    fn test_sbi_statement() {
        let text = "\
SBI Card monthly statement
Card Number: XXXX XXXX XXXX 7781
Statement Date: 05/03/2024
Payment Due Date: 25/03/2024
Total Amount Due: 12,430.00
Debits 18,220.45
";
        let record = RuleStatementParser::new().process(text);

        assert_eq!(record.bank_name, "SBI Card");
        assert_eq!(record.card_last_4, "7781");
        assert_eq!(record.billing_cycle, "Statement generated on 05/03/2024");
        assert_eq!(record.payment_due_date, "25/03/2024");
        assert_eq!(record.total_balance, "12,430.00");
        assert_eq!(record.transaction_info, "Total Debits: 18,220.45");
    }

    #[test]
    fn test_amex_statement() {
        let text = "\
American Express
Prepared for JOHN DOE Account ending in 21005
Closing Date Mar 1, 2024
Payment Due Date Mar 26, 2024
New Balance $4,312.09
New charges $2,150.44
";
        let record = RuleStatementParser::new().process(text);

        assert_eq!(record.bank_name, "American Express");
        assert_eq!(record.card_variant, "Amex Card");
        assert_eq!(record.card_last_4, "21005");
        assert_eq!(record.billing_cycle, "Closing Date: Mar 1, 2024");
        assert_eq!(record.payment_due_date, "Mar 26, 2024");
        assert_eq!(record.total_balance, "4,312.09");
        assert_eq!(record.transaction_info, "New Charges: $2,150.44");
    }

    #[test]
    fn test_citi_statement() {
        let text = "\
Citibank Client Services
Card number ending in 9876
Statement Date: 03/15/2024
Payment Due Date: 04/09/2024
New Balance: $890.12
Purchases and Adjustments $1,022.87
";
        let record = RuleStatementParser::new().process(text);

        assert_eq!(record.bank_name, "Citibank");
        assert_eq!(record.card_variant, "Citi Card");
        assert_eq!(record.card_last_4, "9876");
        assert_eq!(record.billing_cycle, "Statement Date: 03/15/2024");
        assert_eq!(record.payment_due_date, "04/09/2024");
        assert_eq!(record.total_balance, "890.12");
        assert_eq!(record.transaction_info, "Purchases: $1,022.87");
    }

    #[test]
    fn test_unrelated_text_yields_placeholder_record() {
        let record = RuleStatementParser::new()
            .process("GROCERY MART\nMilk 3.49\nBread 2.99\nTotal 6.48");
        assert_eq!(record, StatementRecord::unknown());
    }

    #[test]
    fn test_empty_input_yields_placeholder_record() {
        let parser = RuleStatementParser::new();
        assert_eq!(parser.process(""), StatementRecord::unknown());
        assert_eq!(parser.process("  \n "), StatementRecord::unknown());
    }

    #[test]
    fn test_process_is_idempotent() {
        let parser = RuleStatementParser::new();
        assert_eq!(parser.process(CHASE_TEXT), parser.process(CHASE_TEXT));
    }

    #[test]
    fn test_field_failures_are_independent() {
        // Dropping the balance line must leave every other field untouched.
        let without_balance: String = CHASE_TEXT
            .lines()
            .filter(|line| !line.starts_with("New Balance"))
            .collect::<Vec<_>>()
            .join("\n");

        let record = RuleStatementParser::new().process(&without_balance);
        assert_eq!(record.total_balance, NOT_FOUND);
        assert_eq!(record.card_last_4, "1415");
        assert_eq!(record.billing_cycle, "11/27/21-12/26/21");
        assert_eq!(record.payment_due_date, "01/23/22");
    }

    #[test]
    fn test_invalid_date_falls_back_down_the_chain() {
        // The labeled date is impossible (month 13); the minimum-payment
        // fallback supplies the real one.
        let text = "\
Chase Card Services
Payment Due Date 13/45/22
Minimum Payment Due 01/23/22
";
        let record = RuleStatementParser::new().process(text);
        assert_eq!(record.payment_due_date, "01/23/22");

        let lenient = RuleStatementParser::new()
            .with_date_validation(false)
            .process(text);
        assert_eq!(lenient.payment_due_date, "13/45/22");
    }
}
