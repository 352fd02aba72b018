//! Rule-based field extraction: pattern chains plus value normalization.

pub mod amounts;
pub mod dates;
pub mod patterns;

pub use amounts::{normalize_amount, parse_amount};
pub use dates::{canonicalize_date, canonicalize_month_name, canonicalize_range, DateOrder};

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::statement::Bank;
use patterns::*;

/// A field located by pattern matching. `bank_name` and `card_variant` are
/// static labels derived from the detected issuer and have no patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CardLast4,
    BillingCycle,
    DueDate,
    TotalBalance,
    TransactionSummary,
}

/// Extraction order for the matched fields.
pub const FIELD_ORDER: [Field; 5] = [
    Field::CardLast4,
    Field::BillingCycle,
    Field::DueDate,
    Field::TotalBalance,
    Field::TransactionSummary,
];

lazy_static! {
    /// Per-issuer, per-field pattern chains. Chains are tried top to bottom
    /// and the first match whose capture survives normalization wins.
    /// Extending the engine to a new issuer means adding entries here (plus
    /// its markers and labels); existing issuers are untouched.
    static ref LIBRARY: HashMap<(Bank, Field), Vec<&'static Regex>> = {
        let mut m: HashMap<(Bank, Field), Vec<&'static Regex>> = HashMap::new();

        // Chase
        m.insert(
            (Bank::Chase, Field::CardLast4),
            vec![&*CHASE_ACCOUNT_ENDING, &*CHASE_ACCOUNT_MASKED],
        );
        m.insert((Bank::Chase, Field::BillingCycle), vec![&*CHASE_CYCLE_RANGE]);
        m.insert(
            (Bank::Chase, Field::DueDate),
            vec![&*PAYMENT_DUE_DATE, &*CHASE_MINIMUM_DUE],
        );
        m.insert((Bank::Chase, Field::TotalBalance), vec![&*NEW_BALANCE_USD]);
        m.insert(
            (Bank::Chase, Field::TransactionSummary),
            vec![&*PURCHASES_USD, &*NEW_BALANCE_USD],
        );

        // HDFC
        m.insert(
            (Bank::Hdfc, Field::CardLast4),
            vec![&*HDFC_CARD_LABELED, &*HDFC_CARD_MASKED],
        );
        m.insert((Bank::Hdfc, Field::BillingCycle), vec![&*STATEMENT_DATE]);
        m.insert((Bank::Hdfc, Field::DueDate), vec![&*PAYMENT_DUE_DATE]);
        m.insert((Bank::Hdfc, Field::TotalBalance), vec![&*TOTAL_AMOUNT_DUE]);
        m.insert((Bank::Hdfc, Field::TransactionSummary), vec![&*DEBITS_TOTAL]);

        // SBI
        m.insert(
            (Bank::Sbi, Field::CardLast4),
            vec![&*SBI_CARD_MASK, &*SBI_CARD_LABELED],
        );
        m.insert((Bank::Sbi, Field::BillingCycle), vec![&*STATEMENT_DATE]);
        m.insert((Bank::Sbi, Field::DueDate), vec![&*PAYMENT_DUE_DATE]);
        m.insert((Bank::Sbi, Field::TotalBalance), vec![&*TOTAL_AMOUNT_DUE]);
        m.insert((Bank::Sbi, Field::TransactionSummary), vec![&*DEBITS_TOTAL]);

        // Amex
        m.insert((Bank::Amex, Field::CardLast4), vec![&*AMEX_ENDING]);
        m.insert((Bank::Amex, Field::BillingCycle), vec![&*AMEX_CLOSING_DATE]);
        m.insert((Bank::Amex, Field::DueDate), vec![&*AMEX_DUE_DATE]);
        m.insert((Bank::Amex, Field::TotalBalance), vec![&*NEW_BALANCE_USD]);
        m.insert((Bank::Amex, Field::TransactionSummary), vec![&*AMEX_NEW_CHARGES]);

        // Citi
        m.insert(
            (Bank::Citi, Field::CardLast4),
            vec![&*CITI_CARD_LABELED, &*CITI_CARD_LOOSE],
        );
        m.insert((Bank::Citi, Field::BillingCycle), vec![&*STATEMENT_DATE]);
        m.insert((Bank::Citi, Field::DueDate), vec![&*PAYMENT_DUE_DATE]);
        m.insert((Bank::Citi, Field::TotalBalance), vec![&*NEW_BALANCE_USD]);
        m.insert((Bank::Citi, Field::TransactionSummary), vec![&*PURCHASES_USD]);

        m
    };
}

/// Look up the ordered pattern chain for one issuer/field pair.
pub fn patterns_for(bank: Bank, field: Field) -> &'static [&'static Regex] {
    LIBRARY
        .get(&(bank, field))
        .map(|chain| chain.as_slice())
        .unwrap_or(&[])
}
