//! Compiled regex patterns for statement field extraction.
//!
//! Each pattern captures the field value in group 1. Patterns shared by
//! several issuers (US-format balances, Indian-issuer labels) are defined
//! once and referenced from more than one chain.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Shared US-issuer amounts ("New Balance $1,258.56", "Purchases $430.10")
    pub static ref NEW_BALANCE_USD: Regex = Regex::new(
        r"(?i)New\s+Balance[^\n]*?\$\s*([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref PURCHASES_USD: Regex = Regex::new(
        r"(?i)Purchases\b[^\n]*?\$\s*([\d,]+\.\d{2})"
    ).unwrap();

    // Shared Indian-issuer labels (HDFC and SBI statement vocabulary)
    pub static ref TOTAL_AMOUNT_DUE: Regex = Regex::new(
        r"(?i)Total\s+Amount\s+Due[:\-\s]*[^\n]*?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref DEBITS_TOTAL: Regex = Regex::new(
        r"(?i)Debits\s*[:\-\s]*([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref STATEMENT_DATE: Regex = Regex::new(
        r"(?i)Statement\s+Date\s*[:\-\s]*(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})"
    ).unwrap();

    pub static ref PAYMENT_DUE_DATE: Regex = Regex::new(
        r"(?i)Payment\s+Due\s+Date\s*[:\-\s]*(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})"
    ).unwrap();

    // Chase
    pub static ref CHASE_ACCOUNT_ENDING: Regex = Regex::new(
        r"(?i)(?:Account|ending)\s+(?:Number)?\s*(?:in|:)?\s*(\d{4})\b"
    ).unwrap();

    pub static ref CHASE_ACCOUNT_MASKED: Regex = Regex::new(
        r"(?i)Account\s+Number[:\s]*(?:[Xx*]{4}[\s\-]*){3}(\d{4})\b"
    ).unwrap();

    // "Opening/Closing Date 11/27/21 - 12/26/21"
    pub static ref CHASE_CYCLE_RANGE: Regex = Regex::new(
        r"(?i)Opening/Closing\s+Date\s*[:\s]*(\d{1,2}/\d{1,2}/\d{2,4}\s*-\s*\d{1,2}/\d{1,2}/\d{2,4})"
    ).unwrap();

    // Some Chase templates print only "Minimum Payment Due <date>"; the date
    // shape keeps this from matching the minimum-payment amount line.
    pub static ref CHASE_MINIMUM_DUE: Regex = Regex::new(
        r"(?i)Minimum\s+Payment\s+Due\s*[:\s]*(\d{1,2}/\d{1,2}/\d{2,4})"
    ).unwrap();

    // HDFC masks the card as XXXXXXXX1234 or 4532XXXXXXXX1234
    pub static ref HDFC_CARD_LABELED: Regex = Regex::new(
        r"(?i)Card\s+(?:No|Number)[.:\s]*[Xx*\d ]*(\d{4})\b"
    ).unwrap();

    pub static ref HDFC_CARD_MASKED: Regex = Regex::new(
        r"[X\d]{8,12}(\d{4})"
    ).unwrap();

    // SBI: "Card Number: XXXX XXXX XXXX 1234"
    pub static ref SBI_CARD_MASK: Regex = Regex::new(
        r"XXXX\s+(\d{4})\b"
    ).unwrap();

    pub static ref SBI_CARD_LABELED: Regex = Regex::new(
        r"(?i)Card\s+Number[:\s]*(?:[Xx*]{4}\s*){3}(\d{4})\b"
    ).unwrap();

    // Amex prints 5-digit endings: "ending in 12345"
    pub static ref AMEX_ENDING: Regex = Regex::new(
        r"(?i)ending\s+in\s+(\d{4,5})\b"
    ).unwrap();

    pub static ref AMEX_CLOSING_DATE: Regex = Regex::new(
        r"(?i)Closing\s+Date\s*[:\s]*([A-Za-z]{3}\s+\d{1,2},?\s+\d{4})"
    ).unwrap();

    pub static ref AMEX_DUE_DATE: Regex = Regex::new(
        r"(?i)Payment\s+Due\s+Date\s*[:\s]*([A-Za-z]{3}\s+\d{1,2},?\s+\d{4})"
    ).unwrap();

    pub static ref AMEX_NEW_CHARGES: Regex = Regex::new(
        r"(?i)New\s+charges[^\n]*?\$\s*([\d,]+\.\d{2})"
    ).unwrap();

    // Citi: labeled form first; the lenient form grabs the last 4-digit run
    // on an Account/Card line and is kept as a final fallback only.
    pub static ref CITI_CARD_LABELED: Regex = Regex::new(
        r"(?i)(?:Account|Card)(?:\s+number)?(?:\s+ending)?(?:\s+in)?[:\s]*(?:[Xx*]{4}[\s\-]*)*(\d{4})\b"
    ).unwrap();

    pub static ref CITI_CARD_LOOSE: Regex = Regex::new(
        r"(?i)(?:Account|Card)\s+[^\n]*(\d{4})\b"
    ).unwrap();
}
