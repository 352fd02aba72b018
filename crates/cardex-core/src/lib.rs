//! Core library for credit-card statement data extraction.
//!
//! This crate provides:
//! - PDF text extraction for text-based statements
//! - Issuer detection over the supported bank set (HDFC, Chase, SBI, Amex, Citi)
//! - Rule-based field extraction with per-issuer pattern fallback chains

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{CardexError, PdfError, Result};
pub use models::config::CardexConfig;
pub use models::statement::{Bank, StatementRecord, NOT_FOUND, NO_SUMMARY};
pub use pdf::{PdfSource, StatementPdf};
pub use statement::{detect, parse_statement, RuleStatementParser, StatementParser};
