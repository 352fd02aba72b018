//! Data models for statement processing.

pub mod config;
pub mod statement;

pub use config::{CardexConfig, ExtractionConfig, PdfConfig};
pub use statement::{Bank, StatementRecord, NOT_FOUND, NO_SUMMARY, STANDARD_VARIANT};
