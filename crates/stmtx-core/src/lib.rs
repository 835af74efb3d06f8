//! Core library for marketplace statement extraction.
//!
//! This crate provides:
//! - Locale term tables mapping platforms to label synonyms and currencies
//! - PDF text extraction and spreadsheet loading
//! - Line scanning and aggregation of income, expenses and tax figures
//! - Currency-tagged statement reports

pub mod document;
pub mod error;
pub mod locale;
pub mod models;
pub mod pdf;
pub mod spreadsheet;
pub mod statement;

#[cfg(test)]
mod test_support;

pub use document::DocumentKind;
pub use error::{PdfError, Result, SpreadsheetError, StmtxError};
pub use locale::{LocaleTermSet, LocaleTermTable};
pub use models::statement::{Field, FinancialRecord, Platform, StatementReport, TaxRecord};
pub use pdf::{PdfContent, PdfExtractor, PdfProcessor};
pub use statement::{DocumentText, Extraction, ExtractionStatus, StatementExtractor};
