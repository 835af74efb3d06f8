//! Error types for the stmtx-core library.

use thiserror::Error;

/// Main error type for the stmtx library.
#[derive(Error, Debug)]
pub enum StmtxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Spreadsheet processing error.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] SpreadsheetError),

    /// The document type is not one we can read.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to spreadsheet processing.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// Failed to open the workbook.
    #[error("failed to open workbook: {0}")]
    Open(String),

    /// The workbook contains no worksheets.
    #[error("workbook has no worksheets")]
    NoSheets,

    /// Failed to read a worksheet's cell range.
    #[error("failed to read worksheet {sheet}: {reason}")]
    Range { sheet: String, reason: String },
}

/// Result type for the stmtx library.
pub type Result<T> = std::result::Result<T, StmtxError>;
