//! Data models and configuration.

mod amount;
pub mod config;
pub mod statement;

pub use config::{ExtractionConfig, ServerConfig, StmtxConfig};
pub use statement::{
    DEFAULT_PLATFORM, Field, FinancialRecord, Platform, StatementReport, TaxRecord,
};
