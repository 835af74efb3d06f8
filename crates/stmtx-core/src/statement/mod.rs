//! Statement figure extraction: scanning, aggregation and assembly.

pub mod aggregator;
pub mod assembler;
pub mod deep_scan;
mod extractor;
pub mod samples;
pub mod scanner;

pub use aggregator::{FieldAggregator, ScanReport, normalize_expense};
pub use assembler::assemble;
pub use deep_scan::{DeepScan, NoDeepScan};
pub use extractor::{Extraction, ExtractionStatus, StatementExtractor};
pub use samples::{sample_figures, sample_report};
pub use scanner::{DocumentText, LineMatches, TextScanner, first_amount};
