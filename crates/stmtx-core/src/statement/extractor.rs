//! Statement extraction entry point.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::aggregator::{FieldAggregator, ScanReport};
use super::assembler::assemble;
use super::deep_scan::{DeepScan, NoDeepScan};
use super::scanner::{DocumentText, TextScanner};
use crate::document::DocumentKind;
use crate::error::Result;
use crate::locale::LocaleTermTable;
use crate::models::config::ExtractionConfig;
use crate::models::statement::{FinancialRecord, Platform, StatementReport, TaxRecord};
use crate::pdf::{PdfExtractor, PdfProcessor};
use crate::spreadsheet::read_first_sheet;

/// How the figures of an [`Extraction`] were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStatus {
    /// Text was scanned line by line.
    Scanned(ScanReport),
    /// The document was read, but no figure mapping exists for its format
    /// yet; the records are zero.
    NotImplemented {
        /// Data rows that were loaded.
        rows: usize,
    },
}

/// Figures extracted from one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub financial: FinancialRecord,
    pub tax: TaxRecord,
    pub status: ExtractionStatus,
}

impl Extraction {
    /// Whether the figures come from an actual scan.
    pub fn is_scanned(&self) -> bool {
        matches!(self.status, ExtractionStatus::Scanned(_))
    }
}

/// Extracts income, expenses and tax from statement documents.
///
/// Holds the shared term table; one instance serves any number of
/// concurrent callers.
#[derive(Clone)]
pub struct StatementExtractor {
    terms: Arc<LocaleTermTable>,
    deep_scan: Option<Arc<dyn DeepScan>>,
}

impl StatementExtractor {
    /// Create an extractor with the no-op deep scan.
    pub fn new(terms: Arc<LocaleTermTable>) -> Self {
        Self {
            terms,
            deep_scan: Some(Arc::new(NoDeepScan)),
        }
    }

    /// Create an extractor from configuration, loading a custom term table
    /// when one is configured.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        let terms = match &config.terms_file {
            Some(path) => LocaleTermTable::from_file(path)?,
            None => LocaleTermTable::builtin(),
        };

        let extractor = Self::new(Arc::new(terms));
        Ok(if config.deep_scan {
            extractor
        } else {
            extractor.without_deep_scan()
        })
    }

    /// Use a custom deep-scan strategy.
    pub fn with_deep_scan(mut self, strategy: impl DeepScan + 'static) -> Self {
        self.deep_scan = Some(Arc::new(strategy));
        self
    }

    /// Never run a deep scan.
    pub fn without_deep_scan(mut self) -> Self {
        self.deep_scan = None;
        self
    }

    /// The term table in use.
    pub fn terms(&self) -> &LocaleTermTable {
        &self.terms
    }

    /// Scan statement text for the platform's labels.
    pub fn extract_text(&self, text: &DocumentText, platform: &Platform) -> Extraction {
        let terms = self.terms.resolve(platform.as_str());
        let scanner = TextScanner::new(terms);
        let mut aggregator = FieldAggregator::new();

        for line in text.lines() {
            aggregator.fold(scanner.scan_line(line));
        }

        let (mut financial, mut tax, mut report) = aggregator.finish();

        if financial.income.is_zero() {
            if let Some(strategy) = &self.deep_scan {
                report.deep_scan_applied = strategy.recover(text, terms, &mut financial, &mut tax);
            }
        }

        debug!(
            "Scanned {} lines for '{}': {} income, {} expense, {} tax matches",
            report.lines, platform, report.income_hits, report.expense_hits, report.tax_hits
        );

        Extraction {
            financial,
            tax,
            status: ExtractionStatus::Scanned(report),
        }
    }

    /// Extract figures from PDF bytes.
    pub fn extract_pdf(&self, data: &[u8], platform: &Platform) -> Result<Extraction> {
        let mut pdf = PdfExtractor::new();
        pdf.load(data)?;
        let content = pdf.extract_all()?;

        let text = DocumentText::from_pages(content.page_texts());
        Ok(self.extract_text(&text, platform))
    }

    /// Extract figures from a PDF file.
    pub fn extract_pdf_file(&self, path: &Path, platform: &Platform) -> Result<Extraction> {
        let data = std::fs::read(path)?;
        self.extract_pdf(&data, platform)
    }

    /// Extract figures from an `.xlsx`/`.xls` workbook.
    ///
    /// The workbook must be readable; its rows are not mapped to figures yet,
    /// so the result is a zero record marked [`ExtractionStatus::NotImplemented`].
    pub fn extract_spreadsheet(&self, path: &Path, platform: &Platform) -> Result<Extraction> {
        let table = read_first_sheet(path)?;

        warn!(
            "Spreadsheet figure mapping is not implemented; returning zero figures for '{}' ({} rows in '{}')",
            platform,
            table.row_count(),
            table.sheet
        );

        Ok(Extraction {
            financial: FinancialRecord::default(),
            tax: TaxRecord::default(),
            status: ExtractionStatus::NotImplemented {
                rows: table.row_count(),
            },
        })
    }

    /// Extract figures from a file of the given kind.
    pub fn extract_file(
        &self,
        path: &Path,
        kind: DocumentKind,
        platform: &Platform,
    ) -> Result<Extraction> {
        let start = Instant::now();
        info!("Extracting {} statement {} for '{}'", kind.name(), path.display(), platform);

        let extraction = match kind {
            DocumentKind::Pdf => self.extract_pdf_file(path, platform)?,
            DocumentKind::Spreadsheet => self.extract_spreadsheet(path, platform)?,
        };

        debug!("Extraction took {:?}", start.elapsed());
        Ok(extraction)
    }

    /// Extract and assemble the output record for a file.
    pub fn process_file(
        &self,
        path: &Path,
        kind: DocumentKind,
        platform: &Platform,
    ) -> Result<StatementReport> {
        let extraction = self.extract_file(path, kind, platform)?;
        Ok(self.assemble(platform, extraction))
    }

    /// Tag extracted figures with the platform's currency.
    pub fn assemble(&self, platform: &Platform, extraction: Extraction) -> StatementReport {
        assemble(&self.terms, platform, extraction.financial, extraction.tax)
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new(Arc::new(LocaleTermTable::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StmtxError;
    use crate::locale::LocaleTermSet;
    use crate::test_support::{build_pdf, build_xlsx};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn extract(lines: &[&str], platform: &str) -> Extraction {
        let text = DocumentText::from_pages([lines.join("\n")]);
        StatementExtractor::default().extract_text(&text, &Platform::new(platform))
    }

    #[test]
    fn test_uk_income_and_expenses() {
        let result = extract(&["Income 18877.68", "Expenses 4681.52"], "uk");

        assert_eq!(
            result.financial,
            FinancialRecord::new(dec("18877.68"), dec("-4681.52"))
        );
        assert_eq!(result.tax, TaxRecord::default());
    }

    #[test]
    fn test_de_tax_only() {
        let result = extract(&["Steuer 335.12"], "de");

        assert_eq!(result.tax.amount(), dec("335.12"));
        assert_eq!(result.financial, FinancialRecord::default());
    }

    #[test]
    fn test_expense_and_tax_line_skips_tax() {
        let result = extract(&["Gebühren inkl. MwSt 19.99"], "de");

        assert_eq!(result.financial.expenses, dec("-19.99"));
        assert!(result.tax.amount().is_zero());
    }

    #[test]
    fn test_negative_expense_unchanged() {
        let result = extract(&["Fees -120.40"], "uk");
        assert_eq!(result.financial.expenses, dec("-120.40"));
    }

    #[test]
    fn test_unknown_platform_uses_uk_terms() {
        let result = extract(&["Revenue 5680.30", "Fees 1240.55", "VAT 935.40"], "etsy");

        assert_eq!(
            result.financial,
            FinancialRecord::new(dec("5680.30"), dec("-1240.55"))
        );
        assert_eq!(result.tax.amount(), dec("935.40"));
    }

    #[test]
    fn test_locale_specific_terms() {
        let result = extract(
            &["Chiffre d'affaires 12,450.35", "Frais 2,890.28", "TVA 2,245.60"],
            "fr",
        );

        assert_eq!(
            result.financial,
            FinancialRecord::new(dec("12450.35"), dec("-2890.28"))
        );
        assert_eq!(result.tax.amount(), dec("2245.60"));
    }

    #[test]
    fn test_scan_report() {
        let result = extract(&["Income 1", "Income 2", "nothing"], "uk");

        match result.status {
            ExtractionStatus::Scanned(report) => {
                assert_eq!(report.income_hits, 2);
                assert_eq!(report.lines, 4);
                assert!(!report.deep_scan_applied);
            }
            other => panic!("unexpected status {:?}", other),
        }
        assert_eq!(result.financial.income, dec("2"));
    }

    struct FixedIncome(Decimal);

    impl DeepScan for FixedIncome {
        fn recover(
            &self,
            _text: &DocumentText,
            _terms: &LocaleTermSet,
            financial: &mut FinancialRecord,
            _tax: &mut TaxRecord,
        ) -> bool {
            financial.income = self.0;
            true
        }
    }

    #[test]
    fn test_deep_scan_runs_only_without_income() {
        let extractor = StatementExtractor::default().with_deep_scan(FixedIncome(dec("42")));
        let platform = Platform::new("uk");

        let missing = extractor.extract_text(&DocumentText::from_text("Fees 10"), &platform);
        assert_eq!(missing.financial.income, dec("42"));
        assert!(matches!(
            missing.status,
            ExtractionStatus::Scanned(ScanReport { deep_scan_applied: true, .. })
        ));

        let found = extractor.extract_text(&DocumentText::from_text("Income 7"), &platform);
        assert_eq!(found.financial.income, dec("7"));
    }

    #[test]
    fn test_without_deep_scan() {
        let extractor = StatementExtractor::default()
            .with_deep_scan(FixedIncome(dec("42")))
            .without_deep_scan();

        let result = extractor.extract_text(&DocumentText::from_text("Fees 10"), &Platform::default());
        assert!(result.financial.income.is_zero());
    }

    #[test]
    fn test_extract_pdf() {
        let data = build_pdf(&[&["Summary", "Income 18877.68"], &["Expenses 4681.52", "VAT 3775.67"]]);
        let result = StatementExtractor::default()
            .extract_pdf(&data, &Platform::new("uk"))
            .unwrap();

        assert_eq!(
            result.financial,
            FinancialRecord::new(dec("18877.68"), dec("-4681.52"))
        );
        assert_eq!(result.tax.amount(), dec("3775.67"));
    }

    #[test]
    fn test_extract_pdf_failure() {
        let result = StatementExtractor::default().extract_pdf(b"%PDF-garbage", &Platform::default());
        assert!(matches!(result, Err(StmtxError::Pdf(_))));
    }

    #[test]
    fn test_spreadsheet_returns_zero_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.xlsx");
        std::fs::write(&path, build_xlsx(&[&["Income", "Expenses"], &["100", "20"]])).unwrap();

        let extractor = StatementExtractor::default();
        let platform = Platform::new("uk");
        let result = extractor
            .extract_file(&path, DocumentKind::Spreadsheet, &platform)
            .unwrap();

        assert_eq!(result.financial, FinancialRecord::default());
        assert_eq!(result.tax, TaxRecord::default());
        assert_eq!(result.status, ExtractionStatus::NotImplemented { rows: 1 });
        assert!(!result.is_scanned());

        let report = extractor.assemble(&platform, result);
        assert_eq!(report.currency, "GBP");
    }

    #[test]
    fn test_from_config_with_terms_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.json");
        std::fs::write(
            &path,
            r#"{"locales": {"uk": {"income": ["Przychody"], "expenses": [], "tax": []}}, "currencies": {}}"#,
        )
        .unwrap();

        let config = ExtractionConfig {
            terms_file: Some(path),
            ..Default::default()
        };
        let extractor = StatementExtractor::from_config(&config).unwrap();
        let result = extractor.extract_text(
            &DocumentText::from_text("Przychody 10\nIncome 99"),
            &Platform::default(),
        );
        assert_eq!(result.financial.income, dec("10"));
    }
}
