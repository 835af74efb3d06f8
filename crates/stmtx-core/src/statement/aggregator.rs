//! Folding per-line matches into statement records.

use rust_decimal::Decimal;
use serde::Serialize;

use super::scanner::LineMatches;
use crate::models::statement::{FinancialRecord, TaxRecord};

/// Counters collected while scanning a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Lines visited.
    pub lines: usize,
    /// Lines that set the income figure.
    pub income_hits: usize,
    /// Lines that set the expenses figure.
    pub expense_hits: usize,
    /// Lines that set the tax figure.
    pub tax_hits: usize,
    /// Whether the deep-scan fallback changed the result.
    pub deep_scan_applied: bool,
}

/// Accumulates line matches; a later matching line overwrites an earlier one.
#[derive(Debug, Default)]
pub struct FieldAggregator {
    financial: FinancialRecord,
    tax: TaxRecord,
    report: ScanReport,
}

impl FieldAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, matches: LineMatches) {
        self.report.lines += 1;

        if let Some(income) = matches.income {
            self.financial.income = income;
            self.report.income_hits += 1;
        }

        if let Some(expenses) = matches.expenses {
            self.financial.expenses = normalize_expense(expenses);
            self.report.expense_hits += 1;
        }

        if let Some(tax) = matches.tax {
            self.tax.income = tax;
            self.report.tax_hits += 1;
        }
    }

    pub fn financial(&self) -> &FinancialRecord {
        &self.financial
    }

    pub fn finish(self) -> (FinancialRecord, TaxRecord, ScanReport) {
        (self.financial, self.tax, self.report)
    }
}

/// Expenses are stored non-positive whatever sign the document used.
pub fn normalize_expense(value: Decimal) -> Decimal {
    if value > Decimal::ZERO { -value } else { value }
}
