//! Second-pass hook for statements where the line scan found no income.

use super::scanner::DocumentText;
use crate::locale::LocaleTermSet;
use crate::models::statement::{FinancialRecord, TaxRecord};

/// Fallback strategy run when income is still zero after the line scan.
///
/// Implementations may fill in any figure they can recover and return `true`
/// when they changed something.
pub trait DeepScan: Send + Sync {
    fn recover(
        &self,
        text: &DocumentText,
        terms: &LocaleTermSet,
        financial: &mut FinancialRecord,
        tax: &mut TaxRecord,
    ) -> bool;
}

/// Default strategy: leaves the records untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeepScan;

impl DeepScan for NoDeepScan {
    fn recover(
        &self,
        _text: &DocumentText,
        _terms: &LocaleTermSet,
        _financial: &mut FinancialRecord,
        _tax: &mut TaxRecord,
    ) -> bool {
        false
    }
}
