//! Pairing extracted figures with the platform currency.

use crate::locale::LocaleTermTable;
use crate::models::statement::{FinancialRecord, Platform, StatementReport, TaxRecord};

/// Build the output record for a platform.
pub fn assemble(
    table: &LocaleTermTable,
    platform: &Platform,
    financial: FinancialRecord,
    tax: TaxRecord,
) -> StatementReport {
    StatementReport {
        platform: platform.clone(),
        currency: table.currency_of(platform.as_str()).to_string(),
        financial_data: financial,
        tax_data: tax,
    }
}
