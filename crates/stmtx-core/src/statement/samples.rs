//! Canned per-platform figures for demos and frontend development.

use rust_decimal::Decimal;

use super::assembler::assemble;
use crate::locale::LocaleTermTable;
use crate::models::statement::{FinancialRecord, Platform, StatementReport, TaxRecord};

/// Sample figures as (income, expenses, tax) in hundredths.
fn sample_cents(platform: &str) -> (i64, i64, i64) {
    match platform {
        "de" => (159442, -33512, 0),
        "es" => (1520075, -325040, 286015),
        "fr" => (1245035, -289028, 224560),
        "nl" => (985042, -212085, 168030),
        "it" => (1125065, -254018, 193045),
        "usa" => (2568092, -584034, 432578),
        "ebay" => (875045, -198025, 148520),
        "etsy" => (568030, -124055, 93540),
        "bandq" => (1458060, -325045, 248535),
        _ => (1887768, -468152, 377567),
    }
}

/// Sample records for a platform; unknown platforms get the UK sample.
pub fn sample_figures(platform: &str) -> (FinancialRecord, TaxRecord) {
    let (income, expenses, tax) = sample_cents(platform);
    (
        FinancialRecord::new(Decimal::new(income, 2), Decimal::new(expenses, 2)),
        TaxRecord::with_amount(Decimal::new(tax, 2)),
    )
}

/// Sample report for a platform, tagged with the platform's currency.
pub fn sample_report(table: &LocaleTermTable, platform: &Platform) -> StatementReport {
    let (financial, tax) = sample_figures(platform.as_str());
    assemble(table, platform, financial, tax)
}
