//! Statement data models: platforms, canonical fields, and extracted figures.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform code used when the caller does not supply one.
pub const DEFAULT_PLATFORM: &str = "uk";

/// Marketplace/region identifier supplied by the caller.
///
/// Codes are kept verbatim; unknown codes are legal and fall back to the
/// default locale and currency when resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform(String);

impl Platform {
    /// Create a platform from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The platform code as given by the caller.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Platform {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Platform {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalized financial category, independent of the document language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Sales, revenue and similar.
    Income,
    /// Fees, costs and similar.
    Expenses,
    /// VAT, sales tax and similar.
    Tax,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Income => "income",
            Field::Expenses => "expenses",
            Field::Tax => "tax",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Income and expense totals found in a statement.
///
/// `expenses` is never positive once an expense line has been matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    #[serde(rename = "Income", with = "super::amount")]
    pub income: Decimal,

    #[serde(rename = "Expenses", with = "super::amount")]
    pub expenses: Decimal,
}

impl FinancialRecord {
    pub fn new(income: Decimal, expenses: Decimal) -> Self {
        Self { income, expenses }
    }
}

/// Tax figures found in a statement.
///
/// The tax amount is carried in `income`; `expenses` stays zero. This is the
/// wire shape consumers already read, so the field names are kept as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRecord {
    #[serde(rename = "Income", with = "super::amount")]
    pub income: Decimal,

    #[serde(rename = "Expenses", with = "super::amount")]
    pub expenses: Decimal,
}

impl TaxRecord {
    /// Tax record holding the given tax amount.
    pub fn with_amount(amount: Decimal) -> Self {
        Self {
            income: amount,
            expenses: Decimal::ZERO,
        }
    }

    /// The extracted tax amount.
    pub fn amount(&self) -> Decimal {
        self.income
    }
}

/// Final currency-tagged output for one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementReport {
    /// Platform code as supplied by the caller.
    pub platform: Platform,

    /// Currency of all amounts in the report.
    pub currency: String,

    #[serde(rename = "financialData")]
    pub financial_data: FinancialRecord,

    #[serde(rename = "taxData")]
    pub tax_data: TaxRecord,
}
