//! Locale-specific statement vocabulary and platform currencies.

mod builtin;

pub use builtin::BUILTIN_TERMS;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StmtxError};
use crate::models::statement::{DEFAULT_PLATFORM, Field};

/// Currency reported for platforms without a mapping.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Label synonyms for each canonical field in one locale.
///
/// Synonyms are matched as plain substrings, in listed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTermSet {
    pub income: Vec<String>,
    pub expenses: Vec<String>,
    pub tax: Vec<String>,
}

impl LocaleTermSet {
    pub fn new<S: AsRef<str>>(income: &[S], expenses: &[S], tax: &[S]) -> Self {
        let owned = |terms: &[S]| terms.iter().map(|t| t.as_ref().to_string()).collect();
        Self {
            income: owned(income),
            expenses: owned(expenses),
            tax: owned(tax),
        }
    }

    /// Synonyms for a canonical field.
    pub fn synonyms(&self, field: Field) -> &[String] {
        match field {
            Field::Income => &self.income,
            Field::Expenses => &self.expenses,
            Field::Tax => &self.tax,
        }
    }

    /// Whether any synonym of `field` occurs in `line`.
    pub fn mentions(&self, field: Field, line: &str) -> bool {
        self.synonyms(field)
            .iter()
            .any(|term| !term.is_empty() && line.contains(term.as_str()))
    }
}

/// Platform → locale vocabulary and platform → currency lookup.
///
/// Built once and shared read-only; both lookups are total thanks to the
/// fallback locale and default currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTermTable")]
pub struct LocaleTermTable {
    locales: HashMap<String, LocaleTermSet>,
    currencies: HashMap<String, String>,
    fallback_locale: String,
    default_currency: String,
}

/// Wire form of [`LocaleTermTable`], validated on conversion.
#[derive(Deserialize)]
struct RawTermTable {
    locales: HashMap<String, LocaleTermSet>,
    #[serde(default)]
    currencies: HashMap<String, String>,
    #[serde(default = "default_fallback_locale")]
    fallback_locale: String,
    #[serde(default = "default_currency")]
    default_currency: String,
}

impl TryFrom<RawTermTable> for LocaleTermTable {
    type Error = StmtxError;

    fn try_from(raw: RawTermTable) -> Result<Self> {
        Self::new(
            raw.locales,
            raw.currencies,
            raw.fallback_locale,
            raw.default_currency,
        )
    }
}

fn default_fallback_locale() -> String {
    DEFAULT_PLATFORM.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl LocaleTermTable {
    /// Build a table, checking that the fallback locale is present.
    pub fn new(
        locales: HashMap<String, LocaleTermSet>,
        currencies: HashMap<String, String>,
        fallback_locale: impl Into<String>,
        default_currency: impl Into<String>,
    ) -> Result<Self> {
        let table = Self {
            locales,
            currencies,
            fallback_locale: fallback_locale.into(),
            default_currency: default_currency.into(),
        };
        table.validate()?;
        Ok(table)
    }

    /// The built-in marketplace table.
    pub fn builtin() -> Self {
        BUILTIN_TERMS.clone()
    }

    /// Load a table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table: Self = serde_json::from_str(&content)?;
        debug!(
            "Loaded term table from {} with {} locales",
            path.display(),
            table.locales.len()
        );
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        if !self.locales.contains_key(&self.fallback_locale) {
            return Err(StmtxError::Config(format!(
                "term table has no entry for fallback locale '{}'",
                self.fallback_locale
            )));
        }
        Ok(())
    }

    /// Vocabulary for a platform, or the fallback locale's when unknown.
    pub fn resolve(&self, platform: &str) -> &LocaleTermSet {
        self.locales
            .get(platform)
            .unwrap_or_else(|| &self.locales[&self.fallback_locale])
    }

    /// Currency code for a platform, or the default currency when unmapped.
    pub fn currency_of(&self, platform: &str) -> &str {
        self.currencies
            .get(platform)
            .map(String::as_str)
            .unwrap_or(&self.default_currency)
    }

    /// Locale used for platforms without their own vocabulary.
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Whether the platform has its own vocabulary.
    pub fn has_locale(&self, platform: &str) -> bool {
        self.locales.contains_key(platform)
    }

    /// All platforms the table knows about (with a locale or a currency), sorted.
    pub fn platforms(&self) -> Vec<&str> {
        let mut platforms: Vec<&str> = self
            .locales
            .keys()
            .chain(self.currencies.keys())
            .map(String::as_str)
            .collect();
        platforms.sort_unstable();
        platforms.dedup();
        platforms
    }
}

impl Default for LocaleTermTable {
    fn default() -> Self {
        Self::builtin()
    }
}
