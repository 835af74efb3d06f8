//! Line scanning: label matching and numeric token extraction.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::locale::LocaleTermSet;
use crate::models::statement::Field;

/// Statement text as one newline-separated buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    text: String,
}

impl DocumentText {
    /// Join per-page text, terminating every page with a newline.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for page in pages {
            text.push_str(page.as_ref());
            text.push('\n');
        }
        Self { text }
    }

    /// Wrap already-joined text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lines in document order (split on `\n` only).
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// Amounts pulled from a single line, per canonical field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineMatches {
    pub income: Option<Decimal>,
    pub expenses: Option<Decimal>,
    pub tax: Option<Decimal>,
}

impl LineMatches {
    pub fn is_empty(&self) -> bool {
        self.income.is_none() && self.expenses.is_none() && self.tax.is_none()
    }

    pub fn get(&self, field: Field) -> Option<Decimal> {
        match field {
            Field::Income => self.income,
            Field::Expenses => self.expenses,
            Field::Tax => self.tax,
        }
    }
}

/// Matches statement lines against one locale's vocabulary.
pub struct TextScanner<'a> {
    terms: &'a LocaleTermSet,
}

impl<'a> TextScanner<'a> {
    pub fn new(terms: &'a LocaleTermSet) -> Self {
        Self { terms }
    }

    /// Raw (not sign-normalized) amounts found on `line`.
    ///
    /// Tax is skipped on lines that also carry an expenses label, so a line
    /// like "Fees incl. VAT 12.00" only counts as an expense.
    pub fn scan_line(&self, line: &str) -> LineMatches {
        let mentions_expenses = self.terms.mentions(Field::Expenses, line);

        LineMatches {
            income: self.labeled_amount(Field::Income, line),
            expenses: if mentions_expenses {
                first_amount(line)
            } else {
                None
            },
            tax: if mentions_expenses {
                None
            } else {
                self.labeled_amount(Field::Tax, line)
            },
        }
    }

    fn labeled_amount(&self, field: Field, line: &str) -> Option<Decimal> {
        if self.terms.mentions(field, line) {
            first_amount(line)
        } else {
            None
        }
    }
}

/// First numeric token of a line, parsed.
///
/// Tokens are whitespace-separated with commas stripped. Only the first
/// candidate is considered: if it does not parse (`1-2`, `1.2.3`) the line
/// yields nothing.
pub fn first_amount(line: &str) -> Option<Decimal> {
    let candidate = line
        .split_whitespace()
        .map(|token| token.replace(',', ""))
        .find(|token| is_numeric_candidate(token))?;

    parse_amount(&candidate)
}

/// A token made only of digits, `.` and `-`, with at least one digit.
pub fn is_numeric_candidate(token: &str) -> bool {
    let mut has_digit = false;
    for c in token.chars() {
        match c {
            '0'..='9' => has_digit = true,
            '.' | '-' => {}
            _ => return false,
        }
    }
    has_digit
}

/// Parse a candidate token with floating-point syntax into a finite amount.
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let value: f64 = token.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Decimal::from_str(token)
        .ok()
        .or_else(|| Decimal::from_f64(value))
}
