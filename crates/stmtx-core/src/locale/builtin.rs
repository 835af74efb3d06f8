//! Built-in vocabulary for the supported marketplaces.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{DEFAULT_CURRENCY, LocaleTermSet, LocaleTermTable};
use crate::models::statement::DEFAULT_PLATFORM;

lazy_static! {
    pub static ref BUILTIN_TERMS: LocaleTermTable = {
        let mut locales = HashMap::new();

        // Amazon UK
        locales.insert("uk".to_string(), LocaleTermSet::new(
            &["Income", "income", "Sales", "Revenue"],
            &["Expenses", "expenses", "Costs", "Fees"],
            &["Tax", "tax", "VAT"],
        ));

        // Amazon DE
        locales.insert("de".to_string(), LocaleTermSet::new(
            &["Einnahmen", "Umsätze", "Einnahmen und Erstattungen"],
            &["Ausgaben", "Gebühren", "Kosten"],
            &["Steuer", "MwSt", "Mehrwertsteuer"],
        ));

        // Amazon ES
        locales.insert("es".to_string(), LocaleTermSet::new(
            &["Ingresos", "Ventas", "Ingresos y reembolsos"],
            &["Gastos", "Tarifas", "Costes"],
            &["Impuesto", "IVA"],
        ));

        // Amazon FR
        locales.insert("fr".to_string(), LocaleTermSet::new(
            &["Revenus", "Ventes", "Chiffre d'affaires"],
            &["Dépenses", "Frais", "Coûts"],
            &["Taxe", "TVA", "Impôt"],
        ));

        // Amazon NL
        locales.insert("nl".to_string(), LocaleTermSet::new(
            &["Inkomsten", "Verkoop", "Omzet"],
            &["Uitgaven", "Kosten", "Vergoedingen"],
            &["Belasting", "BTW"],
        ));

        // Amazon IT
        locales.insert("it".to_string(), LocaleTermSet::new(
            &["Entrate", "Vendite", "Ricavi"],
            &["Spese", "Costi", "Commissioni"],
            &["Tassa", "IVA", "Imposta"],
        ));

        // Amazon US
        locales.insert("usa".to_string(), LocaleTermSet::new(
            &["Income", "Sales", "Revenue"],
            &["Expenses", "Costs", "Fees"],
            &["Tax", "Sales tax"],
        ));

        // eBay, Etsy and B&Q statements use the UK vocabulary.
        let currencies: HashMap<String, String> = [
            ("uk", "GBP"),
            ("de", "EUR"),
            ("es", "EUR"),
            ("fr", "EUR"),
            ("nl", "EUR"),
            ("it", "EUR"),
            ("usa", "USD"),
            ("ebay", "GBP"),
            ("etsy", "GBP"),
            ("bandq", "GBP"),
        ]
        .into_iter()
        .map(|(platform, currency)| (platform.to_string(), currency.to_string()))
        .collect();

        LocaleTermTable {
            locales,
            currencies,
            fallback_locale: DEFAULT_PLATFORM.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    };
}
