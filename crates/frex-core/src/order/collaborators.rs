//! External services the extractor depends on.
//!
//! Country resolution, label translation and order creation are owned by
//! the host application. Built-in implementations cover standalone use.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::order::OrderRecord;

/// Resolves a country name or code fragment to an ISO 3166 alpha-2 code.
pub trait CountryLookup {
    /// `None` when the fragment is unknown.
    fn lookup(&self, fragment: &str) -> Option<String>;
}

impl<F> CountryLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, fragment: &str) -> Option<String> {
        self(fragment)
    }
}

/// Translates enum keys such as `package_type.CARTON` to display strings.
///
/// Must not fail: unknown keys come back unchanged.
pub trait LabelTranslator {
    fn translate(&self, key: &str) -> String;
}

/// Receives the assembled order and persists it.
///
/// Its result, including any error, is passed through to the caller unchanged.
pub trait OrderSink {
    type Output;
    type Error;

    fn create_order(&self, order: OrderRecord) -> Result<Self::Output, Self::Error>;
}

/// Sink that turns the order into a plain nested JSON mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrderSink;

impl OrderSink for JsonOrderSink {
    type Output = Value;
    type Error = serde_json::Error;

    fn create_order(&self, order: OrderRecord) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&order)
    }
}

/// Built-in country table: ISO codes, vehicle registration codes and names.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    extra: BTreeMap<String, String>,
}

// (ISO code, aliases). Aliases are international vehicle registration
// codes plus English and German names, compared case-insensitively.
const COUNTRIES: &[(&str, &[&str])] = &[
    ("AT", &["A", "AUT", "AUSTRIA", "ÖSTERREICH", "OESTERREICH"]),
    ("DE", &["D", "DEU", "GERMANY", "DEUTSCHLAND"]),
    ("CH", &["CHE", "SWITZERLAND", "SCHWEIZ"]),
    ("IT", &["I", "ITA", "ITALY", "ITALIEN", "ITALIA"]),
    ("LI", &["FL", "LIE", "LIECHTENSTEIN"]),
    ("FR", &["F", "FRA", "FRANCE", "FRANKREICH"]),
    ("BE", &["B", "BEL", "BELGIUM", "BELGIEN"]),
    ("NL", &["NLD", "NETHERLANDS", "NIEDERLANDE", "HOLLAND"]),
    ("LU", &["L", "LUX", "LUXEMBOURG", "LUXEMBURG"]),
    ("ES", &["E", "ESP", "SPAIN", "SPANIEN"]),
    ("PT", &["P", "PRT", "PORTUGAL"]),
    ("GB", &["UK", "GBR", "UNITED KINGDOM", "GROSSBRITANNIEN"]),
    ("IE", &["IRL", "IRELAND", "IRLAND"]),
    ("DK", &["DNK", "DENMARK", "DÄNEMARK"]),
    ("SE", &["S", "SWE", "SWEDEN", "SCHWEDEN"]),
    ("NO", &["N", "NOR", "NORWAY", "NORWEGEN"]),
    ("FI", &["FIN", "FINLAND", "FINNLAND"]),
    ("PL", &["POL", "POLAND", "POLEN"]),
    ("CZ", &["CZE", "CZECHIA", "CZECH REPUBLIC", "TSCHECHIEN"]),
    ("SK", &["SVK", "SLOVAKIA", "SLOWAKEI"]),
    ("HU", &["H", "HUN", "HUNGARY", "UNGARN"]),
    ("SI", &["SLO", "SVN", "SLOVENIA", "SLOWENIEN"]),
    ("HR", &["HRV", "CROATIA", "KROATIEN"]),
    ("RS", &["SRB", "SERBIA", "SERBIEN"]),
    ("BA", &["BIH", "BOSNIA AND HERZEGOVINA", "BOSNIEN UND HERZEGOWINA"]),
    ("RO", &["ROU", "ROMANIA", "RUMÄNIEN"]),
    ("BG", &["BGR", "BULGARIA", "BULGARIEN"]),
    ("GR", &["GRC", "GREECE", "GRIECHENLAND"]),
    ("TR", &["TUR", "TURKEY", "TÜRKEI"]),
    ("LT", &["LTU", "LITHUANIA", "LITAUEN"]),
    ("LV", &["LVA", "LATVIA", "LETTLAND"]),
    ("EE", &["EST", "ESTONIA", "ESTLAND"]),
    ("UA", &["UKR", "UKRAINE"]),
];

impl CountryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or override an alias.
    pub fn with_alias(mut self, alias: &str, iso: &str) -> Self {
        self.extra.insert(alias.to_uppercase(), iso.to_uppercase());
        self
    }
}

impl CountryLookup for CountryTable {
    fn lookup(&self, fragment: &str) -> Option<String> {
        let key = fragment.trim().to_uppercase();
        if key.is_empty() {
            return None;
        }

        if let Some(iso) = self.extra.get(&key) {
            return Some(iso.clone());
        }

        COUNTRIES
            .iter()
            .find(|(iso, aliases)| *iso == key || aliases.contains(&key.as_str()))
            .map(|(iso, _)| iso.to_string())
    }
}

/// Translation table with key fallback.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl LabelTranslator for TranslationTable {
    fn translate(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_table_codes() {
        let table = CountryTable::new();
        assert_eq!(table.lookup("A").as_deref(), Some("AT"));
        assert_eq!(table.lookup("d").as_deref(), Some("DE"));
        assert_eq!(table.lookup("CH").as_deref(), Some("CH"));
        assert_eq!(table.lookup("FL").as_deref(), Some("LI"));
        assert_eq!(table.lookup("Österreich").as_deref(), Some("AT"));
    }

    #[test]
    fn test_country_table_unknown() {
        let table = CountryTable::new();
        assert_eq!(table.lookup("XQ"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_country_table_alias() {
        let table = CountryTable::new().with_alias("MC", "mc");
        assert_eq!(table.lookup("mc").as_deref(), Some("MC"));
    }

    #[test]
    fn test_translation_falls_back_to_key() {
        let mut entries = BTreeMap::new();
        entries.insert("package_type.CARTON".to_string(), "Carton".to_string());
        let table = TranslationTable::new(entries);

        assert_eq!(table.translate("package_type.CARTON"), "Carton");
        assert_eq!(table.translate("package_type.OTHER"), "package_type.OTHER");
    }

    #[test]
    fn test_json_sink_produces_mapping() {
        use crate::models::order::{Customer, CustomerDetails, CustomerSide};

        let order = OrderRecord {
            customer: Customer {
                side: CustomerSide::None,
                details: CustomerDetails::default(),
            },
            loading_locations: Vec::new(),
            destination_locations: Vec::new(),
            attachment_filenames: vec![String::new()],
            cargos: Vec::new(),
            order_reference: None,
            transport_numbers: String::new(),
            freight_price: None,
            freight_currency: "EUR".to_string(),
        };

        let value = JsonOrderSink.create_order(order).unwrap();
        assert!(value.is_object());
        assert_eq!(value["customer"]["side"], "none");
        assert_eq!(value["transport_numbers"], "");
    }
}
