//! Cargo line item extraction.

use rust_decimal::Decimal;

use super::collaborators::LabelTranslator;
use super::lines::LineSequence;
use super::rules::{PackageTypeMap, parse_decimal};
use crate::models::order::CargoItem;

/// Extracts the cargo block of an order.
///
/// Each field has its own anchor, located independently; the value sits on
/// the line after the label. Only one cargo item per document is supported.
#[derive(Debug, Clone, Default)]
pub struct CargoExtractor {
    package_types: PackageTypeMap,
}

impl CargoExtractor {
    pub fn new(package_types: PackageTypeMap) -> Self {
        Self { package_types }
    }

    pub fn extract(&self, lines: LineSequence<'_>, translator: &dyn LabelTranslator) -> Vec<CargoItem> {
        let next_line = |label: &'static str| {
            lines
                .anchor(label)
                .and_then(|anchor| lines.value_at(&anchor, 1))
        };
        let quantity = |label: &'static str| next_line(label).and_then(parse_decimal);
        let reference = |prefix: &'static str| {
            lines
                .prefix_anchor(prefix)
                .and_then(|anchor| anchor.inline_value())
                .filter(|r| !r.is_empty())
        };

        let package_type = next_line("Unit:").map(|unit| {
            let ty = self.package_types.resolve(unit);
            translator.translate(&ty.translation_key())
        });

        let number = [reference("Loading reference:"), reference("Unloading reference:")]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("; ");

        vec![CargoItem {
            title: next_line("Load:").map(str::to_string),
            number,
            package_count: quantity("Amount:").unwrap_or(Decimal::ONE),
            package_type,
            ldm: quantity("Loadingmeter:"),
            weight: quantity("Weight:"),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::collaborators::TranslationTable;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_cargo_block() {
        let raw = lines(&[
            "Load:",
            "Machine parts",
            "Amount:",
            "1.234,5",
            "Unit:",
            "Ladung",
            "Weight:",
            "24.000,00",
            "Loadingmeter:",
            "13,6",
            "Loading reference: L-1",
            "Unloading reference: U-2",
        ]);

        let mut translations = BTreeMap::new();
        translations.insert("package_type.CARTON".to_string(), "Carton".to_string());
        let translator = TranslationTable::new(translations);

        let cargos = CargoExtractor::default().extract(LineSequence::new(&raw), &translator);
        assert_eq!(cargos.len(), 1);

        let cargo = &cargos[0];
        assert_eq!(cargo.title.as_deref(), Some("Machine parts"));
        assert_eq!(cargo.number, "L-1; U-2");
        assert_eq!(cargo.package_count, Decimal::from_str("1234.5").unwrap());
        assert_eq!(cargo.package_type.as_deref(), Some("Carton"));
        assert_eq!(cargo.weight, Some(Decimal::from_str("24000.00").unwrap()));
        assert_eq!(cargo.ldm, Some(Decimal::from_str("13.6").unwrap()));
    }

    #[test]
    fn test_dotted_weight_is_grouped() {
        let raw = lines(&["Weight:", "12.500", "Loadingmeter:", "13.6"]);
        let cargos = CargoExtractor::default().extract(LineSequence::new(&raw), &TranslationTable::default());

        let cargo = &cargos[0];
        assert_eq!(cargo.weight, Some(Decimal::from_str("12500").unwrap()));
        assert_eq!(cargo.ldm, Some(Decimal::from_str("13.6").unwrap()));
    }

    #[test]
    fn test_missing_anchors_use_defaults() {
        let raw = lines(&["Nothing relevant"]);
        let cargos = CargoExtractor::default().extract(LineSequence::new(&raw), &TranslationTable::default());

        let cargo = &cargos[0];
        assert_eq!(cargo.title, None);
        assert_eq!(cargo.number, "");
        assert_eq!(cargo.package_count, Decimal::ONE);
        assert_eq!(cargo.package_type, None);
        assert_eq!(cargo.ldm, None);
        assert_eq!(cargo.weight, None);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let raw = lines(&["Amount:", "", "Weight:", "", "Unit:", "Kisten", "Unloading reference: U-9"]);
        let cargos = CargoExtractor::default().extract(LineSequence::new(&raw), &TranslationTable::default());

        let cargo = &cargos[0];
        assert_eq!(cargo.package_count, Decimal::ONE);
        assert_eq!(cargo.weight, None);
        assert_eq!(cargo.package_type.as_deref(), Some("package_type.PALLET_OTHER"));
        assert_eq!(cargo.number, "U-9");
    }
}
