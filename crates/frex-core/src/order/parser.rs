//! Access Logistic transport order extractor.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::cargo::CargoExtractor;
use super::collaborators::{CountryLookup, CountryTable, LabelTranslator, TranslationTable};
use super::lines::LineSequence;
use super::locations::extract_locations;
use super::rules::{LineRecognizer, PackageTypeMap, TrailerPlate, parse_price};
use super::{ExtractionResult, OrderExtractor};
use crate::models::config::ExtractionConfig;
use crate::models::order::{Customer, CustomerDetails, CustomerSide, OrderRecord};

/// First line of every Access Logistic order.
pub const SENDER_LINE: &str = "Access Logistic GmbH, Amerling 130, A-6233 Kramsach";

const TOUR_NUMBER: &str = "Tournumber:";
const TRUCK_TRAILER: &str = "Truck, trailer:";
const VEHICLE_TYPE: &str = "Vehicle type:";
const FREIGHT_RATE: &str = "Freight rate in €:";
const LOADING_SEQUENCE: &str = "Loading sequence:";
const UNLOADING_SEQUENCE: &str = "Unloading sequence:";
const BEST_REGARDS: &str = "Best regards";
const CONTACT_PERSON: &str = "Contactperson: ";

// The labels below are followed by a formatting line before the value.
const TOUR_NUMBER_OFFSET: usize = 2;
const TRUCK_OFFSET: usize = 2;
const FREIGHT_OFFSET: usize = 2;

/// Fixed customer block of the template; only the contact person varies.
struct CustomerTemplate {
    company: &'static str,
    street_address: &'static str,
    city: &'static str,
    postal_code: &'static str,
    country: &'static str,
    vat_code: &'static str,
}

const ACCESS_LOGISTIC: CustomerTemplate = CustomerTemplate {
    company: "Access Logistic GmbH",
    street_address: "Amerling 130",
    city: "Kramsach",
    postal_code: "6233",
    country: "AT",
    vat_code: "ATU74076812",
};

impl CustomerTemplate {
    fn customer(&self, contact_person: Option<String>) -> Customer {
        Customer {
            side: CustomerSide::None,
            details: CustomerDetails {
                company: self.company.to_string(),
                street_address: self.street_address.to_string(),
                city: self.city.to_string(),
                postal_code: self.postal_code.to_string(),
                country: self.country.to_string(),
                vat_code: self.vat_code.to_string(),
                contact_person,
            },
        }
    }
}

/// Extractor for transport orders issued by Access Logistic GmbH.
pub struct AccessLogisticParser {
    countries: Box<dyn CountryLookup + Send + Sync>,
    translator: Box<dyn LabelTranslator + Send + Sync>,
    cargo: CargoExtractor,
    freight_currency: String,
}

impl AccessLogisticParser {
    /// Create a parser with built-in tables.
    pub fn new() -> Self {
        Self {
            countries: Box::new(CountryTable::new()),
            translator: Box::new(TranslationTable::default()),
            cargo: CargoExtractor::default(),
            freight_currency: "EUR".to_string(),
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let package_types = PackageTypeMap::builtin().with_entries(config.package_types.clone());

        Self::new()
            .with_translator(TranslationTable::new(config.translations.clone()))
            .with_package_types(package_types)
            .with_currency(&config.freight_currency)
    }

    /// Set the country lookup service.
    pub fn with_country_lookup<C>(mut self, countries: C) -> Self
    where
        C: CountryLookup + Send + Sync + 'static,
    {
        self.countries = Box::new(countries);
        self
    }

    /// Set the label translation service.
    pub fn with_translator<T>(mut self, translator: T) -> Self
    where
        T: LabelTranslator + Send + Sync + 'static,
    {
        self.translator = Box::new(translator);
        self
    }

    /// Set the unit label mapping.
    pub fn with_package_types(mut self, package_types: PackageTypeMap) -> Self {
        self.cargo = CargoExtractor::new(package_types);
        self
    }

    /// Set the freight currency.
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.freight_currency = currency.to_string();
        self
    }

    fn extract_order_reference(&self, lines: LineSequence<'_>) -> Option<String> {
        let anchor = lines.anchor(TOUR_NUMBER)?;
        let reference = lines
            .value_at(&anchor, TOUR_NUMBER_OFFSET)?
            .trim_matches(['*', ' ']);
        (!reference.is_empty()).then(|| reference.to_string())
    }

    fn extract_transport_numbers(&self, lines: LineSequence<'_>) -> String {
        let truck_anchor = lines.anchor(TRUCK_TRAILER);
        let truck = truck_anchor
            .as_ref()
            .and_then(|anchor| lines.value_at(anchor, TRUCK_OFFSET));

        let trailer = match (truck_anchor, lines.anchor(VEHICLE_TYPE)) {
            (Some(truck_at), Some(vehicle_at)) => lines
                .find_index(|line, i| {
                    i > truck_at.index && i < vehicle_at.index && TrailerPlate.matches(line)
                })
                .and_then(|i| lines.get(i))
                .and_then(|line| TrailerPlate.plate(line)),
            _ => None,
        };

        debug!("truck {:?}, trailer {:?}", truck, trailer);
        join_transport_numbers(truck, trailer)
    }

    fn extract_freight_price(&self, lines: LineSequence<'_>) -> Option<Decimal> {
        let anchor = lines.anchor(FREIGHT_RATE)?;
        lines.value_at(&anchor, FREIGHT_OFFSET).and_then(parse_price)
    }

    fn extract_contact_person(&self, lines: LineSequence<'_>) -> Option<String> {
        lines
            .prefix_anchor(CONTACT_PERSON)
            .and_then(|anchor| anchor.inline_value())
            .map(str::to_string)
    }
}

impl Default for AccessLogisticParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderExtractor for AccessLogisticParser {
    fn name(&self) -> &'static str {
        "Access Logistic"
    }

    fn is_format(&self, lines: &[String]) -> bool {
        let lines = LineSequence::new(lines);
        lines.get(0) == Some(SENDER_LINE)
            && lines.get(2) == Some("To:")
            && lines.get(4).is_some_and(|l| l.starts_with(CONTACT_PERSON))
    }

    fn extract(&self, lines: &[String], attachment_filename: Option<&str>) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();
        let lines = LineSequence::new(lines);

        info!("Extracting {} order from {} lines", self.name(), lines.len());

        let order_reference = self.extract_order_reference(lines);
        if order_reference.is_none() {
            warnings.push("Could not extract tour number".to_string());
        }

        let transport_numbers = self.extract_transport_numbers(lines);
        if transport_numbers.is_empty() {
            warnings.push("Could not extract truck or trailer number".to_string());
        }

        let freight_price = self.extract_freight_price(lines);
        if freight_price.is_none() {
            warnings.push("Could not extract freight rate".to_string());
        }

        let loading_anchor = lines.anchor(LOADING_SEQUENCE);
        let unloading_anchor = lines.anchor(UNLOADING_SEQUENCE);
        let regards_anchor = lines.anchor(BEST_REGARDS);

        let loading_locations = extract_locations(
            lines.between(loading_anchor.as_ref(), unloading_anchor.as_ref()),
            self.countries.as_ref(),
        );
        let destination_locations = extract_locations(
            lines.between(unloading_anchor.as_ref(), regards_anchor.as_ref()),
            self.countries.as_ref(),
        );
        if loading_locations.is_empty() {
            warnings.push("No loading locations found".to_string());
        }
        if destination_locations.is_empty() {
            warnings.push("No unloading locations found".to_string());
        }

        let contact_person = self.extract_contact_person(lines);
        let cargos = self.cargo.extract(lines, self.translator.as_ref());

        let order = OrderRecord {
            customer: ACCESS_LOGISTIC.customer(contact_person),
            loading_locations,
            destination_locations,
            attachment_filenames: vec![attachment_filename.unwrap_or_default().to_lowercase()],
            cargos,
            order_reference,
            transport_numbers,
            freight_price,
            freight_currency: self.freight_currency.clone(),
        };

        debug!(
            "Extracted order {:?} with {} loading and {} unloading locations",
            order.order_reference,
            order.loading_locations.len(),
            order.destination_locations.len()
        );

        ExtractionResult {
            order,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Join the present plates with `" / "`; empty when neither is present.
fn join_transport_numbers(truck: Option<&str>, trailer: Option<&str>) -> String {
    [truck, trailer]
        .into_iter()
        .flatten()
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}
