//! Transport order data models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete transport order as extracted from one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Ordering party.
    pub customer: Customer,

    /// Pickup locations in document order.
    pub loading_locations: Vec<Location>,

    /// Delivery locations in document order.
    pub destination_locations: Vec<Location>,

    /// Source attachment names (lower-cased).
    pub attachment_filenames: Vec<String>,

    /// Cargo line items.
    pub cargos: Vec<CargoItem>,

    /// Customer's order/tour reference.
    pub order_reference: Option<String>,

    /// Truck and trailer plates joined with `" / "`; empty when both are absent.
    pub transport_numbers: String,

    /// Agreed freight price.
    pub freight_price: Option<Decimal>,

    /// Currency of the freight price.
    pub freight_currency: String,
}

/// Ordering party block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Which side of the shipment the customer is on.
    pub side: CustomerSide,

    /// Company details.
    pub details: CustomerDetails,
}

/// Role of the customer relative to the shipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerSide {
    /// Customer is the shipper.
    Sender,
    /// Customer is the consignee.
    Receiver,
    /// Customer is a third party (forwarder).
    #[default]
    None,
}

/// Company details of the ordering party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub company: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub vat_code: String,
    pub contact_person: Option<String>,
}

/// A pickup or delivery location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Parsed address. `company` is always present for emitted locations.
    pub company_address: CompanyAddress,

    /// Time slot, when a date line preceded the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeWindow>,
}

/// Address of a company at a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAddress {
    /// Company name. `None` means no address was recognized.
    pub company: Option<String>,

    /// Display title (same as company).
    pub title: Option<String>,

    /// Street name and number.
    pub street_address: Option<String>,

    /// City name.
    pub city: Option<String>,

    /// Postal code digits.
    pub postal_code: Option<String>,

    /// ISO 3166 alpha-2 country code.
    pub country: Option<String>,
}

impl CompanyAddress {
    /// Marker for "no address at this position".
    pub fn unrecognized() -> Self {
        Self::default()
    }

    /// Check whether a company name was recognized.
    pub fn is_recognized(&self) -> bool {
        self.company.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Format address as a single string.
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if let Some(company) = &self.company {
            parts.push(company.clone());
        }
        if let Some(street) = &self.street_address {
            parts.push(street.clone());
        }
        match (&self.country, &self.postal_code, &self.city) {
            (Some(country), Some(postal), Some(city)) => {
                parts.push(format!("{}-{} {}", country, postal, city))
            }
            (None, Some(postal), Some(city)) => parts.push(format!("{} {}", postal, city)),
            (_, _, Some(city)) => parts.push(city.clone()),
            _ => {}
        }
        parts.join(", ")
    }
}

/// A start/end slot for pickup or delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Slot start.
    pub datetime_from: DateTime<Utc>,

    /// Slot end; omitted when equal to the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime_to: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Build a window, collapsing an end equal to the start.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            datetime_from: from,
            datetime_to: (to != from).then_some(to),
        }
    }
}

/// A single cargo line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    /// Goods description.
    pub title: Option<String>,

    /// Loading/unloading references joined with `"; "`.
    pub number: String,

    /// Number of packages (defaults to 1).
    pub package_count: Decimal,

    /// Localized package type label.
    pub package_type: Option<String>,

    /// Loading meters.
    pub ldm: Option<Decimal>,

    /// Gross weight.
    pub weight: Option<Decimal>,
}

/// Normalized package types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageType {
    /// Pallets other than EUR-standard.
    #[default]
    PalletOther,
    /// Cartons / full load.
    Carton,
    /// Anything else (pieces).
    Other,
}

impl PackageType {
    /// Enum key as used in translation keys.
    pub fn as_key(&self) -> &'static str {
        match self {
            PackageType::PalletOther => "PALLET_OTHER",
            PackageType::Carton => "CARTON",
            PackageType::Other => "OTHER",
        }
    }

    /// Translation key, e.g. `package_type.PALLET_OTHER`.
    pub fn translation_key(&self) -> String {
        format!("package_type.{}", self.as_key())
    }
}
