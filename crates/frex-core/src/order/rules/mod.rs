//! Line recognizers and value parsers for transport order documents.

pub mod address;
pub mod amounts;
pub mod dates;
pub mod package;
pub mod patterns;

pub use address::parse_company_address;
pub use amounts::{normalize_decimal, parse_decimal, parse_price};
pub use dates::parse_time_window;
pub use package::PackageTypeMap;

use patterns::{ADDRESS_LINE, DATE_RANGE_LINE, TRAILER_PLATE};

/// Trait for deciding whether a single line is a token of some kind.
pub trait LineRecognizer {
    /// Check whether the line is recognized.
    fn matches(&self, line: &str) -> bool;
}

impl<F> LineRecognizer for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, line: &str) -> bool {
        self(line)
    }
}

/// Recognizes date-range lines such as `11.02.2025 08:00-16:00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeLine;

impl LineRecognizer for DateRangeLine {
    fn matches(&self, line: &str) -> bool {
        DATE_RANGE_LINE.is_match(line.trim())
    }
}

/// Recognizes `Company, Street, CC-Postal City` address lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressLine;

impl LineRecognizer for AddressLine {
    fn matches(&self, line: &str) -> bool {
        ADDRESS_LINE.is_match(line)
    }
}

/// Recognizes lines that start with a trailer plate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailerPlate;

impl TrailerPlate {
    /// The plate itself: the first whitespace-delimited token.
    pub fn plate<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.split(' ').next().filter(|p| !p.is_empty())
    }
}

impl LineRecognizer for TrailerPlate {
    fn matches(&self, line: &str) -> bool {
        TRAILER_PLATE.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_line_trims() {
        assert!(DateRangeLine.matches("  11.02.2025 08:00-16:00  "));
        assert!(!DateRangeLine.matches("Loading reference: 1"));
    }

    #[test]
    fn test_address_line() {
        assert!(AddressLine.matches("Foo AG, Bahnhofstr. 5, CH-8001 Zürich"));
        assert!(!AddressLine.matches("Foo AG"));
    }

    #[test]
    fn test_trailer_plate_token() {
        assert!(TrailerPlate.matches("KU456 Mega trailer"));
        assert_eq!(TrailerPlate.plate("KU456 Mega trailer"), Some("KU456"));
        assert_eq!(TrailerPlate.plate("KU456"), Some("KU456"));
    }
}
