//! Location list extraction from a loading or unloading section.

use tracing::{debug, trace};

use super::collaborators::CountryLookup;
use super::lines::LineSequence;
use super::rules::{AddressLine, DateRangeLine, parse_company_address, parse_time_window};
use super::window::WindowScanner;
use crate::models::order::Location;

/// Extract locations, in document order, from the lines of one section.
///
/// At each position a date line is looked for first, then an address line
/// after it, both within the scan window. A location is emitted only for an
/// address with a company; a date without a following address is dropped.
pub fn extract_locations(lines: LineSequence<'_>, countries: &dyn CountryLookup) -> Vec<Location> {
    let mut output = Vec::new();
    let mut scanner = WindowScanner::new(lines);

    while !scanner.is_exhausted() {
        let datetime = scanner.scan(&DateRangeLine);

        let Some(address) = scanner.scan(&AddressLine) else {
            if let Some(dropped) = datetime {
                trace!("date {:?} has no address, skipping", dropped);
            }
            scanner.step();
            continue;
        };

        let company_address = parse_company_address(Some(address), countries);
        if !company_address.is_recognized() {
            debug!("address {:?} has no company, skipping", address);
            continue;
        }

        output.push(Location {
            company_address,
            time: parse_time_window(datetime),
        });
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::collaborators::CountryTable;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_date_and_address_pairs() {
        let raw = lines(&[
            "Pickup 1",
            "11.02.2025 08:00-16:00",
            "Loader GmbH, Werkstrasse 5, D-80331 München",
            "Ref 12",
            "Pickup 2",
            "12.02.2025",
            "Second Loader AG, Am Hafen 1, A-4020 Linz",
        ]);

        let locations = extract_locations(LineSequence::new(&raw), &CountryTable::new());
        assert_eq!(locations.len(), 2);

        assert_eq!(
            locations[0].company_address.company.as_deref(),
            Some("Loader GmbH")
        );
        let time = locations[0].time.unwrap();
        assert!(time.datetime_to.is_some());

        assert_eq!(locations[1].company_address.country.as_deref(), Some("AT"));
        assert!(locations[1].time.unwrap().datetime_to.is_none());
    }

    #[test]
    fn test_address_without_date() {
        let raw = lines(&["Receiver SRL, Via Roma 1, I-39100 Bozen"]);
        let locations = extract_locations(LineSequence::new(&raw), &CountryTable::new());

        assert_eq!(locations.len(), 1);
        assert!(locations[0].time.is_none());
    }

    #[test]
    fn test_date_without_address_is_discarded() {
        let raw = lines(&[
            "11.02.2025",
            "no address here",
            "nor here",
            "still nothing",
            "or here",
            "Late GmbH, Weg 1, D-10115 Berlin",
        ]);

        let locations = extract_locations(LineSequence::new(&raw), &CountryTable::new());
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].company_address.company.as_deref(), Some("Late GmbH"));
        assert!(locations[0].time.is_none());
    }

    #[test]
    fn test_empty_section() {
        let raw: Vec<String> = Vec::new();
        assert!(extract_locations(LineSequence::new(&raw), &CountryTable::new()).is_empty());
    }
}
