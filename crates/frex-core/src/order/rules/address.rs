//! Company address parsing.

use tracing::trace;

use super::patterns::ADDRESS_LINE;
use crate::models::order::CompanyAddress;
use crate::order::collaborators::CountryLookup;

/// Parse a single address line into its parts.
///
/// The primary form is `Company, Street, CC-Postal City`, where the
/// letters of the postal token are resolved through `countries`. Lines that
/// do not match fall back to a comma split. An empty or absent line yields
/// the unrecognized marker (no company).
pub fn parse_company_address(line: Option<&str>, countries: &dyn CountryLookup) -> CompanyAddress {
    let Some(line) = line.map(str::trim).filter(|l| !l.is_empty()) else {
        return CompanyAddress::unrecognized();
    };

    if let Some(caps) = ADDRESS_LINE.captures(line) {
        let company = caps[1].to_string();
        let postal = &caps[3];

        return CompanyAddress {
            title: Some(company.clone()),
            company: Some(company),
            street_address: Some(caps[2].to_string()),
            city: Some(caps[4].trim().to_string()),
            postal_code: non_empty(digits(postal)),
            country: countries.lookup(&letters(postal)),
        };
    }

    trace!("address {:?} did not match the primary pattern", line);
    parse_comma_separated(line, countries)
}

fn parse_comma_separated(line: &str, countries: &dyn CountryLookup) -> CompanyAddress {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    let company = parts.first().and_then(|p| non_empty(p.to_string()));
    let street = parts.get(1).and_then(|p| non_empty(p.to_string()));
    let city = parts.last().and_then(|p| non_empty(p.to_string()));

    let (postal_code, country) = if parts.len() >= 3 {
        let postal_part = parts[parts.len() - 2];
        (
            non_empty(digits(postal_part)),
            countries.lookup(&letters(postal_part)),
        )
    } else {
        (None, None)
    };

    CompanyAddress {
        title: company.clone(),
        company,
        street_address: street,
        city,
        postal_code,
        country,
    }
}

fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn letters(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::collaborators::CountryTable;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primary_pattern() {
        let addr = parse_company_address(
            Some("Muster GmbH, Hauptstrasse 1, A-6233 Kramsach"),
            &CountryTable::new(),
        );

        assert_eq!(
            addr,
            CompanyAddress {
                company: Some("Muster GmbH".to_string()),
                title: Some("Muster GmbH".to_string()),
                street_address: Some("Hauptstrasse 1".to_string()),
                city: Some("Kramsach".to_string()),
                postal_code: Some("6233".to_string()),
                country: Some("AT".to_string()),
            }
        );
    }

    #[test]
    fn test_synthetic_addresses_recover_parts() {
        let lookup = |cc: &str| Some(format!("ISO-{}", cc));
        let cases = [
            ("Alpha KG", "Weg 2", "D", "80331", "München"),
            ("Beta S.p.A.", "Via Roma 10", "I", "39100", "Bozen"),
            ("Gamma AG", "Ring 7", "CH", "8001", "Zürich"),
        ];

        for (company, street, cc, postal, city) in cases {
            let line = format!("{}, {}, {}-{} {}", company, street, cc, postal, city);
            let addr = parse_company_address(Some(&line), &lookup);

            assert_eq!(addr.company.as_deref(), Some(company));
            assert_eq!(addr.street_address.as_deref(), Some(street));
            assert_eq!(addr.postal_code.as_deref(), Some(postal));
            assert_eq!(addr.city.as_deref(), Some(city));
            assert_eq!(addr.country, Some(format!("ISO-{}", cc)));
        }
    }

    #[test]
    fn test_unknown_country_is_none() {
        let addr = parse_company_address(
            Some("Foo Ltd, High St 1, XQ-12345 Nowhere"),
            &CountryTable::new(),
        );
        assert_eq!(addr.company.as_deref(), Some("Foo Ltd"));
        assert_eq!(addr.postal_code.as_deref(), Some("12345"));
        assert_eq!(addr.country, None);
    }

    #[test]
    fn test_comma_split_fallback() {
        let addr = parse_company_address(
            Some("Foo GmbH, Lagerweg 3, D 12345, Berlin"),
            &CountryTable::new(),
        );
        assert_eq!(addr.company.as_deref(), Some("Foo GmbH"));
        assert_eq!(addr.street_address.as_deref(), Some("Lagerweg 3"));
        assert_eq!(addr.city.as_deref(), Some("Berlin"));
        assert_eq!(addr.postal_code.as_deref(), Some("12345"));
        assert_eq!(addr.country.as_deref(), Some("DE"));
    }

    #[test]
    fn test_fallback_with_two_segments_has_no_postal() {
        let addr = parse_company_address(Some("Foo GmbH, Berlin"), &CountryTable::new());
        assert_eq!(addr.company.as_deref(), Some("Foo GmbH"));
        assert_eq!(addr.city.as_deref(), Some("Berlin"));
        assert_eq!(addr.postal_code, None);
        assert_eq!(addr.country, None);
    }

    #[test]
    fn test_empty_line_is_unrecognized() {
        assert!(!parse_company_address(None, &CountryTable::new()).is_recognized());
        assert!(!parse_company_address(Some("   "), &CountryTable::new()).is_recognized());
    }
}
