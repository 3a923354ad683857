//! Line patterns for transport order documents.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date-range token as it appears in location blocks: "11.02.2025",
    // "11.02.2025 08:00-16:00". Intentionally loose; matched lines still
    // go through DATE_RANGE before producing a time window.
    pub static ref DATE_RANGE_LINE: Regex = Regex::new(
        r"^[0-9.]+ ?([0-9:]+)?-?([0-9:]+)?$"
    ).unwrap();

    // Dotted date with optional start and end time.
    pub static ref DATE_RANGE: Regex = Regex::new(
        r"^([0-9]+(?:\.[0-9]+)+) ?([0-9:]+)?-?([0-9:]+)?$"
    ).unwrap();

    // "Company, Street 1, A-6233 City"
    pub static ref ADDRESS_LINE: Regex = Regex::new(
        r"(?i)^(.+?)\s*, +(.+?)\s*, +([A-Z]{1,2}-?[0-9]{4,}) +(.+)$"
    ).unwrap();

    // Trailer plate prefix: two letters, three digits, then space or end.
    pub static ref TRAILER_PLATE: Regex = Regex::new(
        r"^[A-Z]{2}[0-9]{3}( |$)"
    ).unwrap();
}
