//! Numeric normalization for cargo quantities and prices.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalize a numeric string to dot-decimal form without thousands separators.
///
/// When both `,` and `.` occur, the one that comes last is the decimal
/// separator. Commas alone are a decimal separator when there is one and
/// thousands separators when they repeat. Dots alone are thousands
/// separators when every group after the first has three digits
/// (`12.500`), otherwise a decimal point (`13.6`). Returns `None` for an
/// empty input.
pub fn normalize_decimal(s: &str) -> Option<String> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace() && *c != '\u{00a0}').collect();
    // "850,-" style prices leave a dangling separator behind
    let cleaned = cleaned.trim_end_matches([',', '.']).to_string();
    if cleaned.is_empty() {
        return None;
    }

    let commas = cleaned.matches(',').count();
    let dots = cleaned.matches('.').count();

    let normalized = match (commas, dots) {
        (0, 0) => cleaned,
        (_, 0) if commas > 1 => cleaned.replace(',', ""),
        (_, 0) => cleaned.replace(',', "."),
        (0, _) if is_dot_grouped(&cleaned) => cleaned.replace('.', ""),
        (0, _) => cleaned,
        _ => {
            let comma_pos = cleaned.rfind(',');
            let dot_pos = cleaned.rfind('.');
            match (comma_pos, dot_pos) {
                (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
                _ => cleaned.replace(',', ""),
            }
        }
    };

    Some(normalized)
}

fn is_dot_grouped(s: &str) -> bool {
    let mut groups = s.split('.');
    let lead = groups.next().unwrap_or_default();
    !lead.is_empty()
        && lead.len() <= 3
        && groups.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

/// Parse a quantity such as `1.234,5` or `33`.
///
/// Empty and unparseable values are `None`, never zero.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal(s)?;
    Decimal::from_str(&normalized).ok()
}

/// Parse a price line, ignoring currency symbols and other decoration.
pub fn parse_price(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    parse_decimal(&cleaned)
}
