//! Date-range parsing for pickup and delivery slots.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use super::patterns::DATE_RANGE;
use crate::models::order::TimeWindow;

/// Parse a `DD.MM.YYYY [HH:MM]-[HH:MM]` line into a time window.
///
/// Both ends share the date. Returns `None` when the line is absent, does
/// not look like a date, or carries an impossible date or time.
pub fn parse_time_window(line: Option<&str>) -> Option<TimeWindow> {
    let line = line.map(str::trim).filter(|l| !l.is_empty())?;
    let caps = DATE_RANGE.captures(line)?;

    let date = match parse_dotted_date(&caps[1]) {
        Some(date) => date,
        None => {
            debug!("malformed date in {:?}", line);
            return None;
        }
    };

    let start = at_time(date, caps.get(2).map(|m| m.as_str()))?;
    let end = at_time(date, caps.get(3).map(|m| m.as_str()))?;

    Some(TimeWindow::new(start.and_utc(), end.and_utc()))
}

/// Day-first dotted date; two-digit years are expanded.
fn parse_dotted_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year = parse_year(year)?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() <= 2 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 {
            Some(2000 + year)
        } else {
            Some(1900 + year)
        }
    } else {
        Some(year)
    }
}

/// Combine the date with an optional clock time; midnight when absent.
fn at_time(date: NaiveDate, time: Option<&str>) -> Option<NaiveDateTime> {
    let time = match time.filter(|t| !t.is_empty()) {
        Some(t) => parse_clock(t)?,
        None => NaiveTime::MIN,
    };
    Some(date.and_time(time))
}

fn parse_clock(s: &str) -> Option<NaiveTime> {
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        return Some(t);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(t);
    }
    // Bare hour ("8") or compact "0800"
    if s.chars().all(|c| c.is_ascii_digit()) {
        return match s.len() {
            1 | 2 => NaiveTime::from_hms_opt(s.parse().ok()?, 0, 0),
            4 => NaiveTime::from_hms_opt(s[..2].parse().ok()?, s[2..].parse().ok()?, 0),
            _ => None,
        };
    }
    None
}
