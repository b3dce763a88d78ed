//! Date helpers for form values and report display.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};

/// Format a date as "YYYY-MM-DD", the value format of `<input type="date">`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}

/// Parse an optional form value; an empty input clears the date.
pub fn parse_optional_date(s: &str) -> Option<NaiveDate> {
    if s.trim().is_empty() {
        return None;
    }
    match parse_date(s) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Ignoring unparseable date '{}': {}", s, e);
            None
        }
    }
}

/// ISO-8601 timestamp for the start of `date` in UTC, e.g. `2024-01-01T00:00:00.000Z`.
pub fn to_iso_timestamp(date: &NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Display form of a report's `createdDate` ("M/D/YYYY").
///
/// The backend sends ISO dates or timestamps; only the calendar date prefix
/// is used. Anything else is shown as received.
pub fn format_created_date(raw: &str) -> String {
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
