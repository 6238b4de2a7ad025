use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, NaiveDate};

/// Parses a calendar date in any of the formats the upstream API emits.
///
/// Tries ISO (`2024-12-01`) first, then the day-first forms `01/12/2024`,
/// `01-12-2024` and `01.12.2024`, then an RFC3339 timestamp from which only
/// the date part is kept.
pub fn parse_flexible_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%d-%m-%Y") {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%d.%m.%Y") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    Err(anyhow!("Unrecognized date format: {}", s))
}

/// Formats a date as the `MM/YYYY` bucket key used by the monthly reports.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:02}/{:04}", date.month(), date.year())
}
