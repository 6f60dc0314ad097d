//! Parsing for the datetime strings the task API sends.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a server datetime like "2024-05-20T09:00:00", with or without
/// milliseconds and a timezone offset. Offset-carrying values keep their
/// wall-clock reading; the grid works in the user's local day throughout.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    let normalized = normalize_timezone_offset(raw);

    // Offset-carrying forms first, with and without milliseconds
    if let Ok(dt) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.3f%:z") {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%:z") {
        return Ok(dt.naive_local());
    }

    // Plain wall-clock forms
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.3f") {
        return Ok(dt);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .with_context(|| format!("Failed to parse datetime '{}'", raw))
}

/// Parse the date part of a server datetime string
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .with_context(|| format!("Failed to parse date '{}'", raw))
}

/// Normalize timezone offset from "+0900" to "+09:00" format for chrono parsing
fn normalize_timezone_offset(raw: &str) -> String {
    if raw.len() > 5 {
        let bytes = raw.as_bytes();
        let len = bytes.len();
        // Check if it ends with a 4-digit offset (no colon)
        if (bytes[len - 5] == b'+' || bytes[len - 5] == b'-')
            && bytes[len - 4].is_ascii_digit()
            && bytes[len - 3].is_ascii_digit()
            && bytes[len - 2].is_ascii_digit()
            && bytes[len - 1].is_ascii_digit()
        {
            // Insert colon: +0900 -> +09:00
            return format!("{}:{}", &raw[..len - 2], &raw[len - 2..]);
        }
    }
    raw.to_string()
}
