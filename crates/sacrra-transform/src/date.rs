//! Date normalization to the layout's `YYYYMMDD` form.
//!
//! The data source has emitted dates in several encodings over time. Each is
//! tried in a fixed priority order:
//!
//! 1. `YYYYMMDD`
//! 2. `YYYY-MM-DD`
//! 3. `DD/MM/YYYY`
//! 4. `MM/DD/YYYY hh:mm AM` (export format with time of day)
//! 5. RFC 3339 / ISO 8601 timestamps, date part as written
//!
//! Anything else, including the Unix epoch placeholder, is unset and encodes
//! as [`UNSET_DATE`]. Normalization never fails.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use sacrra_model::UNSET_DATE;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse any supported encoding into a calendar date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    let parsed = parse_compact(value)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        })
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(value, format)
                    .ok()
                    .map(|dt| dt.date())
            })
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })?;
    if is_epoch(parsed) || !(1..=9999).contains(&parsed.year()) {
        return None;
    }
    Some(parsed)
}

/// The data source writes the epoch when a date was never set.
fn is_epoch(date: NaiveDate) -> bool {
    date.year() == 1970 && date.ordinal() == 1
}

/// Parse the compact `YYYYMMDD` form only.
#[must_use]
pub fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date as `YYYYMMDD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Render an optional date, unset as [`UNSET_DATE`].
#[must_use]
pub fn format_optional(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| UNSET_DATE.to_string(), format_date)
}

/// Normalize any supported encoding to `YYYYMMDD`, or [`UNSET_DATE`].
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    format_optional(parse_date(raw))
}

/// Last calendar day of the month containing `date`.
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// First calendar day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
