//! Calendar helpers for time-sensitive classification
//!
//! The core never reads an ambient clock; every operation takes `now` as a
//! parameter. Calendar comparisons (same day/week/month) are made on the
//! civil date of the supplied timestamps, so the caller controls the
//! business timezone by supplying timestamps in the same frame.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use shared::{DomainError, DomainResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| DomainError::validation(format!("Invalid date format: {date}")))
}

/// Parse a delivery time string (HH:MM, 24h)
///
/// Replaces the form-level regex check on pickup times with a pure parser.
pub fn parse_time_hhmm(time: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| DomainError::validation(format!("Invalid time format: {time}")))
}

/// Combine a delivery date and an HH:MM time into a timestamp
pub fn delivery_datetime(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Whether two timestamps fall on the same calendar day
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whether two timestamps fall in the same ISO week (Monday start)
pub fn same_week(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.iso_week() == b.iso_week()
}

/// Whether two timestamps fall in the same calendar month
pub fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
