//! RFC 2822 date parsing.

use chrono::{DateTime, NaiveDateTime};

/// Parses an RFC 2822-style date string into a calendar timestamp.
///
/// The returned value carries the year, month, day, hour, minute, and
/// second exactly as written in the string; the zone offset is parsed but
/// not applied. Empty, unparseable, or calendar-invalid input (month 13,
/// day 32) yields `None` rather than an error or a clamped value.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use url_util::parse_rfc_datetime;
///
/// let dt = parse_rfc_datetime("Tue, 1 Jul 2003 10:52:37 +0200").unwrap();
/// assert_eq!((dt.year(), dt.month(), dt.day()), (2003, 7, 1));
/// assert_eq!((dt.hour(), dt.minute(), dt.second()), (10, 52, 37));
///
/// assert!(parse_rfc_datetime("").is_none());
/// assert!(parse_rfc_datetime("garbage").is_none());
/// ```
#[must_use]
pub fn parse_rfc_datetime(text: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc2822(text).ok().map(|dt| dt.naive_local())
}
