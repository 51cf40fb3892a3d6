// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of template helper arguments into dates and numbers.
//!
//! Dates are accepted in the forms template authors tend to write:
//!
//! - nothing at all, `"now"` or `"today"` (any case): the current time
//! - a number: milliseconds since the Unix epoch
//! - `"[2020, 2, 11]"`: year, zero-based month, day, hours, minutes, seconds and
//!   milliseconds; trailing components may be left out
//! - an RFC 3339 timestamp, an ISO date or date-time, or `"March 11, 2020 03:24:00"`
//!
//! All times are UTC.

use crate::domain::{IntlError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];

/// Reads a helper argument as a point in time.
///
/// # Examples
///
/// ```
/// use intlcfg::adapters::arguments::parse_date;
/// use serde_json::json;
///
/// let date = parse_date(Some(&json!("[1995, 11, 17]"))).unwrap();
/// assert_eq!(date.to_rfc3339(), "1995-12-17T00:00:00+00:00");
///
/// assert!(parse_date(Some(&json!("someStrangeString"))).is_err());
/// ```
pub fn parse_date(value: Option<&Value>) -> Result<DateTime<Utc>> {
    match value {
        None | Some(Value::Null) => Ok(Utc::now()),
        Some(Value::Number(n)) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64));
            millis
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                .ok_or_else(|| invalid_date(&n.to_string()))
        }
        Some(Value::String(s)) => parse_date_str(s),
        Some(other) => Err(invalid_date(&other.to_string())),
    }
}

fn parse_date_str(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("now") || trimmed.eq_ignore_ascii_case("today") {
        return Ok(Utc::now());
    }

    if let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return parse_components(inner).ok_or_else(|| invalid_date(input));
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| invalid_date(input))
}

fn parse_components(inner: &str) -> Option<DateTime<Utc>> {
    let parts = inner
        .split(',')
        .map(|part| part.trim().parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;
    if parts.is_empty() || parts.len() > 7 {
        return None;
    }

    let part = |index: usize, default: i64| parts.get(index).copied().unwrap_or(default);
    let year = i32::try_from(part(0, 1970)).ok()?;
    let month = part(1, 0)
        .checked_add(1)
        .and_then(|month| u32::try_from(month).ok())?;
    let day = u32::try_from(part(2, 1)).ok()?;
    let hour = u32::try_from(part(3, 0)).ok()?;
    let minute = u32::try_from(part(4, 0)).ok()?;
    let second = u32::try_from(part(5, 0)).ok()?;
    let milli = u32::try_from(part(6, 0)).ok()?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_milli_opt(hour, minute, second, milli)?;
    Some(Utc.from_utc_datetime(&naive))
}

fn invalid_date(input: &str) -> IntlError {
    IntlError::InvalidDate {
        input: input.to_string(),
    }
}

/// Reads a helper argument as a number.
///
/// Numbers and numeric strings are accepted.
///
/// # Examples
///
/// ```
/// use intlcfg::adapters::arguments::parse_number;
/// use serde_json::json;
///
/// assert_eq!(parse_number(Some(&json!("4999.99"))).unwrap(), 4999.99);
/// assert!(parse_number(Some(&json!("lots"))).is_err());
/// ```
pub fn parse_number(value: Option<&Value>) -> Result<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| invalid_number(&n.to_string())),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| invalid_number(s)),
        Some(other) => Err(invalid_number(&other.to_string())),
        None => Err(invalid_number("undefined")),
    }
}

fn invalid_number(input: &str) -> IntlError {
    IntlError::InvalidNumber {
        input: input.to_string(),
    }
}
