// SPDX-License-Identifier: MIT OR Apache-2.0

//! Granularity buckets for relative time formatting.

use crate::domain::errors::{IntlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit a relative time is expressed in.
///
/// Months, quarters and years use the average Gregorian lengths.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::TimeUnit;
///
/// let unit: TimeUnit = "days".parse().unwrap();
/// assert_eq!(unit, TimeUnit::Day);
/// assert_eq!(unit.magnitude(172_800_000), 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// 1 000 ms
    Second,
    /// 60 000 ms
    Minute,
    /// 3 600 000 ms
    #[default]
    Hour,
    /// 86 400 000 ms
    Day,
    /// 604 800 000 ms
    Week,
    /// 2 629 746 000 ms
    Month,
    /// 7 889 238 000 ms
    Quarter,
    /// 31 556 952 000 ms
    Year,
}

impl TimeUnit {
    /// Returns the singular unit name used by relative time formatters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Year => "year",
        }
    }

    /// Returns the length of one unit in milliseconds.
    pub fn millis(&self) -> i64 {
        match self {
            TimeUnit::Second => 1_000,
            TimeUnit::Minute => 60_000,
            TimeUnit::Hour => 3_600_000,
            TimeUnit::Day => 86_400_000,
            TimeUnit::Week => 604_800_000,
            TimeUnit::Month => 2_629_746_000,
            TimeUnit::Quarter => 7_889_238_000,
            TimeUnit::Year => 31_556_952_000,
        }
    }

    /// Converts a millisecond difference into a magnitude of this unit.
    pub fn magnitude(&self, diff_millis: i64) -> f64 {
        diff_millis as f64 / self.millis() as f64
    }
}

impl FromStr for TimeUnit {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "second" | "seconds" => Ok(TimeUnit::Second),
            "minute" | "minutes" => Ok(TimeUnit::Minute),
            "hour" | "hours" => Ok(TimeUnit::Hour),
            "day" | "days" => Ok(TimeUnit::Day),
            "week" | "weeks" => Ok(TimeUnit::Week),
            "month" | "months" => Ok(TimeUnit::Month),
            "quarter" | "quarters" => Ok(TimeUnit::Quarter),
            "year" | "years" => Ok(TimeUnit::Year),
            _ => Err(IntlError::InvalidTimeUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
