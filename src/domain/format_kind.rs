// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of formatting concerns.

use crate::domain::errors::{IntlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category of formatting concern.
///
/// Each kind maps to exactly one formatting primitive and owns its own layer of
/// standard and custom configuration.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::FormatKind;
///
/// let kind: FormatKind = "PriceFormat".parse().unwrap();
/// assert_eq!(kind, FormatKind::Price);
/// assert_eq!(kind.as_str(), "PriceFormat");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormatKind {
    /// Absolute dates and times.
    #[serde(rename = "DateTimeFormat")]
    DateTime,
    /// Relative times such as "in 3 days".
    #[serde(rename = "RelativeTimeFormat")]
    RelativeTime,
    /// Plain numbers.
    #[serde(rename = "NumberFormat")]
    Number,
    /// Currency amounts.
    #[serde(rename = "PriceFormat")]
    Price,
}

impl FormatKind {
    /// All kinds, in declaration order.
    pub const ALL: [FormatKind; 4] = [
        FormatKind::DateTime,
        FormatKind::RelativeTime,
        FormatKind::Number,
        FormatKind::Price,
    ];

    /// Returns the external name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::DateTime => "DateTimeFormat",
            FormatKind::RelativeTime => "RelativeTimeFormat",
            FormatKind::Number => "NumberFormat",
            FormatKind::Price => "PriceFormat",
        }
    }
}

impl FromStr for FormatKind {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self> {
        FormatKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| IntlError::UnsupportedFormatKind {
                kind: s.to_string(),
            })
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
