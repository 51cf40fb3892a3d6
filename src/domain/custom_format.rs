// SPDX-License-Identifier: MIT OR Apache-2.0

//! Names of custom format configurations.

use crate::domain::errors::{IntlError, Result};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Reserved word that can never name a custom format.
pub const RESERVED_FORMAT_NAME: &str = "standard";

/// The name of a custom format, selected per call with a `format` attribute.
///
/// A name is never empty, never whitespace-only and never `"standard"`.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::CustomFormatName;
///
/// let name = CustomFormatName::new("short-year").unwrap();
/// assert_eq!(name.as_str(), "short-year");
///
/// assert!(CustomFormatName::new("standard").is_err());
/// assert!(CustomFormatName::new(" ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomFormatName(String);

impl CustomFormatName {
    /// Creates a new `CustomFormatName`, rejecting empty, blank and reserved names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() || name == RESERVED_FORMAT_NAME {
            return Err(IntlError::InvalidCustomFormat { name });
        }
        Ok(CustomFormatName(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CustomFormatName {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self> {
        CustomFormatName::new(s)
    }
}

impl Borrow<str> for CustomFormatName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomFormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
