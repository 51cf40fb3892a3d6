// SPDX-License-Identifier: MIT OR Apache-2.0

//! Language tags and the selector used as configuration key.
//!
//! This module provides the `LanguageTag` newtype and the `LanguageSelector` key type.
//! The selector replaces the reserved `"all"` string with an explicit variant, so a
//! literal language tag can never collide with the all-languages fallback.

use crate::domain::errors::{IntlError, Result};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// The reserved language code that selects the all-languages fallback.
pub const ALL_LANGUAGES: &str = "all";

/// A language identifier such as `"en"` or `"de-DE"`.
///
/// Tags are compared exactly; `"de"` and `"de-DE"` are different languages.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::LanguageTag;
///
/// let tag = LanguageTag::new("de-DE").unwrap();
/// assert_eq!(tag.as_str(), "de-DE");
/// assert!(LanguageTag::new("  ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Creates a new `LanguageTag`, rejecting empty or blank codes.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(IntlError::InvalidLanguage { language: tag });
        }
        Ok(LanguageTag(tag))
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the tag into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for LanguageTag {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self> {
        LanguageTag::new(s)
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The language key of a configuration entry.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::LanguageSelector;
///
/// let all: LanguageSelector = "all".parse().unwrap();
/// assert!(all.is_all());
///
/// let en: LanguageSelector = "en".parse().unwrap();
/// assert_eq!(en.to_string(), "en");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LanguageSelector {
    /// A single language.
    Specific(LanguageTag),
    /// Every language without an entry of its own.
    AllLanguages,
}

impl LanguageSelector {
    /// Returns `true` for the all-languages selector.
    pub fn is_all(&self) -> bool {
        matches!(self, LanguageSelector::AllLanguages)
    }

    /// Returns the language tag of a specific selector.
    pub fn tag(&self) -> Option<&LanguageTag> {
        match self {
            LanguageSelector::Specific(tag) => Some(tag),
            LanguageSelector::AllLanguages => None,
        }
    }
}

impl FromStr for LanguageSelector {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL_LANGUAGES {
            Ok(LanguageSelector::AllLanguages)
        } else {
            LanguageTag::new(s).map(LanguageSelector::Specific)
        }
    }
}

impl From<LanguageTag> for LanguageSelector {
    fn from(tag: LanguageTag) -> Self {
        LanguageSelector::Specific(tag)
    }
}

impl fmt::Display for LanguageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageSelector::Specific(tag) => write!(f, "{}", tag),
            LanguageSelector::AllLanguages => f.write_str(ALL_LANGUAGES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_language_tag_new() {
        let tag = LanguageTag::new("en").unwrap();
        assert_eq!(tag.as_str(), "en");
        assert_eq!(tag.into_string(), "en");
    }

    #[test]
    fn test_language_tag_rejects_empty() {
        assert!(matches!(
            LanguageTag::new(""),
            Err(IntlError::InvalidLanguage { .. })
        ));
        assert!(LanguageTag::new(" \t").is_err());
    }

    #[test]
    fn test_language_tag_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(LanguageTag::new("fr").unwrap(), 1);
        assert_eq!(map.get("fr"), Some(&1));
        assert_eq!(map.get("fr-CA"), None);
    }

    #[test]
    fn test_selector_parses_all() {
        assert_eq!(
            "all".parse::<LanguageSelector>().unwrap(),
            LanguageSelector::AllLanguages
        );
    }

    #[test]
    fn test_selector_all_is_case_sensitive() {
        let selector = "ALL".parse::<LanguageSelector>().unwrap();
        assert_eq!(selector.tag().map(LanguageTag::as_str), Some("ALL"));
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(LanguageSelector::AllLanguages.to_string(), "all");
        let en: LanguageSelector = "en".parse().unwrap();
        assert_eq!(en.to_string(), "en");
        assert!(!en.is_all());
    }
}
