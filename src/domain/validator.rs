// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation of configuration requests.
//!
//! A configuration request arrives as loosely typed [`ConfigArgs`] (from code, or
//! from a configuration file) and leaves as a [`ConfigEntry`] whose fields can only
//! hold valid values. [`validate`] is the only way from one to the other.

use crate::domain::errors::{IntlError, Result};
use crate::domain::{CustomFormatName, FormatKind, FormatOptions, LanguageSelector};
use serde::Deserialize;
use serde_json::Value;

/// An unvalidated configuration request.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::ConfigArgs;
/// use serde_json::json;
///
/// let args = ConfigArgs::from(("en", "DateTimeFormat", json!({ "year": "2-digit" }), "short-year"));
/// assert_eq!(args.custom_format.as_deref(), Some("short-year"));
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConfigArgs {
    /// Language code, or `"all"`.
    pub language: String,
    /// External format kind name, e.g. `"PriceFormat"`.
    pub kind: String,
    /// Options object for the formatter.
    #[serde(default)]
    pub options: Value,
    /// Optional custom format name.
    #[serde(default, rename = "format", alias = "custom_format")]
    pub custom_format: Option<String>,
}

impl ConfigArgs {
    /// Creates a request for the standard configuration.
    pub fn new(language: impl Into<String>, kind: impl Into<String>, options: Value) -> Self {
        Self {
            language: language.into(),
            kind: kind.into(),
            options,
            custom_format: None,
        }
    }

    /// Targets a custom format instead of the standard configuration.
    pub fn with_custom_format(mut self, name: impl Into<String>) -> Self {
        self.custom_format = Some(name.into());
        self
    }
}

impl<L: Into<String>, K: Into<String>> From<(L, K, Value)> for ConfigArgs {
    fn from((language, kind, options): (L, K, Value)) -> Self {
        ConfigArgs::new(language, kind, options)
    }
}

impl<L: Into<String>, K: Into<String>, C: Into<String>> From<(L, K, Value, C)> for ConfigArgs {
    fn from((language, kind, options, custom): (L, K, Value, C)) -> Self {
        ConfigArgs::new(language, kind, options).with_custom_format(custom)
    }
}

/// A validated configuration entry, ready to be stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigEntry {
    /// Which language the options apply to.
    pub language: LanguageSelector,
    /// Which format kind the options apply to.
    pub kind: FormatKind,
    /// The options object.
    pub options: FormatOptions,
    /// The custom format, or `None` for the standard configuration.
    pub custom_format: Option<CustomFormatName>,
}

impl ConfigEntry {
    /// Creates an entry for the standard configuration.
    pub fn standard(language: LanguageSelector, kind: FormatKind, options: FormatOptions) -> Self {
        Self {
            language,
            kind,
            options,
            custom_format: None,
        }
    }

    /// Creates an entry for a custom format.
    pub fn custom(
        language: LanguageSelector,
        kind: FormatKind,
        options: FormatOptions,
        name: CustomFormatName,
    ) -> Self {
        Self {
            language,
            kind,
            options,
            custom_format: Some(name),
        }
    }
}

impl TryFrom<ConfigArgs> for ConfigEntry {
    type Error = IntlError;

    fn try_from(args: ConfigArgs) -> Result<Self> {
        validate(args)
    }
}

/// Validates a configuration request.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the language code is not empty or blank
/// 2. the format kind is supported
/// 3. the options are an object
/// 4. a given custom format name is not empty, blank, or `"standard"`
///
/// # Examples
///
/// ```
/// use intlcfg::domain::{validate, ConfigArgs, FormatKind, IntlError};
/// use serde_json::json;
///
/// let entry = validate(ConfigArgs::new("en", "PriceFormat", json!({ "currency": "USD" }))).unwrap();
/// assert_eq!(entry.kind, FormatKind::Price);
///
/// let err = validate(ConfigArgs::new("en", "BadKind", json!({}))).unwrap_err();
/// assert!(matches!(err, IntlError::UnsupportedFormatKind { .. }));
/// ```
pub fn validate(args: ConfigArgs) -> Result<ConfigEntry> {
    let ConfigArgs {
        language,
        kind,
        options,
        custom_format,
    } = args;

    let language: LanguageSelector = language.parse()?;
    let kind: FormatKind = kind.parse()?;
    let options = FormatOptions::try_from(options)?;
    let custom_format = custom_format.map(CustomFormatName::new).transpose()?;

    Ok(ConfigEntry {
        language,
        kind,
        options,
        custom_format,
    })
}
