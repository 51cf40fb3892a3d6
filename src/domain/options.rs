// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatter options objects.
//!
//! This module provides `FormatOptions`, the mapping of formatter option names to
//! values that is stored per language and handed to the formatting primitives. The
//! contents are opaque to the resolver, with two exceptions: the reserved `format`
//! and `unit` attributes, and the currency style default for prices.

use crate::domain::errors::{IntlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-call attribute naming a custom format.
pub const FORMAT_KEY: &str = "format";

/// Per-call attribute naming the relative time unit.
pub const UNIT_KEY: &str = "unit";

const STYLE_KEY: &str = "style";
const CURRENCY_KEY: &str = "currency";
const CURRENCY_STYLE: &str = "currency";

/// An options object for a formatting primitive.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::FormatOptions;
/// use serde_json::json;
///
/// let options = FormatOptions::try_from(json!({ "minimumFractionDigits": 2 })).unwrap();
/// assert_eq!(options.get("minimumFractionDigits"), Some(&json!(2)));
///
/// assert!(FormatOptions::try_from(json!(12)).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatOptions(Map<String, Value>);

impl FormatOptions {
    /// Creates an empty options object.
    pub fn new() -> Self {
        FormatOptions(Map::new())
    }

    /// Returns `true` if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the value of an option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the option is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets an option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style variant of [`FormatOptions::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes an option and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Iterates over the options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the custom format name requested through the `format` attribute.
    ///
    /// Only string values name a custom format.
    pub fn custom_format(&self) -> Option<&str> {
        self.0.get(FORMAT_KEY).and_then(Value::as_str)
    }

    /// Returns `true` if the object carries formatting attributes of its own.
    ///
    /// An object that is empty, or whose only purpose is a `format` redirection,
    /// carries no inline options.
    pub fn has_inline_options(&self) -> bool {
        !self.0.is_empty() && !self.0.contains_key(FORMAT_KEY)
    }

    /// Removes the `unit` attribute and returns it as a string.
    pub fn take_unit(&mut self) -> Option<String> {
        match self.0.remove(UNIT_KEY)? {
            Value::String(unit) => Some(unit),
            other => Some(other.to_string()),
        }
    }

    /// Adds `style: "currency"` when a currency is set without a style.
    pub fn apply_currency_style(&mut self) {
        let has_currency = self.0.get(CURRENCY_KEY).is_some_and(Value::is_string);
        let has_style = self.0.get(STYLE_KEY).is_some_and(Value::is_string);
        if has_currency && !has_style {
            self.0
                .insert(STYLE_KEY.to_string(), Value::from(CURRENCY_STYLE));
        }
    }

    /// Returns a reference to the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts the options into the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for FormatOptions {
    fn from(map: Map<String, Value>) -> Self {
        FormatOptions(map)
    }
}

impl From<FormatOptions> for Value {
    fn from(options: FormatOptions) -> Self {
        Value::Object(options.0)
    }
}

impl TryFrom<Value> for FormatOptions {
    type Error = IntlError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(FormatOptions(map)),
            other => Err(IntlError::OptionsNotObject {
                found: describe(&other),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FormatOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormatOptions(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Array(_) => "array".to_string(),
        other => other.to_string(),
    }
}
