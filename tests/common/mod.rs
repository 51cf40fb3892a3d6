// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for the integration tests.

#![allow(dead_code)]

use intlcfg::domain::{FormatOptions, LanguageTag};
use intlcfg::ports::Translator;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Once, RwLock};

static TRACING: Once = Once::new();

/// Routes log output through the test harness so it shows up for failing tests.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

pub fn tag(tag: &str) -> LanguageTag {
    LanguageTag::new(tag).unwrap()
}

pub fn options(value: Value) -> FormatOptions {
    FormatOptions::try_from(value).unwrap()
}

/// Renders options as sorted `key:value` pairs.
pub fn describe(options: &FormatOptions) -> String {
    let mut pairs: Vec<String> = options
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}:{}", key, s),
            other => format!("{}:{}", key, other),
        })
        .collect();
    pairs.sort();
    pairs.join(",")
}

/// An in-memory translation engine with a switchable language.
///
/// Messages interpolate `{{name}}` placeholders from the helper's hash.
pub struct CatalogTranslator {
    language: RwLock<Option<LanguageTag>>,
    messages: HashMap<(String, String), String>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self {
            language: RwLock::new(None),
            messages: HashMap::new(),
        }
    }

    pub fn with_message(mut self, language: &str, key: &str, message: &str) -> Self {
        self.messages
            .insert((language.to_string(), key.to_string()), message.to_string());
        self
    }

    pub fn set_language(&self, language: &str) {
        *self.language.write().unwrap() = Some(tag(language));
    }
}

impl Translator for CatalogTranslator {
    fn language(&self) -> Option<LanguageTag> {
        self.language.read().unwrap().clone()
    }

    fn translate(&self, key: &str, args: &Map<String, Value>) -> String {
        let Some(language) = self.language() else {
            return key.to_string();
        };
        let Some(message) = self
            .messages
            .get(&(language.as_str().to_string(), key.to_string()))
        else {
            return key.to_string();
        };

        args.iter().fold(message.clone(), |text, (name, value)| {
            let replacement = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            text.replace(&format!("{{{{{}}}}}", name), &replacement)
        })
    }
}

#[cfg(feature = "helpers")]
pub use formatter::EchoFormatter;

#[cfg(feature = "helpers")]
mod formatter {
    use super::describe;
    use chrono::{DateTime, Utc};
    use intlcfg::domain::{FormatOptions, IntlError, LanguageTag, Result, TimeUnit};
    use intlcfg::ports::LocaleFormatter;

    /// Formats values as `language|value|options` so tests can check what the
    /// helpers handed to the formatting backend.
    pub struct EchoFormatter;

    fn lang(language: Option<&LanguageTag>) -> &str {
        language.map_or("-", LanguageTag::as_str)
    }

    impl LocaleFormatter for EchoFormatter {
        fn format_date(
            &self,
            language: Option<&LanguageTag>,
            date: &DateTime<Utc>,
            options: &FormatOptions,
        ) -> Result<String> {
            Ok(format!(
                "{}|{}|{}",
                lang(language),
                date.format("%Y-%m-%dT%H:%M:%S"),
                describe(options)
            ))
        }

        fn format_relative(
            &self,
            language: Option<&LanguageTag>,
            value: f64,
            unit: TimeUnit,
            options: &FormatOptions,
        ) -> Result<String> {
            Ok(format!(
                "{}|{} {}|{}",
                lang(language),
                value,
                unit,
                describe(options)
            ))
        }

        fn format_number(
            &self,
            language: Option<&LanguageTag>,
            number: f64,
            options: &FormatOptions,
        ) -> Result<String> {
            if !number.is_finite() {
                return Err(IntlError::FormattingError {
                    message: "number out of range".to_string(),
                    source: None,
                });
            }
            Ok(format!("{}|{}|{}", lang(language), number, describe(options)))
        }
    }
}
