// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translation engine trait definition.
//!
//! The translation engine owns the current language and the message catalogs.
//! This crate only asks it which language is active and forwards message lookups.

use crate::domain::LanguageTag;
use serde_json::{Map, Value};

/// A trait for the translation engine behind the template helpers.
///
/// # Examples
///
/// ```rust
/// use intlcfg::domain::LanguageTag;
/// use intlcfg::ports::Translator;
/// use serde_json::{Map, Value};
///
/// struct EchoTranslator;
///
/// impl Translator for EchoTranslator {
///     fn language(&self) -> Option<LanguageTag> {
///         LanguageTag::new("en").ok()
///     }
///
///     fn translate(&self, key: &str, _args: &Map<String, Value>) -> String {
///         key.to_string()
///     }
/// }
///
/// let translator = EchoTranslator;
/// assert!(translator.language_is("en"));
/// assert_eq!(translator.translate("key1", &Map::new()), "key1");
/// ```
pub trait Translator: Send + Sync {
    /// Returns the current language, or `None` before one has been chosen.
    fn language(&self) -> Option<LanguageTag>;

    /// Looks up a message and interpolates the arguments.
    ///
    /// Implementations return the key itself when no message exists.
    fn translate(&self, key: &str, args: &Map<String, Value>) -> String;

    /// Returns `true` if the current language is exactly `language`.
    fn language_is(&self, language: &str) -> bool {
        self.language()
            .is_some_and(|current| current.as_str() == language)
    }
}
