// SPDX-License-Identifier: MIT OR Apache-2.0

//! The layered configuration store.
//!
//! For every [`FormatKind`] the store keeps one standard layer and any number of
//! named custom layers. Each layer maps languages to options objects and may hold
//! one entry for all languages.

use crate::domain::{ConfigEntry, CustomFormatName, FormatKind, FormatOptions, LanguageSelector};
use once_cell::sync::Lazy;
use serde_json::json;
use std::collections::HashMap;

/// The built-in configuration every store starts from and resets to.
static DEFAULT_STORE: Lazy<ConfigStore> = Lazy::new(|| {
    let mut store = ConfigStore::empty();
    store
        .kind_mut(FormatKind::Price)
        .standard
        .insert(LanguageSelector::AllLanguages, options(json!({ "style": "currency", "currency": "EUR" })));
    store
        .kind_mut(FormatKind::RelativeTime)
        .standard
        .insert(LanguageSelector::AllLanguages, options(json!({ "unit": "hour" })));
    store
});

fn options(value: serde_json::Value) -> FormatOptions {
    match value {
        serde_json::Value::Object(map) => FormatOptions::from(map),
        _ => FormatOptions::new(),
    }
}

/// Options per language, plus an optional entry for all languages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageTable {
    by_language: HashMap<String, FormatOptions>,
    all: Option<FormatOptions>,
}

impl LanguageTable {
    /// Stores options for a selector, replacing any previous value.
    pub fn insert(&mut self, language: LanguageSelector, options: FormatOptions) {
        match language {
            LanguageSelector::Specific(tag) => {
                self.by_language.insert(tag.into_string(), options);
            }
            LanguageSelector::AllLanguages => self.all = Some(options),
        }
    }

    /// Returns the options stored for exactly this language.
    pub fn language(&self, language: &str) -> Option<&FormatOptions> {
        self.by_language.get(language)
    }

    /// Returns the options stored for all languages.
    pub fn all(&self) -> Option<&FormatOptions> {
        self.all.as_ref()
    }

    /// Returns the options stored for a selector.
    pub fn get(&self, language: &LanguageSelector) -> Option<&FormatOptions> {
        match language {
            LanguageSelector::Specific(tag) => self.language(tag.as_str()),
            LanguageSelector::AllLanguages => self.all(),
        }
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty() && self.all.is_none()
    }
}

/// The standard and custom layers of one format kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KindConfig {
    /// Options used when no custom format applies.
    pub standard: LanguageTable,
    /// Named alternative option sets.
    pub custom: HashMap<CustomFormatName, LanguageTable>,
}

/// Layered formatting configuration for all format kinds.
///
/// `ConfigStore::default()` is the built-in snapshot: prices default to euros in
/// currency style and relative times to hours. [`ConfigStore::empty`] has no entries
/// at all.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::{ConfigArgs, ConfigStore, FormatKind, LanguageSelector, validate};
/// use serde_json::json;
///
/// let mut store = ConfigStore::default();
/// store.set(validate(ConfigArgs::new("en", "PriceFormat", json!({ "currency": "USD" }))).unwrap());
///
/// let en = "en".parse().unwrap();
/// assert!(store.standard(FormatKind::Price, &en).is_some());
/// assert!(store.standard(FormatKind::Price, &LanguageSelector::AllLanguages).is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigStore {
    kinds: HashMap<FormatKind, KindConfig>,
}

impl ConfigStore {
    /// Creates a store without any entries.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Creates a fresh copy of the built-in snapshot.
    pub fn defaults() -> Self {
        DEFAULT_STORE.clone()
    }

    /// Stores a validated entry.
    ///
    /// Custom format buckets are created on first use. A later entry for the same
    /// kind, layer and language replaces the earlier one.
    pub fn set(&mut self, entry: ConfigEntry) {
        let ConfigEntry {
            language,
            kind,
            options,
            custom_format,
        } = entry;

        let config = self.kind_mut(kind);
        match custom_format {
            Some(name) => config.custom.entry(name).or_default().insert(language, options),
            None => config.standard.insert(language, options),
        }
    }

    /// Restores the built-in snapshot.
    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    /// Returns the layers of a format kind, if any entry was ever stored for it.
    pub fn kind(&self, kind: FormatKind) -> Option<&KindConfig> {
        self.kinds.get(&kind)
    }

    fn kind_mut(&mut self, kind: FormatKind) -> &mut KindConfig {
        self.kinds.entry(kind).or_default()
    }

    /// Returns the standard options of a kind for a selector.
    pub fn standard(&self, kind: FormatKind, language: &LanguageSelector) -> Option<&FormatOptions> {
        self.kind(kind)?.standard.get(language)
    }

    /// Returns the options of a custom format for a selector.
    pub fn custom(
        &self,
        kind: FormatKind,
        name: &str,
        language: &LanguageSelector,
    ) -> Option<&FormatOptions> {
        self.kind(kind)?.custom.get(name)?.get(language)
    }

    /// Returns `true` if a custom format with this name exists for the kind.
    pub fn has_custom_format(&self, kind: FormatKind, name: &str) -> bool {
        self.kind(kind)
            .is_some_and(|config| config.custom.contains_key(name))
    }

    /// Returns the names of all custom formats of a kind, sorted.
    pub fn custom_format_names(&self, kind: FormatKind) -> Vec<&CustomFormatName> {
        let mut names: Vec<_> = self
            .kind(kind)
            .map(|config| config.custom.keys().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::defaults()
    }
}
