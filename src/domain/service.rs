// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting configuration service trait definition.
//!
//! This module defines the `FormatConfigService` trait, the interface template
//! helpers use to configure formats and to resolve the options of a single call.

use crate::domain::{ConfigArgs, ConfigStore, FormatKind, FormatOptions, LanguageTag};

/// The main formatting configuration trait.
///
/// Configuration calls never fail loudly: a rejected request is reported through
/// `tracing`, `false` is returned, and the store is left untouched. Resolution
/// never fails at all.
///
/// # Examples
///
/// ```rust
/// use intlcfg::domain::{ConfigArgs, FormatConfigService, FormatKind, FormatOptions};
/// use intlcfg::service::DefaultFormatConfig;
/// use serde_json::json;
///
/// let mut config = DefaultFormatConfig::new();
/// assert!(config.configure(ConfigArgs::new("all", "NumberFormat", json!({ "minimumFractionDigits": 2 }))));
///
/// let fr = "fr".parse().unwrap();
/// let options = config.resolve(FormatKind::Number, Some(&fr), &FormatOptions::new());
/// assert_eq!(options.get("minimumFractionDigits"), Some(&json!(2)));
/// ```
pub trait FormatConfigService {
    /// Validates and stores a single configuration request.
    ///
    /// # Returns
    ///
    /// `true` if the request was stored, `false` if it was rejected
    fn configure(&mut self, args: ConfigArgs) -> bool;

    /// Validates and stores an ordered batch of configuration requests.
    ///
    /// Entries are applied in order, so a later entry replaces an earlier one for
    /// the same kind, layer and language. The batch is applied only if every entry
    /// is valid; an empty batch is rejected.
    ///
    /// # Returns
    ///
    /// `true` if the whole batch was stored, `false` if nothing was stored
    fn configure_batch(&mut self, batch: Vec<ConfigArgs>) -> bool;

    /// Restores the built-in configuration.
    ///
    /// # Returns
    ///
    /// Always `true`
    fn reset(&mut self) -> bool;

    /// Resolves the options object for one formatting call.
    ///
    /// # Arguments
    ///
    /// * `kind` - The format kind of the helper
    /// * `language` - The current language, if set
    /// * `attributes` - The per-call attributes
    fn resolve(
        &self,
        kind: FormatKind,
        language: Option<&LanguageTag>,
        attributes: &FormatOptions,
    ) -> FormatOptions;

    /// Returns the current configuration store.
    fn store(&self) -> &ConfigStore;
}
