// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default formatting configuration service implementation.
//!
//! This module provides the default implementation of the `FormatConfigService`
//! trait, which owns a configuration store and resolves the options of each
//! formatting call against it.

use crate::domain::{
    resolve, validate, ConfigArgs, ConfigEntry, ConfigStore, FormatConfigService, FormatKind,
    FormatOptions, IntlError, LanguageTag, ResolutionRequest, Result,
};
use std::sync::{Arc, RwLock};

/// A configuration service shared between threads, e.g. by template helpers.
///
/// Callers take the write lock to configure and the read lock to resolve.
pub type SharedFormatConfig = Arc<RwLock<DefaultFormatConfig>>;

/// Default implementation of the formatting configuration service.
///
/// Each instance owns its own store, so independent configurations can live side
/// by side in one process. A batch is applied all-or-nothing: every entry is
/// validated before the first one is stored.
///
/// # Examples
///
/// ```rust
/// use intlcfg::prelude::*;
/// use serde_json::json;
///
/// let mut config = DefaultFormatConfig::new();
/// config.configure(ConfigArgs::new("en", "PriceFormat", json!({ "currency": "USD" })));
///
/// let en = "en".parse().unwrap();
/// let options = config.resolve(FormatKind::Price, Some(&en), &FormatOptions::new());
/// assert_eq!(options.get("style"), Some(&json!("currency")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DefaultFormatConfig {
    /// The configuration store
    store: ConfigStore,
}

impl DefaultFormatConfig {
    /// Creates a service holding the built-in configuration.
    pub fn new() -> Self {
        Self {
            store: ConfigStore::defaults(),
        }
    }

    /// Creates a service around an existing store.
    pub fn with_store(store: ConfigStore) -> Self {
        Self { store }
    }

    /// Creates a new configuration service builder.
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::new()
    }

    /// Creates a service from the built-in configuration plus the default file.
    ///
    /// The file `formats.yaml` is looked up in the OS-appropriate configuration
    /// directory. If it does not exist, only the built-in configuration is used.
    /// A file that exists but is invalid is an error.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    #[cfg(feature = "yaml")]
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        use crate::adapters::YamlFileAdapter;

        let mut builder = Self::builder();
        match YamlFileAdapter::from_default_location(app_name, qualifier) {
            Ok(adapter) => builder = builder.with_args(adapter.entries().to_vec()),
            Err(e) => tracing::debug!("No default format configuration file: {}", e),
        }
        builder.build()
    }

    /// Validates every request of a batch, logging each rejection.
    fn validate_batch(batch: Vec<ConfigArgs>) -> Option<Vec<ConfigEntry>> {
        let mut entries = Vec::with_capacity(batch.len());
        let mut rejected = false;
        for (index, args) in batch.into_iter().enumerate() {
            match validate(args) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::error!("configure(): batch entry {} rejected: {}", index, e);
                    rejected = true;
                }
            }
        }
        (!rejected).then_some(entries)
    }

    /// Stores a validated entry.
    fn apply(&mut self, entry: ConfigEntry) {
        tracing::debug!(
            language = %entry.language,
            kind = %entry.kind,
            custom_format = ?entry.custom_format.as_ref().map(|name| name.as_str()),
            "format configuration stored"
        );
        self.store.set(entry);
    }

    /// Wraps the service for sharing with template helpers.
    pub fn into_shared(self) -> SharedFormatConfig {
        Arc::new(RwLock::new(self))
    }
}

impl FormatConfigService for DefaultFormatConfig {
    fn configure(&mut self, args: ConfigArgs) -> bool {
        match validate(args) {
            Ok(entry) => {
                self.apply(entry);
                true
            }
            Err(e) => {
                tracing::error!("configure(): {}", e);
                false
            }
        }
    }

    fn configure_batch(&mut self, batch: Vec<ConfigArgs>) -> bool {
        if batch.is_empty() {
            tracing::warn!("configure(): {}", IntlError::EmptyBatch);
            return false;
        }

        match Self::validate_batch(batch) {
            Some(entries) => {
                for entry in entries {
                    self.apply(entry);
                }
                true
            }
            None => false,
        }
    }

    fn reset(&mut self) -> bool {
        self.store.reset();
        tracing::debug!("format configuration reset to defaults");
        true
    }

    fn resolve(
        &self,
        kind: FormatKind,
        language: Option<&LanguageTag>,
        attributes: &FormatOptions,
    ) -> FormatOptions {
        resolve(
            &ResolutionRequest::new(kind, language, attributes),
            &self.store,
        )
    }

    fn store(&self) -> &ConfigStore {
        &self.store
    }
}

/// Builder for constructing a `DefaultFormatConfig`.
///
/// Unlike [`FormatConfigService::configure`], the builder reports invalid
/// requests as errors from [`FormatConfigBuilder::build`].
///
/// # Examples
///
/// ```rust
/// use intlcfg::service::FormatConfigBuilder;
/// use intlcfg::domain::ConfigArgs;
/// use serde_json::json;
///
/// # fn main() -> intlcfg::domain::Result<()> {
/// let config = FormatConfigBuilder::new()
///     .with_args(vec![ConfigArgs::new("all", "NumberFormat", json!({ "useGrouping": false }))])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FormatConfigBuilder {
    args: Vec<ConfigArgs>,
    entries: Vec<ConfigEntry>,
    defaults: bool,
}

impl FormatConfigBuilder {
    /// Creates a new builder starting from the built-in configuration.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            entries: Vec::new(),
            defaults: true,
        }
    }

    /// Starts from an empty store instead of the built-in configuration.
    pub fn without_defaults(mut self) -> Self {
        self.defaults = false;
        self
    }

    /// Adds an already validated entry.
    pub fn with_entry(mut self, entry: ConfigEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Adds unvalidated requests; they are validated by [`FormatConfigBuilder::build`].
    pub fn with_args(mut self, args: Vec<ConfigArgs>) -> Self {
        self.args.extend(args);
        self
    }

    /// Adds every request found in a YAML file.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use intlcfg::service::FormatConfigBuilder;
    ///
    /// # fn main() -> intlcfg::domain::Result<()> {
    /// let config = FormatConfigBuilder::new()
    ///     .with_yaml_file("/etc/myapp/formats.yaml")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::YamlFileAdapter;
        let adapter = YamlFileAdapter::from_file(path)?;
        Ok(self.with_args(adapter.entries().to_vec()))
    }

    /// Builds the configuration service.
    ///
    /// Typed entries are stored first, then the requests in the order they were
    /// added. The first invalid request aborts the build.
    pub fn build(self) -> Result<DefaultFormatConfig> {
        let mut service = if self.defaults {
            DefaultFormatConfig::new()
        } else {
            DefaultFormatConfig::with_store(ConfigStore::empty())
        };

        for entry in self.entries {
            service.apply(entry);
        }
        for args in self.args {
            service.apply(validate(args)?);
        }

        Ok(service)
    }
}

impl Default for FormatConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
