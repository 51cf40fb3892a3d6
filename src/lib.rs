// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for layered Intl formatting configuration.
//!
//! Localized templates format dates, relative times, numbers, and prices through
//! helpers such as `{{_date ...}}` or `{{_price ...}}`. This crate decides which
//! options object each of those calls hands to the formatting primitive. The options
//! come from several layers: inline attributes on the call, named custom formats,
//! a language-specific configuration, and a configuration shared by all languages.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`ConfigStore`, the validator, the resolver, errors)
//! - **Ports**: Trait definitions for collaborators (`ConfigParser`, `Translator`, `LocaleFormatter`)
//! - **Adapters**: YAML configuration files and Handlebars template helpers
//! - **Service**: The configuration service that owns a store and applies requests to it
//!
//! # Resolution Order
//!
//! For a call of kind `K` in language `L`, the first layer that applies wins:
//!
//! 1. inline attributes, when present and not just a `format` name
//! 2. the custom format named by `format`, configured for `L`
//! 3. the standard configuration of `K` for `L`
//! 4. the standard configuration of `K` for all languages
//!
//! Nothing is merged between layers. Price options that name a currency always get
//! `style: "currency"`.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML configuration files (default)
//! - `helpers`: Enable the Handlebars template helpers (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use intlcfg::prelude::*;
//! use serde_json::json;
//!
//! let mut config = DefaultFormatConfig::new();
//! config.configure(ConfigArgs::new("en", "NumberFormat", json!({ "maximumFractionDigits": 2 })));
//! config.configure(
//!     ConfigArgs::new("en", "NumberFormat", json!({ "notation": "compact" })).with_custom_format("short"),
//! );
//!
//! let en: LanguageTag = "en".parse().unwrap();
//! let call = FormatOptions::new().with("format", "short");
//! let options = config.resolve(FormatKind::Number, Some(&en), &call);
//! assert_eq!(options.get("notation"), Some(&json!("compact")));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigArgs, ConfigEntry, ConfigStore, FormatConfigService, FormatKind, FormatOptions,
        IntlError, LanguageSelector, LanguageTag, Result, TimeUnit,
    };
    pub use crate::ports::{ConfigParser, Translator};
    pub use crate::service::{DefaultFormatConfig, FormatConfigBuilder, SharedFormatConfig};

    // Re-export adapters based on feature flags
    #[cfg(feature = "helpers")]
    pub use crate::adapters::register_helpers;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
    #[cfg(feature = "helpers")]
    pub use crate::ports::LocaleFormatter;
}
