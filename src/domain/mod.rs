// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the configuration store, the validator, and the resolver.
//! It is independent of any template engine or formatting backend and defines the
//! fundamental concepts used throughout the library.

pub mod custom_format;
pub mod errors;
pub mod format_kind;
pub mod language;
pub mod options;
pub mod resolver;
pub mod service;
pub mod store;
pub mod time_unit;
pub mod validator;

// Re-export commonly used types
pub use custom_format::CustomFormatName;
pub use errors::{IntlError, Result};
pub use format_kind::FormatKind;
pub use language::{LanguageSelector, LanguageTag};
pub use options::FormatOptions;
pub use resolver::{resolve, LookupStep, ResolutionRequest, PRECEDENCE};
pub use service::FormatConfigService;
pub use store::{ConfigStore, KindConfig, LanguageTable};
pub use time_unit::TimeUnit;
pub use validator::{validate, ConfigArgs, ConfigEntry};
