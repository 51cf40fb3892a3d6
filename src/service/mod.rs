// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the formatting configuration service implementations.
//!
//! This module contains the concrete implementations of the `FormatConfigService`
//! trait, which provides the main interface for configuring and resolving formats.

pub mod default_service;

// Re-export commonly used types
pub use default_service::{DefaultFormatConfig, FormatConfigBuilder, SharedFormatConfig};
