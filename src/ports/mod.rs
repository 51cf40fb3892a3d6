// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the collaborators this
//! crate talks to: configuration file parsers, the translation engine, and the
//! locale-aware formatting primitives. They are implemented by adapters or by the
//! host application.

#[cfg(feature = "helpers")]
pub mod formatter;
pub mod parser;
pub mod translator;

// Re-export commonly used types
#[cfg(feature = "helpers")]
pub use formatter::LocaleFormatter;
pub use parser::ConfigParser;
pub use translator::Translator;
