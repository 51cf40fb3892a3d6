// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer connecting the format configuration to the outside world.
//!
//! The YAML adapter reads configuration requests from files. The template helper
//! adapter exposes the resolver to Handlebars templates through the ports defined
//! in the ports layer.

#[cfg(feature = "helpers")]
pub mod arguments;
#[cfg(feature = "helpers")]
pub mod template_helpers;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "helpers")]
pub use arguments::{parse_date, parse_number};
#[cfg(feature = "helpers")]
pub use template_helpers::register_helpers;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
