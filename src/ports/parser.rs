// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! parsing format configuration files in different formats (YAML, JSON, etc.).

use crate::domain::{ConfigArgs, Result};

/// A trait for parsing format configuration files.
///
/// A parser turns the raw text of a file into an ordered list of configuration
/// requests. Parsers do not validate the requests; that happens when the list is
/// handed to a configuration service, which applies it as one batch.
///
/// # Entry Format
///
/// Each entry names a language, a format kind, an options object and, optionally,
/// a custom format. In YAML:
///
/// ```yaml
/// - language: all
///   kind: PriceFormat
///   options: { currency: USD }
/// - language: en
///   kind: DateTimeFormat
///   options: { year: 2-digit }
///   format: short-year
/// ```
///
/// # Examples
///
/// ```rust
/// use intlcfg::ports::ConfigParser;
/// use intlcfg::domain::{ConfigArgs, Result};
/// use serde_json::json;
///
/// struct OneLineParser;
///
/// impl ConfigParser for OneLineParser {
///     fn parse(&self, content: &str) -> Result<Vec<ConfigArgs>> {
///         Ok(vec![ConfigArgs::new(content.trim(), "NumberFormat", json!({}))])
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["line"]
///     }
/// }
///
/// let entries = OneLineParser.parse("en\n").unwrap();
/// assert_eq!(entries[0].language, "en");
/// ```
pub trait ConfigParser {
    /// Parses configuration content into an ordered list of requests.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConfigArgs>)` - The requests, in file order
    /// * `Err(IntlError)` - The content could not be parsed
    fn parse(&self, content: &str) -> Result<Vec<ConfigArgs>>;

    /// Returns the file extensions supported by this parser.
    ///
    /// Extensions are given without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Test implementation of ConfigParser for testing purposes
    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, _content: &str) -> Result<Vec<ConfigArgs>> {
            Ok(vec![
                ConfigArgs::new("all", "NumberFormat", json!({ "minimumFractionDigits": 2 })),
                ConfigArgs::from(("en", "NumberFormat", json!({}), "compact")),
            ])
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse_keeps_order() {
        let result = TestParser.parse("dummy content").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].language, "all");
        assert_eq!(result[1].custom_format.as_deref(), Some("compact"));
    }

    #[test]
    fn test_parser_supported_extensions() {
        let extensions = TestParser.supported_extensions();
        assert_eq!(extensions, &["test", "tst"]);
    }
}
