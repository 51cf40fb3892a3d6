// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the formatting configuration crate.
//!
//! This module defines the errors raised while validating configuration requests,
//! loading configuration files, and handing values to the formatting primitives.
//! All errors use `thiserror` for proper error handling and conversion.

use thiserror::Error;

/// The main error type for formatting configuration operations.
///
/// The first five variants are configuration errors: they are produced by the
/// validator and never reach the configuration store. The remaining variants come
/// from the helper layer and the configuration file adapters. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking backwards
/// compatibility.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::errors::IntlError;
///
/// fn lookup_kind(kind: &str) -> Result<(), IntlError> {
///     Err(IntlError::UnsupportedFormatKind {
///         kind: kind.to_string(),
///     })
/// }
///
/// assert!(lookup_kind("BadKind").unwrap_err().is_configuration_error());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntlError {
    /// The language code was empty or blank.
    #[error("Invalid language code <{language}>: language code must be a string such as \"en\" or \"all\"")]
    InvalidLanguage {
        /// The rejected language code
        language: String,
    },

    /// The format kind is not one of the supported kinds.
    #[error("Unsupported format kind <{kind}>: use DateTimeFormat, RelativeTimeFormat, NumberFormat or PriceFormat")]
    UnsupportedFormatKind {
        /// The rejected kind
        kind: String,
    },

    /// The configuration parameters were not an object.
    #[error("Invalid options <{found}>: configuration parameters must be an object")]
    OptionsNotObject {
        /// A short description of what was given instead
        found: String,
    },

    /// The custom format name was empty, blank, or reserved.
    #[error("Invalid custom format name <{name}>: the name must not be empty or the reserved word \"standard\"")]
    InvalidCustomFormat {
        /// The rejected name
        name: String,
    },

    /// A batch configuration request contained no entries.
    #[error("Empty configuration batch: no parameters taken")]
    EmptyBatch,

    /// A helper argument could not be read as a date.
    #[error("Invalid date passed to format: {input}")]
    InvalidDate {
        /// The rejected input
        input: String,
    },

    /// A helper argument could not be read as a number.
    #[error("Invalid number passed to format: {input}")]
    InvalidNumber {
        /// The rejected input
        input: String,
    },

    /// The relative time unit is not one of the supported units.
    #[error("Invalid time unit <{unit}>: use second, minute, hour, day, week, month, quarter or year")]
    InvalidTimeUnit {
        /// The rejected unit
        unit: String,
    },

    /// The formatting primitive refused the value or options.
    #[error("Formatting failed: {message}")]
    FormattingError {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration file.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred while reading a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IntlError {
    /// Returns `true` for errors raised by configuration validation.
    ///
    /// Configuration errors are recoverable: the offending request is dropped and
    /// the configuration store stays untouched.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            IntlError::InvalidLanguage { .. }
                | IntlError::UnsupportedFormatKind { .. }
                | IntlError::OptionsNotObject { .. }
                | IntlError::InvalidCustomFormat { .. }
                | IntlError::EmptyBatch
        )
    }

    /// Creates a FormattingError from any error raised by a formatting primitive.
    pub fn formatting<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        IntlError::FormattingError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for formatting configuration operations.
pub type Result<T> = std::result::Result<T, IntlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_language_error() {
        let error = IntlError::InvalidLanguage {
            language: String::new(),
        };
        assert!(error.to_string().contains("language code must be a string"));
        assert!(error.is_configuration_error());
    }

    #[test]
    fn test_unsupported_format_kind_error() {
        let error = IntlError::UnsupportedFormatKind {
            kind: "BadKind".to_string(),
        };
        assert!(error.to_string().contains("<BadKind>"));
        assert!(error.is_configuration_error());
    }

    #[test]
    fn test_options_not_object_error() {
        let error = IntlError::OptionsNotObject {
            found: "12".to_string(),
        };
        assert!(error.to_string().contains("must be an object"));
        assert!(error.is_configuration_error());
    }

    #[test]
    fn test_invalid_custom_format_error() {
        let error = IntlError::InvalidCustomFormat {
            name: "standard".to_string(),
        };
        assert!(error.to_string().contains("reserved word"));
        assert!(error.is_configuration_error());
    }

    #[test]
    fn test_empty_batch_error() {
        assert_eq!(
            IntlError::EmptyBatch.to_string(),
            "Empty configuration batch: no parameters taken"
        );
        assert!(IntlError::EmptyBatch.is_configuration_error());
    }

    #[test]
    fn test_invalid_date_is_not_configuration_error() {
        let error = IntlError::InvalidDate {
            input: "someStrangeString".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date passed to format: someStrangeString"
        );
        assert!(!error.is_configuration_error());
    }

    #[test]
    fn test_formatting_from_source() {
        let source = "abc".parse::<f64>().unwrap_err();
        let error = IntlError::formatting(source);
        assert!(matches!(error, IntlError::FormattingError { .. }));
        assert!(error.to_string().starts_with("Formatting failed:"));
    }

    #[test]
    fn test_source_error() {
        let error = IntlError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "Failed to read".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'yaml-file' error: Failed to read"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = IntlError::from(io_error);
        assert!(matches!(error, IntlError::IoError(_)));
    }
}
