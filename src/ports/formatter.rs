// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locale-aware formatting primitive trait definition.
//!
//! The formatting algorithms live outside this crate. A backend receives the current
//! language, the value, and the resolved options object, and either returns the
//! formatted text or an error that fails the render.

use crate::domain::{FormatOptions, LanguageTag, Result, TimeUnit};
use chrono::{DateTime, Utc};

/// A trait for the date, relative time, and number formatting primitives.
///
/// Prices are formatted through [`LocaleFormatter::format_number`] with currency
/// options; the resolver guarantees `style: "currency"` whenever a currency is set.
///
/// # Examples
///
/// ```rust
/// use intlcfg::domain::{FormatOptions, LanguageTag, Result, TimeUnit};
/// use intlcfg::ports::LocaleFormatter;
/// use chrono::{DateTime, Utc};
///
/// struct PlainFormatter;
///
/// impl LocaleFormatter for PlainFormatter {
///     fn format_date(&self, _: Option<&LanguageTag>, date: &DateTime<Utc>, _: &FormatOptions) -> Result<String> {
///         Ok(date.format("%Y-%m-%d").to_string())
///     }
///
///     fn format_relative(&self, _: Option<&LanguageTag>, value: f64, unit: TimeUnit, _: &FormatOptions) -> Result<String> {
///         Ok(format!("{} {}", value, unit))
///     }
///
///     fn format_number(&self, _: Option<&LanguageTag>, number: f64, _: &FormatOptions) -> Result<String> {
///         Ok(number.to_string())
///     }
/// }
///
/// let text = PlainFormatter.format_number(None, 42.0, &FormatOptions::new()).unwrap();
/// assert_eq!(text, "42");
/// ```
pub trait LocaleFormatter: Send + Sync {
    /// Formats an absolute point in time.
    fn format_date(
        &self,
        language: Option<&LanguageTag>,
        date: &DateTime<Utc>,
        options: &FormatOptions,
    ) -> Result<String>;

    /// Formats a relative time, e.g. `-2` days as "2 days ago".
    ///
    /// The `unit` attribute has already been removed from `options`.
    fn format_relative(
        &self,
        language: Option<&LanguageTag>,
        value: f64,
        unit: TimeUnit,
        options: &FormatOptions,
    ) -> Result<String>;

    /// Formats a plain number or a currency amount.
    fn format_number(
        &self,
        language: Option<&LanguageTag>,
        number: f64,
        options: &FormatOptions,
    ) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IntlError;

    struct StrictFormatter;

    impl LocaleFormatter for StrictFormatter {
        fn format_date(
            &self,
            _language: Option<&LanguageTag>,
            date: &DateTime<Utc>,
            _options: &FormatOptions,
        ) -> Result<String> {
            Ok(date.to_rfc3339())
        }

        fn format_relative(
            &self,
            _language: Option<&LanguageTag>,
            value: f64,
            unit: TimeUnit,
            _options: &FormatOptions,
        ) -> Result<String> {
            Ok(format!("{} {}", value, unit))
        }

        fn format_number(
            &self,
            _language: Option<&LanguageTag>,
            number: f64,
            _options: &FormatOptions,
        ) -> Result<String> {
            if number.is_finite() {
                Ok(number.to_string())
            } else {
                Err(IntlError::FormattingError {
                    message: "invalid numeric magnitude".to_string(),
                    source: None,
                })
            }
        }
    }

    #[test]
    fn test_formatter_errors_surface() {
        let err = StrictFormatter
            .format_number(None, f64::NAN, &FormatOptions::new())
            .unwrap_err();
        assert!(matches!(err, IntlError::FormattingError { .. }));
    }

    #[test]
    fn test_formatter_relative() {
        let text = StrictFormatter
            .format_relative(None, -2.0, TimeUnit::Day, &FormatOptions::new())
            .unwrap();
        assert_eq!(text, "-2 day");
    }

    #[test]
    fn test_formatter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn LocaleFormatter>();
    }
}
