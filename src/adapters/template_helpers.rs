// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handlebars helpers for localized templates.
//!
//! [`register_helpers`] installs the following helpers on a registry:
//!
//! | helper      | use                                        |
//! |-------------|--------------------------------------------|
//! | `__`        | `{{__ "key_with_count" count=7}}`          |
//! | `_locale`   | `{{_locale}}`                              |
//! | `localeIs`  | `{{#if (localeIs "en")}}Hello{{/if}}`      |
//! | `_date`     | `{{_date "2020-03-11T03:24:00" year="numeric"}}` |
//! | `_dateRel`  | `{{_dateRel -7 unit="day"}}`               |
//! | `_dateAdd`  | `{{_dateAdd "1995-12-17" -10 unit="day"}}` |
//! | `_dateDiff` | `{{_dateDiff "2023-02-01" "2023-01-01" unit="day"}}` |
//! | `_num`      | `{{_num 3000 minimumFractionDigits=2}}`    |
//! | `_price`    | `{{_price 4999.99 format="compact"}}`      |
//!
//! The formatting helpers resolve their options through the shared configuration
//! and hand them to the [`LocaleFormatter`]. Invalid values and formatter errors fail
//! the render.

use crate::adapters::arguments::{parse_date, parse_number};
use crate::domain::{
    FormatConfigService, FormatKind, FormatOptions, IntlError, LanguageTag, TimeUnit,
};
use crate::ports::{LocaleFormatter, Translator};
use crate::service::SharedFormatConfig;
use chrono::{DateTime, TimeZone, Utc};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason, ScopedJson,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Translation lookup helper name.
pub const TRANSLATE_HELPER: &str = "__";
/// Current language helper name.
pub const LOCALE_HELPER: &str = "_locale";
/// Language equality helper name.
pub const LOCALE_IS_HELPER: &str = "localeIs";
/// Date helper name.
pub const DATE_HELPER: &str = "_date";
/// Relative date offset helper name.
pub const DATE_REL_HELPER: &str = "_dateRel";
/// Relative date difference helper name.
pub const DATE_DIFF_HELPER: &str = "_dateDiff";
/// Date offset helper name.
pub const DATE_ADD_HELPER: &str = "_dateAdd";
/// Number helper name.
pub const NUMBER_HELPER: &str = "_num";
/// Price helper name.
pub const PRICE_HELPER: &str = "_price";

/// Everything the helpers share.
struct IntlContext {
    config: SharedFormatConfig,
    translator: Arc<dyn Translator>,
    formatter: Arc<dyn LocaleFormatter>,
}

impl IntlContext {
    fn resolve(
        &self,
        kind: FormatKind,
        language: Option<&LanguageTag>,
        h: &Helper<'_>,
    ) -> FormatOptions {
        self.resolve_attributes(kind, language, &hash_options(h))
    }

    fn resolve_attributes(
        &self,
        kind: FormatKind,
        language: Option<&LanguageTag>,
        attributes: &FormatOptions,
    ) -> FormatOptions {
        match self.config.read() {
            Ok(config) => config.resolve(kind, language, attributes),
            Err(_) => {
                tracing::warn!(
                    kind = %kind,
                    "format configuration lock poisoned, using formatter defaults"
                );
                FormatOptions::new()
            }
        }
    }

    /// Resolves options for a helper that takes a `unit` attribute.
    ///
    /// The unit given on the call wins over a configured one and is removed before
    /// resolution, so `unit` alone does not count as inline options. The default is
    /// `hour`.
    fn resolve_with_unit(
        &self,
        kind: FormatKind,
        language: Option<&LanguageTag>,
        h: &Helper<'_>,
    ) -> Result<(TimeUnit, FormatOptions), IntlError> {
        let mut attributes = hash_options(h);
        let call_unit = attributes.take_unit();
        let mut options = self.resolve_attributes(kind, language, &attributes);
        let unit = match call_unit.or(options.take_unit()) {
            Some(unit) => unit.parse()?,
            None => TimeUnit::default(),
        };
        Ok((unit, options))
    }
}

fn hash_options(h: &Helper<'_>) -> FormatOptions {
    h.hash()
        .iter()
        .map(|(key, value)| (key.to_string(), value.value().clone()))
        .collect()
}

fn param<'a>(h: &'a Helper<'_>, index: usize) -> Option<&'a Value> {
    h.param(index).map(|p| p.value())
}

fn render_error(e: IntlError) -> RenderError {
    RenderErrorReason::NestedError(Box::new(e)).into()
}

fn derived<'rc>(result: Result<String, IntlError>) -> Result<ScopedJson<'rc>, RenderError> {
    result.map(|text| ScopedJson::Derived(Value::String(text))).map_err(render_error)
}

/// Registers all localization helpers on a Handlebars registry.
///
/// # Examples
///
/// ```rust,ignore
/// let config = DefaultFormatConfig::new().into_shared();
/// let mut registry = Handlebars::new();
/// register_helpers(&mut registry, config.clone(), translator, formatter);
/// ```
pub fn register_helpers(
    registry: &mut Handlebars<'_>,
    config: SharedFormatConfig,
    translator: Arc<dyn Translator>,
    formatter: Arc<dyn LocaleFormatter>,
) {
    let ctx = Arc::new(IntlContext {
        config,
        translator,
        formatter,
    });

    registry.register_helper(TRANSLATE_HELPER, Box::new(TranslateHelper(ctx.clone())));
    registry.register_helper(LOCALE_HELPER, Box::new(LocaleHelper(ctx.clone())));
    registry.register_helper(LOCALE_IS_HELPER, Box::new(LocaleIsHelper(ctx.clone())));
    registry.register_helper(DATE_HELPER, Box::new(DateHelper(ctx.clone())));
    registry.register_helper(DATE_REL_HELPER, Box::new(DateRelHelper(ctx.clone())));
    registry.register_helper(DATE_DIFF_HELPER, Box::new(DateDiffHelper(ctx.clone())));
    registry.register_helper(DATE_ADD_HELPER, Box::new(DateAddHelper(ctx.clone())));
    registry.register_helper(NUMBER_HELPER, Box::new(NumberHelper(ctx.clone())));
    registry.register_helper(PRICE_HELPER, Box::new(PriceHelper(ctx)));
}

/// Translation lookup: {{__ "key" name="value"}}
///
/// The translation is written unescaped.
struct TranslateHelper(Arc<IntlContext>);

impl HelperDef for TranslateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let key = param(h, 0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(TRANSLATE_HELPER, 0))?;
        let key = match key {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        let args: Map<String, Value> = hash_options(h).into_map();
        out.write(&self.0.translator.translate(&key, &args))?;
        Ok(())
    }
}

/// Current language: {{_locale}}
struct LocaleHelper(Arc<IntlContext>);

impl HelperDef for LocaleHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        _: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let language = self
            .0
            .translator
            .language()
            .map_or(Value::Null, |tag| Value::String(tag.into_string()));
        Ok(ScopedJson::Derived(language))
    }
}

/// Language equality: {{#if (localeIs "en")}}
struct LocaleIsHelper(Arc<IntlContext>);

impl HelperDef for LocaleIsHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let matches = param(h, 0)
            .and_then(Value::as_str)
            .is_some_and(|language| self.0.translator.language_is(language));
        Ok(ScopedJson::Derived(Value::Bool(matches)))
    }
}

/// Date formatting: {{_date "1995-12-17" year="numeric"}}
struct DateHelper(Arc<IntlContext>);

impl HelperDef for DateHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let ctx = &self.0;
        let language = ctx.translator.language();
        derived(parse_date(param(h, 0)).and_then(|date| {
            let options = ctx.resolve(FormatKind::DateTime, language.as_ref(), h);
            ctx.formatter.format_date(language.as_ref(), &date, &options)
        }))
    }
}

/// Relative date offset: {{_dateRel -3 unit="day"}}
struct DateRelHelper(Arc<IntlContext>);

impl HelperDef for DateRelHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let ctx = &self.0;
        let language = ctx.translator.language();
        derived(parse_number(param(h, 0)).and_then(|value| {
            let (unit, options) = ctx.resolve_with_unit(FormatKind::RelativeTime, language.as_ref(), h)?;
            ctx.formatter
                .format_relative(language.as_ref(), value, unit, &options)
        }))
    }
}

/// Relative date difference: {{_dateDiff "2023-02-01" "2023-01-01" unit="day"}}
///
/// The second date defaults to now.
struct DateDiffHelper(Arc<IntlContext>);

impl HelperDef for DateDiffHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        derived(self.format_difference(h))
    }
}

impl DateDiffHelper {
    fn format_difference(&self, h: &Helper<'_>) -> Result<String, IntlError> {
        let ctx = &self.0;
        let language = ctx.translator.language();
        let first = parse_date(param(h, 0))?;
        let second = parse_date(param(h, 1))?;
        let (unit, options) = ctx.resolve_with_unit(FormatKind::RelativeTime, language.as_ref(), h)?;
        let diff = first.signed_duration_since(second).num_milliseconds();
        ctx.formatter
            .format_relative(language.as_ref(), unit.magnitude(diff), unit, &options)
    }
}

/// Date offset: {{_dateAdd "December 17, 1995" -10 unit="day"}}
///
/// The shifted date is formatted like `_date`.
struct DateAddHelper(Arc<IntlContext>);

impl HelperDef for DateAddHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        derived(self.format_shifted(h))
    }
}

impl DateAddHelper {
    fn format_shifted(&self, h: &Helper<'_>) -> Result<String, IntlError> {
        let ctx = &self.0;
        let language = ctx.translator.language();
        let date = parse_date(param(h, 0))?;
        let offset = parse_number(param(h, 1))?;
        let (unit, options) = ctx.resolve_with_unit(FormatKind::DateTime, language.as_ref(), h)?;
        let shifted = shift(&date, offset, unit).ok_or_else(|| IntlError::InvalidDate {
            input: format!("{} {} {}", date.to_rfc3339(), offset, unit),
        })?;
        ctx.formatter.format_date(language.as_ref(), &shifted, &options)
    }
}

fn shift(date: &DateTime<Utc>, offset: f64, unit: TimeUnit) -> Option<DateTime<Utc>> {
    let millis = date.timestamp_millis() as f64 + offset * unit.millis() as f64;
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(millis.round() as i64).single()
}

/// Number formatting: {{_num 3000 minimumFractionDigits=2}}
struct NumberHelper(Arc<IntlContext>);

impl HelperDef for NumberHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let ctx = &self.0;
        let language = ctx.translator.language();
        derived(parse_number(param(h, 0)).and_then(|number| {
            let options = ctx.resolve(FormatKind::Number, language.as_ref(), h);
            ctx.formatter
                .format_number(language.as_ref(), number, &options)
        }))
    }
}

/// Price formatting: {{_price 4999.99 currency="USD"}}
struct PriceHelper(Arc<IntlContext>);

impl HelperDef for PriceHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let ctx = &self.0;
        let language = ctx.translator.language();
        derived(parse_number(param(h, 0)).and_then(|price| {
            let options = ctx.resolve(FormatKind::Price, language.as_ref(), h);
            ctx.formatter
                .format_number(language.as_ref(), price, &options)
        }))
    }
}
