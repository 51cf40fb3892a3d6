// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template helpers example for the intlcfg crate.
//!
//! This example demonstrates:
//! - Configuring standard and custom formats, in code and from YAML
//! - Registering the localization helpers on a Handlebars registry
//! - Switching the current language between renders
//! - Resetting the configuration to the built-in defaults
//!
//! The formatter used here is deliberately naive; a real application plugs in an
//! ICU-backed implementation of `LocaleFormatter`.
//!
//! To run this example:
//! ```bash
//! cargo run --example template_helpers
//! ```

use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use intlcfg::prelude::*;
use serde_json::{json, Map, Value};
use std::sync::{Arc, RwLock};

const FORMATS: &str = r#"
- language: all
  kind: NumberFormat
  options:
    maximumFractionDigits: 2
- language: de
  kind: PriceFormat
  options:
    currency: EUR
- language: en
  kind: PriceFormat
  options:
    currency: USD
- language: en
  kind: DateTimeFormat
  format: short-year
  options:
    year: 2-digit
"#;

const TEMPLATE: &str = r#"{{__ "welcome" name=user}}
  language:   {{_locale}}{{#if (localeIs "de")}} (Deutsch){{/if}}
  price:      {{_price price}}
  in yen:     {{_price price currency="JPY"}}
  number:     {{_num number}}
  date:       {{_date "2020-03-11T03:24:00"}}
  short year: {{_date "2020-03-11T03:24:00" format="short-year"}}
  relative:   {{_dateRel 3 unit="day"}}
  difference: {{_dateDiff "2023-02-01" "2023-01-01" unit="week"}}
  ten later:  {{_dateAdd "December 17, 1995" 10 unit="day"}}"#;

/// Translator with a tiny hard-coded catalog.
struct DemoTranslator {
    language: RwLock<Option<LanguageTag>>,
}

impl DemoTranslator {
    fn set_language(&self, language: &str) -> Result<()> {
        if let Ok(mut current) = self.language.write() {
            *current = Some(language.parse()?);
        }
        Ok(())
    }
}

impl Translator for DemoTranslator {
    fn language(&self) -> Option<LanguageTag> {
        self.language.read().ok().and_then(|language| language.clone())
    }

    fn translate(&self, key: &str, args: &Map<String, Value>) -> String {
        let message = match (self.language().as_ref().map(LanguageTag::as_str), key) {
            (Some("de"), "welcome") => "Willkommen, {name}!",
            (_, "welcome") => "Welcome, {name}!",
            _ => return key.to_string(),
        };
        let name = args.get("name").and_then(Value::as_str).unwrap_or("guest");
        message.replace("{name}", name)
    }
}

/// Shows the options it receives next to a plain rendering of the value.
struct DemoFormatter;

fn show(options: &FormatOptions) -> String {
    Value::from(options.clone()).to_string()
}

impl LocaleFormatter for DemoFormatter {
    fn format_date(
        &self,
        _language: Option<&LanguageTag>,
        date: &DateTime<Utc>,
        options: &FormatOptions,
    ) -> Result<String> {
        let pattern = match options.get("year").and_then(Value::as_str) {
            Some("2-digit") => "%d.%m.%y",
            _ => "%Y-%m-%d %H:%M",
        };
        Ok(format!("{} {}", date.format(pattern), show(options)))
    }

    fn format_relative(
        &self,
        _language: Option<&LanguageTag>,
        value: f64,
        unit: TimeUnit,
        options: &FormatOptions,
    ) -> Result<String> {
        Ok(format!("{:+} {}(s) {}", value, unit, show(options)))
    }

    fn format_number(
        &self,
        _language: Option<&LanguageTag>,
        number: f64,
        options: &FormatOptions,
    ) -> Result<String> {
        let digits = options
            .get("maximumFractionDigits")
            .and_then(Value::as_u64)
            .unwrap_or(3) as usize;
        let text = format!("{:.*}", digits, number);
        match options.get("currency").and_then(Value::as_str) {
            Some(currency) => Ok(format!("{} {} {}", text, currency, show(options))),
            None => Ok(format!("{} {}", text, show(options))),
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== intlcfg: Template Helpers ===\n");

    let parser = YamlParser::new();
    let mut config = DefaultFormatConfig::new();
    if !config.configure_batch(parser.parse(FORMATS)?) {
        return Err("format configuration rejected".into());
    }

    // Rejected requests only log and return false
    let accepted = config.configure(ConfigArgs::new("en", "CurrencyFormat", json!({})));
    println!("Unknown kind accepted: {}\n", accepted);

    let config = config.into_shared();
    let translator = Arc::new(DemoTranslator {
        language: RwLock::new(None),
    });

    let mut registry = Handlebars::new();
    register_helpers(
        &mut registry,
        config.clone(),
        translator.clone(),
        Arc::new(DemoFormatter),
    );
    registry.register_template_string("demo", TEMPLATE)?;

    let data = json!({ "user": "Ada", "price": 4999.99, "number": 3000.12345 });
    for language in ["en", "de", "fr"] {
        translator.set_language(language)?;
        println!("--- {} ---", language);
        println!("{}\n", registry.render("demo", &data)?);
    }

    println!("--- en after reset ---");
    if let Ok(mut config) = config.write() {
        config.reset();
    }
    translator.set_language("en")?;
    println!("{}", registry.render("demo", &data)?);

    Ok(())
}
