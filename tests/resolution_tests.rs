// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuring formats and resolving call options.

mod common;

use common::{init_tracing, options, tag};
use intlcfg::domain::{LookupStep, ResolutionRequest, PRECEDENCE};
use intlcfg::prelude::*;
use serde_json::json;

fn resolve(config: &DefaultFormatConfig, kind: FormatKind, language: &str, call: serde_json::Value) -> serde_json::Value {
    let language = tag(language);
    config
        .resolve(kind, Some(&language), &options(call))
        .into()
}

#[test]
fn test_price_for_language_gets_currency_style() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    assert!(config.configure(ConfigArgs::new("en", "PriceFormat", json!({ "currency": "USD" }))));

    assert_eq!(
        resolve(&config, FormatKind::Price, "en", json!({})),
        json!({ "currency": "USD", "style": "currency" })
    );
}

#[test]
fn test_language_without_entry_uses_all_languages() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    assert!(config.configure(ConfigArgs::new("all", "NumberFormat", json!({ "minimumFractionDigits": 2 }))));

    assert_eq!(
        resolve(&config, FormatKind::Number, "fr", json!({})),
        json!({ "minimumFractionDigits": 2 })
    );
}

#[test]
fn test_custom_format_selected_by_name() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    assert!(config.configure(ConfigArgs::from((
        "en",
        "DateTimeFormat",
        json!({ "year": "2-digit" }),
        "short-year"
    ))));

    assert_eq!(
        resolve(&config, FormatKind::DateTime, "en", json!({ "format": "short-year" })),
        json!({ "year": "2-digit" })
    );
    assert_eq!(
        resolve(&config, FormatKind::DateTime, "en", json!({ "format": "unknown" })),
        json!({})
    );

    assert!(config.configure(ConfigArgs::new("en", "DateTimeFormat", json!({ "month": "long" }))));
    assert_eq!(
        resolve(&config, FormatKind::DateTime, "en", json!({ "format": "unknown" })),
        json!({ "month": "long" })
    );
}

#[test]
fn test_empty_batch_is_rejected() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    assert!(!config.configure_batch(Vec::new()));
    assert_eq!(config.store(), &ConfigStore::defaults());
}

#[test]
fn test_unknown_kind_is_rejected() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    config.configure(ConfigArgs::new("de", "NumberFormat", json!({ "useGrouping": false })));
    let before = config.store().clone();

    assert!(!config.configure(ConfigArgs::new("en", "BadKind", json!({}))));
    assert_eq!(config.store(), &before);
}

#[test]
fn test_reset_restores_builtin_price() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    config.configure(ConfigArgs::new("all", "PriceFormat", json!({ "currency": "USD" })));
    config.configure(ConfigArgs::new("en", "PriceFormat", json!({ "currency": "GBP" })));

    assert!(config.reset());
    assert_eq!(
        resolve(&config, FormatKind::Price, "en", json!({})),
        json!({ "style": "currency", "currency": "EUR" })
    );
}

#[test]
fn test_reset_is_idempotent() {
    let mut config = DefaultFormatConfig::new();
    config.configure(ConfigArgs::new("en", "NumberFormat", json!({ "a": 1 })));
    config.reset();
    let once = config.store().clone();
    config.reset();
    assert_eq!(config.store(), &once);
}

#[test]
fn test_precedence_chain_in_order() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    assert!(config.configure_batch(vec![
        ConfigArgs::new("all", "NumberFormat", json!({ "layer": "all" })),
        ConfigArgs::new("en", "NumberFormat", json!({ "layer": "en" })),
        ConfigArgs::new("en", "NumberFormat", json!({ "layer": "custom" })).with_custom_format("c"),
    ]));

    // inline
    assert_eq!(
        resolve(&config, FormatKind::Number, "en", json!({ "layer": "inline" })),
        json!({ "layer": "inline" })
    );
    // custom
    assert_eq!(
        resolve(&config, FormatKind::Number, "en", json!({ "format": "c" })),
        json!({ "layer": "custom" })
    );
    // standard language
    assert_eq!(
        resolve(&config, FormatKind::Number, "en", json!({})),
        json!({ "layer": "en" })
    );
    // standard all
    assert_eq!(
        resolve(&config, FormatKind::Number, "de", json!({ "format": "c" })),
        json!({ "layer": "all" })
    );
}

#[test]
fn test_inline_options_are_not_merged() {
    let mut config = DefaultFormatConfig::new();
    config.configure(ConfigArgs::new("en", "NumberFormat", json!({ "minimumFractionDigits": 2, "useGrouping": false })));

    assert_eq!(
        resolve(&config, FormatKind::Number, "en", json!({ "maximumFractionDigits": 0 })),
        json!({ "maximumFractionDigits": 0 })
    );
}

#[test]
fn test_custom_all_languages_entry_is_not_consulted() {
    let mut config = DefaultFormatConfig::new();
    config.configure(ConfigArgs::new("all", "NumberFormat", json!({ "notation": "compact" })).with_custom_format("short"));

    assert!(config.store().has_custom_format(FormatKind::Number, "short"));
    assert_eq!(
        resolve(&config, FormatKind::Number, "en", json!({ "format": "short" })),
        json!({})
    );
}

#[test]
fn test_no_current_language_uses_all_languages() {
    let mut config = DefaultFormatConfig::new();
    config.configure(ConfigArgs::new("en", "NumberFormat", json!({ "layer": "en" })));
    config.configure(ConfigArgs::new("all", "NumberFormat", json!({ "layer": "all" })));

    let resolved: serde_json::Value = config
        .resolve(FormatKind::Number, None, &FormatOptions::new())
        .into();
    assert_eq!(resolved, json!({ "layer": "all" }));
}

#[test]
fn test_batch_last_write_wins() {
    let mut config = DefaultFormatConfig::new();
    assert!(config.configure_batch(vec![
        ConfigArgs::new("en", "PriceFormat", json!({ "currency": "USD" })),
        ConfigArgs::new("en", "PriceFormat", json!({ "currency": "JPY" })),
    ]));

    assert_eq!(
        resolve(&config, FormatKind::Price, "en", json!({})),
        json!({ "currency": "JPY", "style": "currency" })
    );
}

#[test]
fn test_batch_standard_and_custom_entries_are_independent_of_order() {
    init_tracing();
    let standard = ConfigArgs::new("en", "NumberFormat", json!({ "a": 1 }));
    let custom = ConfigArgs::new("en", "NumberFormat", json!({ "b": 2 })).with_custom_format("c");

    let mut config = DefaultFormatConfig::new();
    for batch in [
        vec![standard.clone(), custom.clone()],
        vec![custom.clone(), standard.clone()],
    ] {
        assert!(config.reset());
        assert!(config.configure_batch(batch));

        assert_eq!(resolve(&config, FormatKind::Number, "en", json!({})), json!({ "a": 1 }));
        assert_eq!(
            resolve(&config, FormatKind::Number, "en", json!({ "format": "c" })),
            json!({ "b": 2 })
        );
    }
}

#[test]
fn test_batch_same_slot_follows_batch_order() {
    init_tracing();
    let first = ConfigArgs::new("en", "NumberFormat", json!({ "a": 1 }));
    let second = ConfigArgs::new("en", "NumberFormat", json!({ "b": 2 }));
    let first_custom = ConfigArgs::new("en", "NumberFormat", json!({ "c": 3 })).with_custom_format("c");
    let second_custom = ConfigArgs::new("en", "NumberFormat", json!({ "d": 4 })).with_custom_format("c");

    let mut config = DefaultFormatConfig::new();
    assert!(config.configure_batch(vec![
        first.clone(),
        first_custom.clone(),
        second.clone(),
        second_custom.clone(),
    ]));
    assert_eq!(resolve(&config, FormatKind::Number, "en", json!({})), json!({ "b": 2 }));
    assert_eq!(
        resolve(&config, FormatKind::Number, "en", json!({ "format": "c" })),
        json!({ "d": 4 })
    );

    assert!(config.reset());
    assert!(config.configure_batch(vec![second_custom, second, first_custom, first]));
    assert_eq!(resolve(&config, FormatKind::Number, "en", json!({})), json!({ "a": 1 }));
    assert_eq!(
        resolve(&config, FormatKind::Number, "en", json!({ "format": "c" })),
        json!({ "c": 3 })
    );
}

#[test]
fn test_batch_with_invalid_entry_changes_nothing() {
    init_tracing();
    let mut config = DefaultFormatConfig::new();
    let before = config.store().clone();

    assert!(!config.configure_batch(vec![
        ConfigArgs::new("en", "NumberFormat", json!({ "a": 1 })),
        ConfigArgs::new("en", "NumberFormat", json!("not an object")),
    ]));
    assert_eq!(config.store(), &before);
}

#[test]
fn test_independent_configurations() {
    let mut first = DefaultFormatConfig::new();
    let second = DefaultFormatConfig::new();
    first.configure(ConfigArgs::new("all", "PriceFormat", json!({ "currency": "USD" })));

    assert_eq!(
        resolve(&second, FormatKind::Price, "en", json!({})),
        json!({ "style": "currency", "currency": "EUR" })
    );
}

#[test]
fn test_lookup_steps_individually() {
    let mut config = DefaultFormatConfig::new();
    config.configure(ConfigArgs::new("en", "NumberFormat", json!({ "layer": "en" })));

    let en = tag("en");
    let call = FormatOptions::new();
    let request = ResolutionRequest::new(FormatKind::Number, Some(&en), &call);
    let found: Vec<LookupStep> = PRECEDENCE
        .iter()
        .copied()
        .filter(|step| step.lookup(&request, config.store()).is_some())
        .collect();

    assert_eq!(found, vec![LookupStep::StandardLanguage]);
}

#[test]
fn test_shared_configuration_across_threads() {
    let shared = DefaultFormatConfig::new().into_shared();

    let writer = {
        let shared = shared.clone();
        std::thread::spawn(move || {
            shared
                .write()
                .unwrap()
                .configure(ConfigArgs::new("all", "NumberFormat", json!({ "useGrouping": false })))
        })
    };
    assert!(writer.join().unwrap());

    let config = shared.read().unwrap();
    let resolved: serde_json::Value = config
        .resolve(FormatKind::Number, Some(&tag("it")), &FormatOptions::new())
        .into();
    assert_eq!(resolved, json!({ "useGrouping": false }));
}
