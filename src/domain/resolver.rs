// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution of the options object for a single formatting call.
//!
//! Resolution walks an ordered list of lookup steps ([`PRECEDENCE`]) and returns the
//! first options object found:
//!
//! 1. **Inline**: the per-call attributes, when they are non-empty and carry no
//!    `format` attribute
//! 2. **Custom**: the custom format named by `format`, for the current language
//! 3. **Standard language**: the standard options for the current language
//! 4. **Standard all**: the standard options for all languages
//!
//! When no step matches, the result is an empty object and the formatting primitive
//! falls back to its own defaults. A custom format without an entry for the current
//! language falls through to the standard layer; its own all-languages entry is not
//! consulted.

use crate::domain::{ConfigStore, FormatKind, FormatOptions, LanguageSelector, LanguageTag};

/// The inputs of one formatting call.
#[derive(Clone, Copy, Debug)]
pub struct ResolutionRequest<'a> {
    /// The format kind of the helper being called.
    pub kind: FormatKind,
    /// The current language, if one is set.
    pub language: Option<&'a LanguageTag>,
    /// The per-call attributes.
    pub attributes: &'a FormatOptions,
}

impl<'a> ResolutionRequest<'a> {
    /// Creates a request.
    pub fn new(
        kind: FormatKind,
        language: Option<&'a LanguageTag>,
        attributes: &'a FormatOptions,
    ) -> Self {
        Self {
            kind,
            language,
            attributes,
        }
    }

    fn language_selector(&self) -> Option<LanguageSelector> {
        self.language.cloned().map(LanguageSelector::Specific)
    }
}

/// One level of the precedence chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupStep {
    /// Per-call attributes without a `format` redirection.
    Inline,
    /// The requested custom format, for the current language.
    Custom,
    /// Standard options for the current language.
    StandardLanguage,
    /// Standard options for all languages.
    StandardAll,
}

/// The lookup steps, highest precedence first.
pub const PRECEDENCE: [LookupStep; 4] = [
    LookupStep::Inline,
    LookupStep::Custom,
    LookupStep::StandardLanguage,
    LookupStep::StandardAll,
];

impl LookupStep {
    /// Runs this step alone.
    pub fn lookup<'a>(
        self,
        request: &ResolutionRequest<'a>,
        store: &'a ConfigStore,
    ) -> Option<&'a FormatOptions> {
        match self {
            LookupStep::Inline => request
                .attributes
                .has_inline_options()
                .then_some(request.attributes),
            LookupStep::Custom => {
                let name = request.attributes.custom_format()?;
                store.custom(request.kind, name, &request.language_selector()?)
            }
            LookupStep::StandardLanguage => {
                store.standard(request.kind, &request.language_selector()?)
            }
            LookupStep::StandardAll => {
                store.standard(request.kind, &LanguageSelector::AllLanguages)
            }
        }
    }
}

/// Resolves the options object for a formatting call.
///
/// The result is always an owned copy; for prices a `style: "currency"` default is
/// added to the copy when a currency is set without a style.
///
/// # Examples
///
/// ```
/// use intlcfg::domain::{resolve, ConfigStore, FormatKind, FormatOptions, ResolutionRequest};
/// use serde_json::json;
///
/// let store = ConfigStore::default();
/// let en = "en".parse().unwrap();
/// let attributes = FormatOptions::new();
///
/// let options = resolve(&ResolutionRequest::new(FormatKind::Price, Some(&en), &attributes), &store);
/// assert_eq!(options.get("currency"), Some(&json!("EUR")));
/// ```
pub fn resolve(request: &ResolutionRequest<'_>, store: &ConfigStore) -> FormatOptions {
    let found = PRECEDENCE
        .into_iter()
        .find_map(|step| step.lookup(request, store).map(|options| (step, options)));

    let mut options = match found {
        Some((step, options)) => {
            tracing::trace!(
                kind = %request.kind,
                language = ?request.language.map(LanguageTag::as_str),
                step = ?step,
                "resolved format options"
            );
            options.clone()
        }
        None => {
            tracing::trace!(
                kind = %request.kind,
                language = ?request.language.map(LanguageTag::as_str),
                "no format options configured, using formatter defaults"
            );
            FormatOptions::new()
        }
    };

    if request.kind == FormatKind::Price {
        options.apply_currency_style();
    }
    options
}
