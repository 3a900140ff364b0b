// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Two Fluent bundles are embedded at build time: English (the default) and
//! Arabic. The active one is picked from the stored locale string by
//! [`select_bundle`]; [`fluent::I18n`] is the translation context handed to
//! every view.

pub mod fluent;

use crate::config::{Config, DEFAULT_LOCALE};
use unic_langid::LanguageIdentifier;

/// Marker matched (case-insensitively, anywhere in the string) to pick Arabic.
const ARABIC_MARKER: &str = "ar";

/// Language resource bundles shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bundle {
    #[default]
    English,
    Arabic,
}

impl Bundle {
    /// All bundles, default first.
    pub const ALL: [Bundle; 2] = [Bundle::English, Bundle::Arabic];

    /// Name of the embedded `.ftl` asset backing this bundle.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Bundle::English => "en-US.ftl",
            Bundle::Arabic => "ar.ftl",
        }
    }

    /// Canonical locale tag for this bundle; what the settings page writes.
    #[must_use]
    pub fn locale_tag(self) -> &'static str {
        match self {
            Bundle::English => "en-US",
            Bundle::Arabic => "ar",
        }
    }

    /// Whether text in this bundle is written right to left.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Bundle::Arabic)
    }
}

/// Picks the bundle for a locale string.
///
/// Any locale containing `"ar"` in any letter case selects Arabic; every
/// other string, including unknown or empty ones, selects English.
#[must_use]
pub fn select_bundle(locale: &str) -> Bundle {
    if locale.to_lowercase().contains(ARABIC_MARKER) {
        Bundle::Arabic
    } else {
        Bundle::English
    }
}

/// Resolves the startup locale: CLI flag, then config, then OS, then `en-US`.
///
/// Explicit CLI and config values are kept verbatim when non-empty. The OS
/// locale is only used if it is a valid BCP-47 tag.
pub fn resolve_locale(cli_lang: Option<String>, config: &Config) -> String {
    resolve_locale_with_os(cli_lang, config, sys_locale::get_locale())
}

fn resolve_locale_with_os(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
) -> String {
    let explicit = [cli_lang, config.general.language.clone()]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty());
    if let Some(locale) = explicit {
        return locale;
    }

    os_locale
        .filter(|candidate| candidate.parse::<LanguageIdentifier>().is_ok())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}
