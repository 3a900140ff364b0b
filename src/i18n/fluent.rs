// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation context.

use super::{select_bundle, Bundle};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation context: the active locale plus exactly one loaded bundle.
pub struct I18n {
    locale: String,
    bundle: Bundle,
    fluent: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.locale)
            .field("bundle", &self.bundle)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LOCALE)
    }
}

impl I18n {
    /// Builds the context for `locale`, selecting its bundle with [`select_bundle`].
    pub fn new(locale: &str) -> Self {
        let bundle = select_bundle(locale);
        Self {
            locale: locale.to_string(),
            bundle,
            fluent: load_bundle(bundle),
        }
    }

    /// Returns the locale string this context was configured with.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the active bundle.
    #[must_use]
    pub fn bundle(&self) -> Bundle {
        self.bundle
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.bundle.is_rtl()
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Looks up `key`, returning `fallback` verbatim when the bundle lacks it.
    pub fn tr_or(&self, key: &str, fallback: &str) -> String {
        self.format(key, None)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let message = self.fluent.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = self.fluent.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            tracing::debug!(key, ?errors, "fluent formatting failed");
            None
        }
    }
}

fn load_bundle(bundle: Bundle) -> FluentBundle<FluentResource> {
    let language: LanguageIdentifier = bundle
        .locale_tag()
        .parse()
        .unwrap_or_default();
    let mut fluent = FluentBundle::new(vec![language]);
    // Bidi isolation marks would leak into plain widget text.
    fluent.set_use_isolating(false);

    let Some(file) = Asset::get(bundle.file_name()) else {
        tracing::warn!(file = bundle.file_name(), "language bundle missing from assets");
        return fluent;
    };

    let source = String::from_utf8_lossy(file.data.as_ref()).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((partial, errors)) => {
            tracing::warn!(file = bundle.file_name(), ?errors, "language bundle has syntax errors");
            partial
        }
    };
    if let Err(errors) = fluent.add_resource(resource) {
        tracing::warn!(file = bundle.file_name(), ?errors, "duplicate messages in language bundle");
    }
    fluent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_context_translates_title() {
        let i18n = I18n::new("en-US");
        assert_eq!(i18n.bundle(), Bundle::English);
        assert_eq!(i18n.tr("app-title"), "Tasks list");
    }

    #[test]
    fn arabic_context_translates_title() {
        let i18n = I18n::new("ar-SA");
        assert_eq!(i18n.bundle(), Bundle::Arabic);
        assert_eq!(i18n.locale(), "ar-SA");
        assert_ne!(i18n.tr("app-title"), "Tasks list");
        assert!(!i18n.tr("app-title").starts_with("MISSING"));
        assert!(i18n.is_rtl());
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let i18n = I18n::new("fr-FR");
        assert_eq!(i18n.bundle(), Bundle::English);
        assert_eq!(i18n.locale(), "fr-FR");
        assert_eq!(i18n.tr("nav-tasks"), "Tasks");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_or_uses_literal_fallback() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr_or("no-such-key", "Tasks list"), "Tasks list");
        assert_eq!(i18n.tr_or("app-title", "ignored"), "Tasks list");
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::new("en-US");
        assert_eq!(i18n.tr_with_args("task-page-title", &[("id", "42")]), "Task 42");
    }

    #[test]
    fn both_bundles_define_the_same_keys() {
        let keys = [
            "app-title",
            "nav-tasks",
            "nav-settings",
            "loading-label",
            "page-load-error",
            "page-load-retry",
            "not-found-title",
            "settings-theme-label",
            "notification-preferences-saved",
            "notification-config-load-error",
            "notification-config-parse-error",
            "notification-config-save-error",
        ];
        for bundle in Bundle::ALL {
            let i18n = I18n::new(bundle.locale_tag());
            for key in keys {
                assert!(
                    !i18n
                        .tr_with_args(key, &[("reason", "disk full")])
                        .starts_with("MISSING"),
                    "{key} missing from {:?}",
                    bundle
                );
            }
        }
    }
}
