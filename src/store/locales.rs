// SPDX-License-Identifier: MPL-2.0
//! Locale slice: the current locale string.

#[derive(Debug, Clone)]
pub enum Action {
    SetLocale(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalesState {
    locale: String,
}

impl LocalesState {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub(crate) fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::SetLocale(locale) => {
                if self.locale == locale {
                    return false;
                }
                self.locale = locale;
                true
            }
        }
    }
}
