// SPDX-License-Identifier: MPL-2.0
//! Theme slice: the current theme identifier.

#[derive(Debug, Clone)]
pub enum Action {
    SetTheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemesState {
    theme: String,
}

impl ThemesState {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub(crate) fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::SetTheme(theme) => {
                if self.theme == theme {
                    return false;
                }
                self.theme = theme;
                true
            }
        }
    }
}
