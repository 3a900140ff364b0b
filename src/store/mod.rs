// SPDX-License-Identifier: MPL-2.0
//! Global UI preferences.
//!
//! The [`Store`] is owned by the application root. Views only ever receive
//! `&Store` and express changes as [`Action`]s, which the root dispatches in
//! its update step. Each slice owns the reducer for its own fields.

pub mod locales;
pub mod notifications;
pub mod themes;

pub use notifications::{Notice, Severity};

use locales::LocalesState;
use notifications::NotificationsState;
use std::time::Duration;
use themes::ThemesState;

/// Store mutations, grouped by the slice that owns the field.
#[derive(Debug, Clone)]
pub enum Action {
    Notifications(notifications::Action),
    Themes(themes::Action),
    Locales(locales::Action),
}

impl Action {
    pub fn set_theme(theme: impl Into<String>) -> Self {
        Action::Themes(themes::Action::SetTheme(theme.into()))
    }

    pub fn set_locale(locale: impl Into<String>) -> Self {
        Action::Locales(locales::Action::SetLocale(locale.into()))
    }

    pub fn notify(notice: Notice) -> Self {
        Action::Notifications(notifications::Action::Show(notice))
    }

    pub fn set_notification_visible(show: bool) -> Self {
        Action::Notifications(notifications::Action::SetVisible(show))
    }

    pub fn dismiss_notification() -> Self {
        Action::Notifications(notifications::Action::Dismiss)
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    notifications: NotificationsState,
    themes: ThemesState,
    locales: LocalesState,
}

impl Store {
    pub fn new(theme: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            notifications: NotificationsState::default(),
            themes: ThemesState::new(theme),
            locales: LocalesState::new(locale),
        }
    }

    /// Overrides the severity-based auto-dismiss delay of the banner.
    #[must_use]
    pub fn with_notification_dismiss_after(mut self, dismiss_after: Option<Duration>) -> Self {
        self.notifications = NotificationsState::with_dismiss_after(dismiss_after);
        self
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationsState {
        &self.notifications
    }

    #[must_use]
    pub fn themes(&self) -> &ThemesState {
        &self.themes
    }

    #[must_use]
    pub fn locales(&self) -> &LocalesState {
        &self.locales
    }

    /// Applies `action` to its slice. Returns whether any field changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::Notifications(action) => self.notifications.reduce(action),
            Action::Themes(action) => self.themes.reduce(action),
            Action::Locales(action) => self.locales.reduce(action),
        };
        if changed {
            tracing::trace!(
                theme = self.themes.theme(),
                locale = self.locales.locale(),
                notification = self.notifications.show(),
                "store updated"
            );
        }
        changed
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_THEME,
            crate::config::DEFAULT_LOCALE,
        )
    }
}
