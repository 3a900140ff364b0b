// SPDX-License-Identifier: MPL-2.0
//! Settings page: theme and language selection.
//!
//! This page owns the write side of the theme and locale preferences. It
//! never mutates the store itself; selections are returned as
//! [`Event::SetPreference`] and applied by the application root.

use super::{Event, PreferenceChange, ViewContext};
use crate::i18n::fluent::I18n;
use crate::i18n::{select_bundle, Bundle};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Button, Column, Row, Text};
use iced::{Element, Length};

pub fn title(i18n: &I18n) -> String {
    i18n.tr("settings-page-title")
}

#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(ThemeMode),
    LanguageSelected(Bundle),
}

#[derive(Debug, Clone)]
pub struct Page {
    themes: Vec<ThemeMode>,
    languages: Vec<Bundle>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self {
            themes: ThemeMode::ALL.to_vec(),
            languages: Bundle::ALL.to_vec(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ThemeSelected(mode) => {
                Event::SetPreference(PreferenceChange::Theme(mode.id().to_string()))
            }
            Message::LanguageSelected(bundle) => {
                Event::SetPreference(PreferenceChange::Locale(bundle.locale_tag().to_string()))
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let current_theme = ctx.store.themes().theme();
        let current_bundle = select_bundle(ctx.store.locales().locale());

        let theme_row = self.themes.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, mode| {
                let selected = ThemeMode::from_id(current_theme) == Some(*mode);
                row.push(choice(
                    i18n.tr(mode.label_key()),
                    selected,
                    Message::ThemeSelected(*mode),
                ))
            },
        );

        let language_row = self.languages.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, bundle| {
                let key = format!("language-name-{}", bundle.locale_tag());
                row.push(choice(
                    i18n.tr(&key),
                    current_bundle == *bundle,
                    Message::LanguageSelected(*bundle),
                ))
            },
        );

        Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(Text::new(title(i18n)).size(typography::TITLE_MD))
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(i18n.tr("settings-theme-label")))
                    .push(theme_row),
            )
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(i18n.tr("settings-language-label")))
                    .push(language_row),
            )
            .into()
    }
}

fn choice<'a>(label: String, selected: bool, message: Message) -> Button<'a, Message> {
    let style = if selected {
        button::primary
    } else {
        button::secondary
    };
    button(Text::new(label)).on_press(message).style(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selection_emits_theme_id() {
        let mut page = Page::new();
        assert_eq!(
            page.update(Message::ThemeSelected(ThemeMode::Dark)),
            Event::SetPreference(PreferenceChange::Theme("dark".into()))
        );
    }

    #[test]
    fn language_selection_emits_locale_tag() {
        let mut page = Page::new();
        assert_eq!(
            page.update(Message::LanguageSelected(Bundle::Arabic)),
            Event::SetPreference(PreferenceChange::Locale("ar".into()))
        );
    }

    #[test]
    fn offers_every_theme_and_language() {
        let page = Page::new();
        assert_eq!(page.themes.len(), ThemeMode::ALL.len());
        assert_eq!(page.languages, Bundle::ALL.to_vec());
    }
}
