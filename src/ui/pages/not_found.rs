// SPDX-License-Identifier: MPL-2.0
//! Catch-all page for paths no other route claims.

use super::{Event, ViewContext};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Text};
use iced::{Element, Length};

pub fn title(i18n: &I18n) -> String {
    i18n.tr("not-found-title")
}

#[derive(Debug, Clone)]
pub enum Message {
    GoHome,
}

#[derive(Debug, Clone, Default)]
pub struct Page;

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::GoHome => Event::Navigate("/".to_string()),
        }
    }

    pub fn view<'a>(&'a self, path: &'a str, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let body = i18n.tr_with_args("not-found-body", &[("path", path)]);

        Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(Text::new(title(i18n)).size(typography::TITLE_MD))
            .push(Text::new(body).size(typography::BODY))
            .push(button(Text::new(i18n.tr("not-found-home"))).on_press(Message::GoHome))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_home_targets_root() {
        let mut page = Page::new();
        assert_eq!(page.update(Message::GoHome), Event::Navigate("/".into()));
    }
}
