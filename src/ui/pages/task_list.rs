// SPDX-License-Identifier: MPL-2.0
//! Task list page.
//!
//! Task data lives in the task service; this page only offers the entry
//! point to a single task by identifier.

use super::{Event, ViewContext};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

pub fn title(i18n: &I18n) -> String {
    i18n.tr("tasks-page-title")
}

#[derive(Debug, Clone)]
pub enum Message {
    TaskIdChanged(String),
    OpenTask,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    task_id_input: String,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn task_id_input(&self) -> &str {
        &self.task_id_input
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TaskIdChanged(value) => {
                self.task_id_input = value;
                Event::None
            }
            Message::OpenTask => {
                let task_id = self.task_id_input.trim();
                // A slash would address a different route.
                if task_id.is_empty() || task_id.contains('/') {
                    return Event::None;
                }
                let path = format!("/tasks/{task_id}");
                self.task_id_input.clear();
                Event::Navigate(path)
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let heading = Text::new(title(i18n)).size(typography::TITLE_MD);
        let empty = Text::new(i18n.tr("tasks-page-empty")).size(typography::BODY);

        let input = text_input(&i18n.tr("tasks-open-placeholder"), &self.task_id_input)
            .on_input(Message::TaskIdChanged)
            .on_submit(Message::OpenTask)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let open = button(Text::new(i18n.tr("tasks-open-button"))).on_press(Message::OpenTask);

        let open_row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(input)
            .push(open);

        Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(heading)
            .push(empty)
            .push(Text::new(i18n.tr("tasks-open-label")).size(typography::CAPTION))
            .push(open_row)
            .into()
    }
}
