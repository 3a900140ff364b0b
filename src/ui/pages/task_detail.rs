// SPDX-License-Identifier: MPL-2.0
//! Single task page. Receives the `taskId` route parameter.

use super::{Event, ViewContext};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Text};
use iced::{Element, Length};

/// Heading for the task identified by `task_id`.
pub fn title(task_id: &str, i18n: &I18n) -> String {
    i18n.tr_with_args("task-page-title", &[("id", task_id)])
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToList,
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
            Message::BackToList => Event::Navigate("/tasks".to_string()),
        }
    }

    pub fn view<'a>(&'a self, task_id: &'a str, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let body = i18n.tr_with_args("task-page-body", &[("id", task_id)]);

        Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(Text::new(title(task_id, i18n)).size(typography::TITLE_MD))
            .push(Text::new(body).size(typography::BODY))
            .push(button(Text::new(i18n.tr("task-page-back"))).on_press(Message::BackToList))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_the_task() {
        assert_eq!(title("42", &I18n::default()), "Task 42");
    }

    #[test]
    fn back_returns_to_task_list() {
        let mut page = Page::new();
        assert_eq!(
            page.update(Message::BackToList),
            Event::Navigate("/tasks".into())
        );
    }
}
