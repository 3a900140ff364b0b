// SPDX-License-Identifier: MPL-2.0
//! Page layout shell: title bar with navigation, the route outlet, and the
//! notification overlay stacked on top.
//!
//! The shell is rendered for every frame regardless of the outlet's state,
//! so it stays visible while a page body is loading.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, stack, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Navigation requests raised by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(&'static str),
    Back,
}

/// Contextual data needed to render the shell.
pub struct ViewContext<'a> {
    pub title: String,
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub location: &'a str,
    pub can_go_back: bool,
}

/// Renders the shell around `outlet` with `overlay` stacked above.
pub fn view<'a, M: Clone + 'a>(
    ctx: ViewContext<'a>,
    on_nav: impl Fn(Message) -> M + 'a,
    outlet: Element<'a, M>,
    overlay: Element<'a, M>,
) -> Element<'a, M> {
    let header = header(&ctx).map(on_nav);

    let surface = ctx.colors.surface_primary;
    let text_color = ctx.colors.text_primary;
    let body = Container::new(outlet)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            text_color: Some(text_color),
            ..Default::default()
        });

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body);

    stack![page, overlay].into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let title = Text::new(ctx.title.clone())
        .size(typography::TITLE_LG)
        .color(ctx.colors.text_primary);

    let mut nav = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    if ctx.can_go_back {
        nav = nav.push(button(Text::new(i18n.tr("nav-back"))).on_press(Message::Back));
    }
    nav = nav
        .push(nav_button(i18n.tr("nav-tasks"), "/tasks", ctx.location))
        .push(nav_button(i18n.tr("nav-settings"), "/settings", ctx.location));

    // Title sits at the reading start: left for LTR bundles, right for RTL.
    let row = if i18n.is_rtl() {
        Row::new().push(nav).push(
            Container::new(title)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        )
    } else {
        Row::new().push(Container::new(title).width(Length::Fill)).push(nav)
    };

    let surface = ctx.colors.surface_secondary;
    Container::new(row.align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            ..Default::default()
        })
        .into()
}

fn nav_button<'a>(label: String, target: &'static str, location: &str) -> Element<'a, Message> {
    let style = if is_active(location, target) {
        button::primary
    } else {
        button::text
    };
    button(Text::new(label))
        .on_press(Message::Navigate(target))
        .style(style)
        .into()
}

/// Whether `location` is `target` or one of its sub-paths.
fn is_active(location: &str, target: &str) -> bool {
    location
        .strip_prefix(target)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_target_is_active_for_sub_paths() {
        assert!(is_active("/tasks", "/tasks"));
        assert!(is_active("/tasks/42", "/tasks"));
        assert!(!is_active("/tasksx", "/tasks"));
        assert!(!is_active("/settings", "/tasks"));
    }
}
