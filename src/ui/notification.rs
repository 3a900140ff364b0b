// SPDX-License-Identifier: MPL-2.0
//! Global notification banner.
//!
//! Always mounted by the application root. It receives the store's
//! visibility flag and decides on its own whether anything is drawn.

use crate::i18n::fluent::I18n;
use crate::store::{Notice, Severity};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

/// Returns the accent color for a severity level.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Info => palette::INFO_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Resolves the notice text, interpolating its arguments.
#[must_use]
pub fn message_text(notice: &Notice, i18n: &I18n) -> String {
    if notice.message_args().is_empty() {
        i18n.tr(notice.message_key())
    } else {
        let args: Vec<(&str, &str)> = notice
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notice.message_key(), &args)
    }
}

/// Renders the banner overlay. Draws nothing unless `show` is set and a
/// notice is present.
pub fn view<'a>(show: bool, notice: Option<&'a Notice>, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(notice) = notice.filter(|_| show) else {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let accent = severity_color(notice.severity());

    let message_widget = Text::new(message_text(notice, i18n))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss = button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
        .on_press(Message::Dismiss)
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(message_widget).width(Length::Fill))
        .push(dismiss);

    let banner = Container::new(content)
        .width(Length::Fixed(sizing::BANNER_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| banner_style(theme, accent));

    // Bottom-right corner, above the page.
    Container::new(Column::new().push(banner))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn banner_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_style_uses_accent_color() {
        let style = banner_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            severity_color(Severity::Success),
            severity_color(Severity::Info),
            severity_color(Severity::Warning),
            severity_color(Severity::Error),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn message_text_resolves_key() {
        let i18n = I18n::default();
        let notice = Notice::success("notification-preferences-saved");
        assert_eq!(message_text(&notice, &i18n), "Preferences saved.");
    }

    #[test]
    fn message_text_interpolates_args() {
        let i18n = I18n::default();
        let notice =
            Notice::error("notification-config-save-error").with_arg("reason", "disk full");
        assert_eq!(
            message_text(&notice, &i18n),
            "Preferences could not be saved: disk full"
        );
    }

    #[test]
    fn hovered_dismiss_button_has_background() {
        let style = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(style.background.is_some());
        let style = dismiss_button_style(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }
}
