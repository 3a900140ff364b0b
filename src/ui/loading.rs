// SPDX-License-Identifier: MPL-2.0
//! Loading placeholder shown in the route outlet while a page body loads.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};
use std::f32::consts::TAU;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Animation state of the placeholder spinner.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    rotation: f32,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.rotation = (self.rotation + SPINNER_SPEED) % TAU;
    }

    pub fn reset(&mut self) {
        self.rotation = 0.0;
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// Renders the placeholder: a spinner with a localized caption.
pub fn view<'a, Message: 'a>(i18n: &I18n, spinner: Spinner, color: Color) -> Element<'a, Message> {
    let spinner_widget = AnimatedSpinner::new(color, spinner.rotation()).into_element();

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(spinner_widget)
            .push(Text::new(i18n.tr("loading-label")).size(typography::BODY)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
