// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval for the spinner and banner expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Keyboard shortcuts: Alt+Left goes back.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::ArrowLeft),
                modifiers,
                ..
            }) if modifiers.alt() => Some(Message::Back),
            _ => None,
        }
    })
}

/// Ticks only while something animates or may expire.
pub fn create_tick_subscription(is_loading: bool, has_notification: bool) -> Subscription<Message> {
    if is_loading || has_notification {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
