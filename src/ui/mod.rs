// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they
//! borrow application state and return messages for the root to handle.
//!
//! - [`layout`] - Title bar, navigation and the route outlet
//! - [`pages`] - Page bodies rendered in the outlet
//! - [`loading`] - Placeholder shown while a page body loads
//! - [`notification`] - Global notification banner
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod layout;
pub mod loading;
pub mod notification;
pub mod pages;
pub mod theming;
pub mod widgets;
