// SPDX-License-Identifier: MPL-2.0
//! `iced_tasks` is the application shell of a small task manager built with
//! the Iced GUI framework.
//!
//! It wires a global preference store, a path router with lazily loaded
//! pages, Fluent translations (including a right-to-left bundle) and a
//! theme-aware layout into a single Iced application.

#![doc(html_root_url = "https://docs.rs/iced_tasks/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod router;
pub mod store;
pub mod ui;
