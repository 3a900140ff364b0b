// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::PageLoadError;
use crate::router::PageKind;
use crate::store::Action;
use crate::ui::pages::{self, PageModule};
use crate::ui::{layout, notification};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Move to `path`, resolving redirects.
    Navigate(String),
    /// Return to the previous location, if any.
    Back,
    Layout(layout::Message),
    /// Forwarded to the page body currently in the outlet.
    Page(pages::Message),
    /// A deferred page body finished loading.
    PageLoaded {
        kind: PageKind,
        result: Result<PageModule, PageLoadError>,
    },
    RetryPage(PageKind),
    Notification(notification::Message),
    Store(Action),
    Tick(Instant), // Spinner animation and banner auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ar`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme identifier override (`light`, `dark`, `system`).
    pub theme: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TASKS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Location to open on startup. Defaults to `/`.
    pub initial_path: Option<String>,
}
