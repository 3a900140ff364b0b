// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Theme and language choices made in the settings page are written back to
//! `settings.toml`, preserving the other sections of the file.

use crate::config;
use crate::store::{Notice, Store};
use std::path::PathBuf;

/// Persists the current theme and locale, returning the notice to show.
pub(super) fn persist_preferences(store: &Store, config_dir: Option<PathBuf>) -> Notice {
    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.theme = Some(store.themes().theme().to_string());
    cfg.general.language = Some(store.locales().locale().to_string());

    match config::save_with_override(&cfg, config_dir) {
        Ok(()) => {
            tracing::debug!("preferences saved");
            Notice::success("notification-preferences-saved")
        }
        Err(err) => {
            tracing::warn!(%err, "failed to save preferences");
            Notice::error("notification-config-save-error").with_arg("reason", err.to_string())
        }
    }
}
