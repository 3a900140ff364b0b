// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

// ==========================================================================
// General Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor the OS provide one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Theme identifier used when none is configured.
pub const DEFAULT_THEME: &str = "system";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Minimum auto-dismiss override for the notification banner (in seconds).
pub const MIN_AUTO_DISMISS_SECS: u64 = 1;

/// Maximum auto-dismiss override for the notification banner (in seconds).
pub const MAX_AUTO_DISMISS_SECS: u64 = 60;

// ==========================================================================
// Routing Defaults
// ==========================================================================

/// Location the router starts at when no initial path is given.
pub const DEFAULT_INITIAL_PATH: &str = "/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_dismiss_bounds_are_ordered() {
        assert!(MIN_AUTO_DISMISS_SECS < MAX_AUTO_DISMISS_SECS);
    }

    #[test]
    fn default_initial_path_is_absolute() {
        assert!(DEFAULT_INITIAL_PATH.starts_with('/'));
    }
}
