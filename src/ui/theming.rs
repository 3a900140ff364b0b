// SPDX-License-Identifier: MPL-2.0
//! Theme identifiers and the palettes they map to.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub text_primary: Color,
    pub brand_primary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            brand_primary: palette::PRIMARY_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            text_primary: palette::WHITE,
            brand_primary: palette::PRIMARY_400,
        }
    }
}

/// Known theme identifiers. The stored theme stays a free-form string; this
/// is only the interpretation used to pick a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Parses a theme identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Identifier written to the store and applied as the root class.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// i18n key of the human-readable name.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Maps a theme identifier (the document root class) to an Iced theme.
/// Unknown identifiers use the dark palette.
#[must_use]
pub fn iced_theme(id: &str) -> Theme {
    let dark = ThemeMode::from_id(id).map_or(true, ThemeMode::is_dark);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Colour scheme matching [`iced_theme`] for the same identifier.
#[must_use]
pub fn color_scheme(id: &str) -> ColorScheme {
    if ThemeMode::from_id(id).map_or(true, ThemeMode::is_dark) {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn ids_round_trip() {
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::from_id(mode.id()), Some(mode));
        }
        assert_eq!(ThemeMode::from_id(" DARK "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_id("solarized"), None);
    }

    #[test]
    fn explicit_ids_map_to_iced_themes() {
        assert!(matches!(iced_theme("light"), Theme::Light));
        assert!(matches!(iced_theme("dark"), Theme::Dark));
        assert!(matches!(iced_theme("high-contrast"), Theme::Dark));
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; only check it does not panic.
        let _ = ThemeMode::System.is_dark();
    }
}
