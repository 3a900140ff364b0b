// SPDX-License-Identifier: MPL-2.0
//! Document root class list and the effect that keeps it in sync with the
//! stored theme.
//!
//! The root's class names the active theme; the Iced palette is derived from
//! it. [`ThemeEffect`] is the only writer.

/// Class attribute of the application's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: Vec<String>,
}

impl DocumentRoot {
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The theme class, if one is applied.
    #[must_use]
    pub fn active_class(&self) -> Option<&str> {
        self.classes.first().map(String::as_str)
    }

    fn clear(&mut self) {
        self.classes.clear();
    }

    fn add(&mut self, class: &str) {
        // Empty class names are not valid tokens.
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }
}

/// Applies the stored theme to the document root when it changes.
#[derive(Debug, Clone, Default)]
pub struct ThemeEffect {
    applied: Option<String>,
}

impl ThemeEffect {
    /// Runs the effect. The first call always applies; later calls apply
    /// only if `theme` differs from the last applied value. Returns whether
    /// the root was rewritten.
    pub fn sync(&mut self, theme: &str, root: &mut DocumentRoot) -> bool {
        if self.applied.as_deref() == Some(theme) {
            return false;
        }
        root.clear();
        root.add(theme);
        tracing::info!(theme, "theme applied");
        self.applied = Some(theme.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sync_applies_on_mount() {
        let mut root = DocumentRoot::default();
        let mut effect = ThemeEffect::default();

        assert!(effect.sync("light", &mut root));
        assert_eq!(root.classes(), ["light".to_string()]);
    }

    #[test]
    fn theme_change_leaves_exactly_the_new_class() {
        let mut root = DocumentRoot::default();
        let mut effect = ThemeEffect::default();
        effect.sync("light", &mut root);

        assert!(effect.sync("dark", &mut root));
        assert_eq!(root.classes(), ["dark".to_string()]);
        assert_eq!(root.active_class(), Some("dark"));
    }

    #[test]
    fn unchanged_theme_does_not_rerun() {
        let mut root = DocumentRoot::default();
        let mut effect = ThemeEffect::default();
        effect.sync("dark", &mut root);

        assert!(!effect.sync("dark", &mut root));
        assert_eq!(root.classes().len(), 1);
    }

    #[test]
    fn empty_theme_clears_root() {
        let mut root = DocumentRoot::default();
        let mut effect = ThemeEffect::default();
        effect.sync("dark", &mut root);

        assert!(effect.sync("", &mut root));
        assert!(root.classes().is_empty());
        assert_eq!(root.active_class(), None);
    }
}
