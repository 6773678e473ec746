//! Lookup over the built-in palettes
//!
//! Names come from the config file and `--theme`, so lookups ignore case and
//! surrounding whitespace.

use venue_core::constants::config::DEFAULT_THEME;

use super::definitions::BUILTIN_THEMES;
use super::Theme;

/// Built-in themes in listing order
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    /// Index of the fallback theme
    default: usize,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        let themes: Vec<Theme> = BUILTIN_THEMES.iter().map(|build| build()).collect();
        let default = themes
            .iter()
            .position(|t| t.name == DEFAULT_THEME)
            .unwrap_or(0);
        Self { themes, default }
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        let name = name.trim();
        self.themes
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Unknown names log a warning and fall back to the default palette
    pub fn get_or_default(&self, name: &str) -> &Theme {
        match self.get(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = %name, "Unknown theme, falling back to default");
                &self.themes[self.default]
            }
        }
    }

    pub fn list(&self) -> &[Theme] {
        &self.themes
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get(" Paper ").map(|t| t.name.as_str()), Some("paper"));
        assert!(registry.get("sepia").is_none());
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("sepia").name, DEFAULT_THEME);
        assert_eq!(registry.get_or_default("").name, DEFAULT_THEME);
    }

    #[test]
    fn test_list_keeps_builtin_order() {
        let registry = ThemeRegistry::new();
        let names: Vec<_> = registry.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["venues", "paper", "midnight", "terminal"]);
    }

    #[test]
    fn test_palettes_are_distinct_and_readable() {
        let registry = ThemeRegistry::new();
        let names: HashSet<_> = registry.list().iter().map(|t| &t.name).collect();
        assert_eq!(names.len(), registry.list().len());

        for theme in registry.list() {
            assert_ne!(theme.error_color, theme.success_color, "{}", theme.name);
            assert_ne!(
                theme.selection_fg_color, theme.selection_bg_color,
                "{}",
                theme.name
            );
            assert_ne!(theme.accent_color, theme.border_color, "{}", theme.name);
            assert!(!theme.display_name.is_empty());
        }
    }
}
