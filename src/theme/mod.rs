//! Theming system for Ailab
//!
//! The visible palette is the product of two persisted preferences: a display
//! mode (light or dark) and a color theme (purple, neon or cyberpunk).

mod palettes;

use ratatui::style::Color;

/// Light/dark display mode preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    /// Parse a persisted value; anything unrecognized falls back to dark
    pub fn from_name(name: &str) -> Self {
        if name == "light" { DisplayMode::Light } else { DisplayMode::Dark }
    }

    /// The value persisted to the preference store
    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

/// Color theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Purple,
    Neon,
    Cyberpunk,
}

impl ColorTheme {
    /// Parse a persisted value; anything unrecognized falls back to purple
    pub fn from_name(name: &str) -> Self {
        match name {
            "neon" => ColorTheme::Neon,
            "cyberpunk" => ColorTheme::Cyberpunk,
            _ => ColorTheme::Purple,
        }
    }

    /// The value persisted to the preference store
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Purple => "purple",
            ColorTheme::Neon => "neon",
            ColorTheme::Cyberpunk => "cyberpunk",
        }
    }

    /// Status bar icon for the theme
    pub fn icon(self) -> &'static str {
        match self {
            ColorTheme::Purple => "🟣",
            ColorTheme::Neon => "⚡",
            ColorTheme::Cyberpunk => "🌆",
        }
    }

    /// Cycle order: purple -> neon -> cyberpunk -> purple
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Purple => ColorTheme::Neon,
            ColorTheme::Neon => ColorTheme::Cyberpunk,
            ColorTheme::Cyberpunk => ColorTheme::Purple,
        }
    }
}

/// A resolved color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub code: Color,
}

impl Theme {
    /// Resolve the palette for a theme/mode combination
    pub fn resolve(theme: ColorTheme, mode: DisplayMode) -> Theme {
        match (theme, mode) {
            (ColorTheme::Purple, DisplayMode::Dark) => palettes::PURPLE_DARK,
            (ColorTheme::Purple, DisplayMode::Light) => palettes::PURPLE_LIGHT,
            (ColorTheme::Neon, DisplayMode::Dark) => palettes::NEON_DARK,
            (ColorTheme::Neon, DisplayMode::Light) => palettes::NEON_LIGHT,
            (ColorTheme::Cyberpunk, DisplayMode::Dark) => palettes::CYBERPUNK_DARK,
            (ColorTheme::Cyberpunk, DisplayMode::Light) => palettes::CYBERPUNK_LIGHT,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::resolve(ColorTheme::default(), DisplayMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_purple_dark() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Purple Dark");
    }

    #[test]
    fn unknown_mode_falls_back_to_dark() {
        assert_eq!(DisplayMode::from_name("sepia"), DisplayMode::Dark);
        assert_eq!(DisplayMode::from_name(""), DisplayMode::Dark);
        assert_eq!(DisplayMode::from_name("light"), DisplayMode::Light);
    }

    #[test]
    fn unknown_theme_falls_back_to_purple() {
        assert_eq!(ColorTheme::from_name("solarized"), ColorTheme::Purple);
        assert_eq!(ColorTheme::from_name("neon"), ColorTheme::Neon);
        assert_eq!(ColorTheme::from_name("cyberpunk"), ColorTheme::Cyberpunk);
    }

    #[test]
    fn theme_cycle_wraps_around() {
        let start = ColorTheme::Purple;
        assert_eq!(start.next(), ColorTheme::Neon);
        assert_eq!(start.next().next(), ColorTheme::Cyberpunk);
        assert_eq!(start.next().next().next(), ColorTheme::Purple);
    }

    #[test]
    fn mode_toggle_round_trips() {
        assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
        assert_eq!(DisplayMode::Dark.toggled().toggled(), DisplayMode::Dark);
    }

    #[test]
    fn every_combination_resolves() {
        for theme in [ColorTheme::Purple, ColorTheme::Neon, ColorTheme::Cyberpunk] {
            for mode in [DisplayMode::Light, DisplayMode::Dark] {
                let resolved = Theme::resolve(theme, mode);
                assert!(!resolved.name.is_empty());
            }
        }
    }
}
