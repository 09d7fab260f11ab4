//! Theme definitions for tab bars
//!
//! Provides three built-in themes: Gruvbox, Nord, and Transparent.
//! The theme is the ambient environment handed to every style, so a
//! style can colour itself without holding any state of its own.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Transparent,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Gruvbox, ThemeName::Nord, ThemeName::Transparent]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Gruvbox => "Gruvbox",
            ThemeName::Nord => "Nord",
            ThemeName::Transparent => "Transparent",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Gruvbox => ThemeName::Nord,
            ThemeName::Nord => ThemeName::Transparent,
            ThemeName::Transparent => ThemeName::Gruvbox,
        }
    }

    /// Parse a theme name case-insensitively (used for CLI flags)
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
    }
}

/// Complete theme with all colors used by the built-in styles
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,

    // Bar backgrounds
    pub bar_bg: Color,
    pub floating_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox()
    }
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark theme (default)
    pub fn gruvbox() -> Self {
        Self {
            // Base
            bg: Color::Rgb(40, 40, 40),           // #282828
            fg: Color::Rgb(235, 219, 178),        // #ebdbb2
            fg_dim: Color::Rgb(146, 131, 116),    // #928374

            // Accent (blue)
            accent: Color::Rgb(131, 165, 152),    // #83a598
            accent_dim: Color::Rgb(69, 133, 136), // #458588

            // UI elements
            border: Color::Rgb(80, 73, 69),            // #504945
            border_focused: Color::Rgb(168, 153, 132), // #a89984

            // Bars
            bar_bg: Color::Rgb(60, 56, 54),        // #3c3836
            floating_bg: Color::Rgb(126, 128, 39), // #b8bb26 at 60% over bg
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            // Base (Polar Night)
            bg: Color::Rgb(46, 52, 64),           // #2e3440
            fg: Color::Rgb(236, 239, 244),        // #eceff4
            fg_dim: Color::Rgb(76, 86, 106),      // #4c566a

            // Accent (Frost - blue)
            accent: Color::Rgb(136, 192, 208),    // #88c0d0
            accent_dim: Color::Rgb(94, 129, 172), // #5e81ac

            // UI elements
            border: Color::Rgb(59, 66, 82),            // #3b4252
            border_focused: Color::Rgb(136, 192, 208), // #88c0d0

            // Bars
            bar_bg: Color::Rgb(59, 66, 82),         // #3b4252
            floating_bg: Color::Rgb(116, 135, 110), // #a3be8c at 60% over bg
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            // Base - use terminal defaults
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            // Accent
            accent: Color::Blue,
            accent_dim: Color::Cyan,

            // UI elements
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            // Bars
            bar_bg: Color::White,
            floating_bg: Color::Green,
        }
    }

    // Style helpers for common UI patterns

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab item style (inactive). Foreground only, so the item
    /// inherits whatever background the bar style painted.
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    /// Tab item style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Opaque full-width bar background
    pub fn bar(&self) -> Style {
        Style::default().bg(self.bar_bg)
    }

    /// Floating bar box
    pub fn floating(&self) -> Style {
        Style::default().fg(self.accent_dim).bg(self.floating_bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let gruvbox = Theme::from_name(ThemeName::Gruvbox);
        assert_eq!(gruvbox.bg, Color::Rgb(40, 40, 40));

        let nord = Theme::from_name(ThemeName::Nord);
        assert_eq!(nord.bg, Color::Rgb(46, 52, 64));

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert_eq!(transparent.bg, Color::Reset);
    }

    #[test]
    fn test_theme_cycle() {
        let theme = ThemeName::Gruvbox;
        assert_eq!(theme.next(), ThemeName::Nord);
        assert_eq!(theme.next().next(), ThemeName::Transparent);
        assert_eq!(theme.next().next().next(), ThemeName::Gruvbox);
    }

    #[test]
    fn test_parse_theme_name() {
        assert_eq!(ThemeName::parse("nord"), Some(ThemeName::Nord));
        assert_eq!(ThemeName::parse("GRUVBOX"), Some(ThemeName::Gruvbox));
        assert_eq!(ThemeName::parse("solarized"), None);
    }

    #[test]
    fn test_default_is_gruvbox() {
        assert_eq!(Theme::default(), Theme::gruvbox());
    }

    #[test]
    fn test_floating_bg_blends_green_over_bg() {
        // 60% of `green` over `bg`, rounded
        fn blend(green: (u8, u8, u8), bg: Color) -> Color {
            let Color::Rgb(r, g, b) = bg else {
                panic!("theme bg is not rgb");
            };
            let mix = |top: u8, under: u8| {
                ((f32::from(top) * 0.6 + f32::from(under) * 0.4).round()) as u8
            };
            Color::Rgb(mix(green.0, r), mix(green.1, g), mix(green.2, b))
        }

        let gruvbox = Theme::gruvbox();
        assert_eq!(gruvbox.floating_bg, blend((184, 187, 38), gruvbox.bg));
        let nord = Theme::nord();
        assert_eq!(nord.floating_bg, blend((163, 190, 140), nord.bg));
    }
}
