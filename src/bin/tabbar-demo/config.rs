//! Configuration management for tabbar-demo
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/tabbar/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tabbar::{
    AnyTabBarStyle, DefaultTabBarStyle, FloatingTabBarStyle, PlainTabBarStyle, ThemeName,
    TransparentTabBarStyle, DEFAULT_ITEM_SPACING,
};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub bar_style: BarStyleName,
    pub item_spacing: u16,
    /// Rows kept free below the bar (the status line lives there)
    pub safe_area_bottom: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Gruvbox,
            bar_style: BarStyleName::Default,
            item_spacing: DEFAULT_ITEM_SPACING,
            safe_area_bottom: 1,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tabbar");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Load config from file, or create default if not exists
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Built-in bar styles selectable from config and CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BarStyleName {
    #[default]
    Default,
    Transparent,
    Floating,
    Plain,
}

impl BarStyleName {
    pub fn all() -> &'static [BarStyleName] {
        &[
            BarStyleName::Default,
            BarStyleName::Transparent,
            BarStyleName::Floating,
            BarStyleName::Plain,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BarStyleName::Default => "Default",
            BarStyleName::Transparent => "Transparent",
            BarStyleName::Floating => "Floating",
            BarStyleName::Plain => "Plain",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            BarStyleName::Default => BarStyleName::Transparent,
            BarStyleName::Transparent => BarStyleName::Floating,
            BarStyleName::Floating => BarStyleName::Plain,
            BarStyleName::Plain => BarStyleName::Default,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
    }

    pub fn style(&self) -> AnyTabBarStyle {
        match self {
            BarStyleName::Default => AnyTabBarStyle::new(DefaultTabBarStyle),
            BarStyleName::Transparent => AnyTabBarStyle::new(TransparentTabBarStyle),
            BarStyleName::Floating => AnyTabBarStyle::new(FloatingTabBarStyle),
            BarStyleName::Plain => AnyTabBarStyle::new(PlainTabBarStyle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Gruvbox);
        assert_eq!(config.bar_style, BarStyleName::Default);
        assert_eq!(config.item_spacing, DEFAULT_ITEM_SPACING);
        assert_eq!(config.safe_area_bottom, 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config =
            toml::from_str("bar_style = \"floating\"\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.bar_style, BarStyleName::Floating);
        assert_eq!(config.theme, ThemeName::Nord);
        assert_eq!(config.item_spacing, DEFAULT_ITEM_SPACING);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(toml::from_str::<Config>("bar_style = \"glass\"").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("tabbar-config-test-{}", std::process::id()))
            .join("config.toml");

        let config = Config {
            bar_style: BarStyleName::Plain,
            item_spacing: 3,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_style_cycle() {
        let style = BarStyleName::Default;
        assert_eq!(style.next(), BarStyleName::Transparent);
        assert_eq!(style.next().next(), BarStyleName::Floating);
        assert_eq!(style.next().next().next(), BarStyleName::Plain);
        assert_eq!(style.next().next().next().next(), BarStyleName::Default);
    }

    #[test]
    fn test_parse_style_name() {
        assert_eq!(BarStyleName::parse("plain"), Some(BarStyleName::Plain));
        assert_eq!(BarStyleName::parse("Floating"), Some(BarStyleName::Floating));
        assert_eq!(BarStyleName::parse("glass"), None);
    }
}
