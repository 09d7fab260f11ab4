//! User Interface layer
//!
//! This module contains the tab bar and everything it renders with:
//! - Theme definitions and colors
//! - Style capabilities and their erased wrappers
//! - Built-in bar and item styles
//! - The `TabBar` widget itself
//! - Layout helpers

pub mod style;
pub mod styles;
pub mod tab_bar;
pub mod theme;
pub mod widgets;

pub use style::{AnyTabBarStyle, AnyTabItemStyle, BarGeometry, TabBarStyle, TabItemStyle};
pub use styles::{
    DefaultTabBarStyle, DefaultTabItemStyle, FloatingTabBarStyle, PlainTabBarStyle,
    TransparentTabBarStyle,
};
pub use tab_bar::{HitArea, TabBar, BAR_HEIGHT, DEFAULT_ITEM_SPACING};
pub use theme::{Theme, ThemeName};
