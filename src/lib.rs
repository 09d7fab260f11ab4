//! tabbar - a bottom tab bar for ratatui
//!
//! Register a fixed set of content tabs and switch between them by
//! clicking (or tapping) their buttons. The bar container and the
//! individual buttons are drawn by pluggable styles.
//!
//! ```ignore
//! use ratatui::widgets::Paragraph;
//! use tabbar::{tab_bar_item, FloatingTabBarStyle, TabBar};
//!
//! let mut bar = TabBar::new([
//!     tab_bar_item("house", "Home", Paragraph::new("Welcome home")),
//!     tab_bar_item("gear", "Settings", Paragraph::new("Nothing to set")),
//! ])
//! .with_tab_bar_style(FloatingTabBarStyle);
//!
//! terminal.draw(|frame| frame.render_widget(&mut bar, frame.area()))?;
//! ```

pub mod types;
pub mod ui;

pub use types::{icon_glyph, tab_bar_item, Content, Insets, TabItemData};
pub use ui::{
    AnyTabBarStyle, AnyTabItemStyle, BarGeometry, DefaultTabBarStyle, DefaultTabItemStyle,
    FloatingTabBarStyle, HitArea, PlainTabBarStyle, TabBar, TabBarStyle, TabItemStyle, Theme,
    ThemeName, TransparentTabBarStyle, BAR_HEIGHT, DEFAULT_ITEM_SPACING,
};
