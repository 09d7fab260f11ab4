//! Core data types for tab bars
//!
//! This module defines the values shared by the widget and its styles:
//! tab items, their content, and safe-area insets.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::fmt;
use std::rc::Rc;

/// Opaque renderable unit shown when a tab is selected.
///
/// Shared rather than boxed so a configured `TabBar` can be cloned.
pub type Content = Rc<dyn Fn(Rect, &mut Buffer)>;

/// One selectable tab: its content plus the icon and title shown in the bar
#[derive(Clone)]
pub struct TabItemData {
    content: Content,
    icon: String,
    title: String,
}

impl TabItemData {
    /// Create an item from a render function. Empty strings are fine.
    pub fn new<F>(content: F, icon: impl Into<String>, title: impl Into<String>) -> Self
    where
        F: Fn(Rect, &mut Buffer) + 'static,
    {
        Self {
            content: Rc::new(content),
            icon: icon.into(),
            title: title.into(),
        }
    }

    /// Create an item from any ratatui widget; it is cloned on every render
    pub fn from_widget<W>(widget: W, icon: impl Into<String>, title: impl Into<String>) -> Self
    where
        W: Widget + Clone + 'static,
    {
        Self::new(
            move |area, buf| widget.clone().render(area, buf),
            icon,
            title,
        )
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Draw this item's content into `area`
    pub fn render_content(&self, area: Rect, buf: &mut Buffer) {
        (self.content)(area, buf);
    }
}

impl fmt::Debug for TabItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabItemData")
            .field("icon", &self.icon)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Declarative shorthand for a tab item, reading icon and title first
///
/// ```ignore
/// let bar = TabBar::new([
///     tab_bar_item("house", "Home", Paragraph::new("Welcome")),
///     tab_bar_item("gear", "Settings", Paragraph::new("Options")),
/// ]);
/// ```
pub fn tab_bar_item<W>(icon: &str, title: &str, content: W) -> TabItemData
where
    W: Widget + Clone + 'static,
{
    TabItemData::from_widget(content, icon, title)
}

/// Screen margins, in cells, that the bar must keep clear of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Insets {
    pub const ZERO: Insets = Insets { top: 0, right: 0, bottom: 0, left: 0 };

    /// Insets reserving only the bottom edge
    pub fn bottom(rows: u16) -> Self {
        Self { bottom: rows, ..Self::ZERO }
    }
}

// Helper functions

/// Map an icon identifier to a terminal glyph.
///
/// Understands common SF Symbols names; anything else is shown as is.
pub fn icon_glyph(icon: &str) -> &str {
    let name = icon.strip_suffix(".fill").unwrap_or(icon);
    match name {
        "house" | "home" => "⌂",
        "gear" | "gearshape" | "settings" => "⚙",
        "person" | "person.circle" | "profile" => "☺",
        "magnifyingglass" | "search" => "⌕",
        "star" | "favorites" => "★",
        "heart" => "♥",
        "bell" | "notifications" => "♪",
        "envelope" | "mail" => "✉",
        "clock" | "time" => "◷",
        "list.bullet" | "list" => "☰",
        "folder" => "▤",
        "plus" | "plus.circle" => "+",
        _ => icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_item_accessors() {
        let item = tab_bar_item("house", "Home", Paragraph::new("welcome"));
        assert_eq!(item.icon(), "house");
        assert_eq!(item.title(), "Home");
    }

    #[test]
    fn test_empty_strings_are_legal() {
        let item = TabItemData::new(|_, _| {}, "", "");
        assert_eq!(item.icon(), "");
        assert_eq!(item.title(), "");
    }

    #[test]
    fn test_render_content() {
        let item = tab_bar_item("house", "Home", Paragraph::new("hi"));
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        item.render_content(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "h");
        assert_eq!(buf[(1, 0)].symbol(), "i");
    }

    #[test]
    fn test_icon_glyph() {
        assert_eq!(icon_glyph("house"), "⌂");
        assert_eq!(icon_glyph("house.fill"), "⌂");
        assert_eq!(icon_glyph("gear"), "⚙");
        assert_eq!(icon_glyph("🚀"), "🚀");
        assert_eq!(icon_glyph(""), "");
    }

    #[test]
    fn test_insets_bottom() {
        let insets = Insets::bottom(2);
        assert_eq!(insets.bottom, 2);
        assert_eq!(insets.top, 0);
        assert_eq!(Insets::default(), Insets::ZERO);
    }
}
