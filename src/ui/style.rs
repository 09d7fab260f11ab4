//! Style capabilities for the tab bar
//!
//! A `TabItemStyle` draws one button; a `TabBarStyle` draws the container
//! around the row of buttons. `TabBar` stores them erased behind
//! `AnyTabItemStyle` / `AnyTabBarStyle`.

use crate::types::Insets;
use crate::ui::Theme;
use ratatui::{buffer::Buffer, layout::Rect, text::Text};
use std::fmt;
use std::rc::Rc;

/// Layout context handed to a `TabBarStyle`
#[derive(Debug, Clone, Copy)]
pub struct BarGeometry<'a> {
    /// Region reserved for the bar, including the bottom safe-area strip
    pub area: Rect,
    pub safe_area: Insets,
    pub theme: &'a Theme,
}

impl BarGeometry<'_> {
    /// The bar region with the bottom safe-area inset removed
    pub fn padded_area(&self) -> Rect {
        Rect {
            height: self.area.height.saturating_sub(self.safe_area.bottom),
            ..self.area
        }
    }
}

/// Renders a single tab button
pub trait TabItemStyle {
    fn make_tab_item(
        &self,
        icon: &str,
        title: &str,
        is_selected: bool,
        theme: &Theme,
    ) -> Text<'static>;
}

/// Renders the bar container.
///
/// `items` draws the assembled button row into whichever rect it is
/// given. A style may call it once, or not at all to hide the row.
pub trait TabBarStyle {
    fn make_tab_bar(
        &self,
        geometry: &BarGeometry<'_>,
        items: &mut dyn FnMut(Rect, &mut Buffer),
        buf: &mut Buffer,
    );
}

/// Type-erased `TabItemStyle`
#[derive(Clone)]
pub struct AnyTabItemStyle(Rc<dyn TabItemStyle>);

impl AnyTabItemStyle {
    pub fn new<S: TabItemStyle + 'static>(style: S) -> Self {
        Self(Rc::new(style))
    }
}

impl TabItemStyle for AnyTabItemStyle {
    fn make_tab_item(
        &self,
        icon: &str,
        title: &str,
        is_selected: bool,
        theme: &Theme,
    ) -> Text<'static> {
        self.0.make_tab_item(icon, title, is_selected, theme)
    }
}

impl fmt::Debug for AnyTabItemStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyTabItemStyle")
    }
}

/// Type-erased `TabBarStyle`
#[derive(Clone)]
pub struct AnyTabBarStyle(Rc<dyn TabBarStyle>);

impl AnyTabBarStyle {
    pub fn new<S: TabBarStyle + 'static>(style: S) -> Self {
        Self(Rc::new(style))
    }
}

impl TabBarStyle for AnyTabBarStyle {
    fn make_tab_bar(
        &self,
        geometry: &BarGeometry<'_>,
        items: &mut dyn FnMut(Rect, &mut Buffer),
        buf: &mut Buffer,
    ) {
        self.0.make_tab_bar(geometry, items, buf);
    }
}

impl fmt::Debug for AnyTabBarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyTabBarStyle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    struct Upper;

    impl TabItemStyle for Upper {
        fn make_tab_item(
            &self,
            _icon: &str,
            title: &str,
            is_selected: bool,
            _theme: &Theme,
        ) -> Text<'static> {
            let label = if is_selected { title.to_uppercase() } else { title.to_string() };
            Text::from(Line::raw(label))
        }
    }

    struct WholeArea;

    impl TabBarStyle for WholeArea {
        fn make_tab_bar(
            &self,
            geometry: &BarGeometry<'_>,
            items: &mut dyn FnMut(Rect, &mut Buffer),
            buf: &mut Buffer,
        ) {
            items(geometry.area, buf);
        }
    }

    #[test]
    fn test_item_wrapper_delegates() {
        let theme = Theme::default();
        let erased = AnyTabItemStyle::new(Upper);
        assert_eq!(
            erased.make_tab_item("x", "home", true, &theme),
            Upper.make_tab_item("x", "home", true, &theme)
        );
        assert_eq!(
            erased.make_tab_item("x", "home", false, &theme),
            Text::raw("home")
        );
    }

    #[test]
    fn test_bar_wrapper_delegates() {
        let theme = Theme::default();
        let area = Rect::new(2, 3, 10, 4);
        let geometry = BarGeometry { area, safe_area: Insets::ZERO, theme: &theme };
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));

        let mut seen = Vec::new();
        AnyTabBarStyle::new(WholeArea).make_tab_bar(
            &geometry,
            &mut |rect, _| seen.push(rect),
            &mut buf,
        );
        assert_eq!(seen, vec![area]);
    }

    #[test]
    fn test_padded_area_removes_bottom_inset() {
        let theme = Theme::default();
        let geometry = BarGeometry {
            area: Rect::new(0, 10, 40, 5),
            safe_area: Insets::bottom(1),
            theme: &theme,
        };
        assert_eq!(geometry.padded_area(), Rect::new(0, 10, 40, 4));

        let tiny = BarGeometry { safe_area: Insets::bottom(9), ..geometry };
        assert_eq!(tiny.padded_area().height, 0);
    }
}
