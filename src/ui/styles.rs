//! Built-in styles
//!
//! Bar styles: Default, Transparent, Floating and Plain. They differ only
//! in background, padding and shape. Item style: Default.

use crate::types::icon_glyph;
use crate::ui::style::{BarGeometry, TabBarStyle, TabItemStyle};
use crate::ui::{widgets, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Text},
    widgets::{Block, BorderType, Clear, Padding, Widget},
};

/// Size of the floating box, in cells
pub const FLOATING_WIDTH: u16 = 30;
pub const FLOATING_HEIGHT: u16 = 4;

/// Icon above title, accent colour when selected
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTabItemStyle;

impl TabItemStyle for DefaultTabItemStyle {
    fn make_tab_item(
        &self,
        icon: &str,
        title: &str,
        is_selected: bool,
        theme: &Theme,
    ) -> Text<'static> {
        let style = if is_selected {
            theme.tab_active()
        } else {
            theme.tab_inactive()
        };

        Text::from(vec![
            Line::styled(icon_glyph(icon).to_owned(), style),
            Line::styled(title.to_owned(), style),
        ])
        .alignment(Alignment::Center)
    }
}

/// Row drawn straight over the content, above the safe area
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTabBarStyle;

impl TabBarStyle for DefaultTabBarStyle {
    fn make_tab_bar(
        &self,
        geometry: &BarGeometry<'_>,
        items: &mut dyn FnMut(Rect, &mut Buffer),
        buf: &mut Buffer,
    ) {
        items(geometry.padded_area(), buf);
    }
}

/// Same rendering as `DefaultTabBarStyle`, kept as its own hook
#[derive(Debug, Clone, Copy, Default)]
pub struct TransparentTabBarStyle;

impl TabBarStyle for TransparentTabBarStyle {
    fn make_tab_bar(
        &self,
        geometry: &BarGeometry<'_>,
        items: &mut dyn FnMut(Rect, &mut Buffer),
        buf: &mut Buffer,
    ) {
        items(geometry.padded_area(), buf);
    }
}

/// Fixed-size rounded box, centred at the bottom
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatingTabBarStyle;

impl TabBarStyle for FloatingTabBarStyle {
    fn make_tab_bar(
        &self,
        geometry: &BarGeometry<'_>,
        items: &mut dyn FnMut(Rect, &mut Buffer),
        buf: &mut Buffer,
    ) {
        let area = widgets::bottom_centered_rect(
            FLOATING_WIDTH,
            FLOATING_HEIGHT,
            geometry.padded_area(),
        );
        if area.is_empty() {
            return;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .style(geometry.theme.floating());
        let inner = block.inner(area);

        Clear.render(area, buf);
        block.render(area, buf);
        items(inner, buf);
    }
}

/// Full-width opaque strip covering the safe area too
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTabBarStyle;

impl TabBarStyle for PlainTabBarStyle {
    fn make_tab_bar(
        &self,
        geometry: &BarGeometry<'_>,
        items: &mut dyn FnMut(Rect, &mut Buffer),
        buf: &mut Buffer,
    ) {
        Clear.render(geometry.area, buf);
        Block::new().style(geometry.theme.bar()).render(geometry.area, buf);

        let inner = Block::new()
            .padding(Padding::uniform(1))
            .inner(geometry.padded_area());
        items(inner, buf);
    }
}
