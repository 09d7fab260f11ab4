//! The tab bar widget
//!
//! `TabBar` owns an ordered list of tabs and the selected index. Rendering
//! draws the selected tab's content over the whole area, then lets the
//! active `TabBarStyle` draw the bar along the bottom edge. Button rects
//! from the last render are kept so mouse clicks can be mapped back to tabs.

use crate::types::{Insets, TabItemData};
use crate::ui::style::{
    AnyTabBarStyle, AnyTabItemStyle, BarGeometry, TabBarStyle, TabItemStyle,
};
use crate::ui::styles::{DefaultTabBarStyle, DefaultTabItemStyle};
use crate::ui::{widgets, Theme};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    text::Text,
    widgets::{Paragraph, Widget},
};

/// Default gap between buttons, in columns
pub const DEFAULT_ITEM_SPACING: u16 = 6;

/// Rows reserved for the bar above the bottom safe area
pub const BAR_HEIGHT: u16 = 4;

/// Clickable region of one rendered button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub index: usize,
    pub rect: Rect,
}

/// Bottom tab bar with pluggable styles
#[derive(Debug, Clone)]
pub struct TabBar {
    items: Vec<TabItemData>,
    selected_index: usize,
    item_spacing: u16,
    tab_bar_style: AnyTabBarStyle,
    tab_item_style: AnyTabItemStyle,
    theme: Theme,
    safe_area: Insets,
    hit_areas: Vec<HitArea>,
}

impl TabBar {
    /// Create a tab bar with the default item spacing. An empty list is fine.
    pub fn new(items: impl IntoIterator<Item = TabItemData>) -> Self {
        Self::with_spacing(DEFAULT_ITEM_SPACING, items)
    }

    /// Create a tab bar with a custom gap between buttons
    pub fn with_spacing(item_spacing: u16, items: impl IntoIterator<Item = TabItemData>) -> Self {
        Self {
            items: items.into_iter().collect(),
            selected_index: 0,
            item_spacing,
            tab_bar_style: AnyTabBarStyle::new(DefaultTabBarStyle),
            tab_item_style: AnyTabItemStyle::new(DefaultTabItemStyle),
            theme: Theme::default(),
            safe_area: Insets::ZERO,
            hit_areas: Vec::new(),
        }
    }

    // === CONFIGURATION ===

    pub fn with_tab_bar_style<S: TabBarStyle + 'static>(mut self, style: S) -> Self {
        self.tab_bar_style = AnyTabBarStyle::new(style);
        self
    }

    pub fn with_tab_item_style<S: TabItemStyle + 'static>(mut self, style: S) -> Self {
        self.tab_item_style = AnyTabItemStyle::new(style);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    // === QUERIES ===

    pub fn items(&self) -> &[TabItemData] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The selected item, or `None` when the index is out of range
    pub fn selected_item(&self) -> Option<&TabItemData> {
        self.items.get(self.selected_index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected_index
    }

    pub fn item_spacing(&self) -> u16 {
        self.item_spacing
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn safe_area(&self) -> Insets {
        self.safe_area
    }

    /// Button regions from the most recent render
    pub fn hit_areas(&self) -> &[HitArea] {
        &self.hit_areas
    }

    // === INTERACTION ===

    /// Tap the button at `index`. Returns false if there is no such button.
    pub fn tap(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };

        if index != self.selected_index {
            tracing::debug!(
                from = self.selected_index,
                to = index,
                title = item.title(),
                "tab selected"
            );
        }
        self.selected_index = index;
        true
    }

    /// Index of the button drawn at a screen cell, if any
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position { x: column, y: row };
        self.hit_areas
            .iter()
            .find(|hit| hit.rect.contains(position))
            .map(|hit| hit.index)
    }

    /// Tap the button under a left click. Returns true if a tab was hit.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.tab_at(event.column, event.row) {
            Some(index) => self.tap(index),
            None => false,
        }
    }
}

impl Widget for &mut TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);

        if let Some(item) = self.items.get(self.selected_index) {
            item.render_content(area, buf);
        }

        let geometry = BarGeometry {
            area: widgets::bottom_rows(BAR_HEIGHT.saturating_add(self.safe_area.bottom), area),
            safe_area: self.safe_area,
            theme: &self.theme,
        };

        let items = &self.items;
        let item_style = &self.tab_item_style;
        let theme = &self.theme;
        let selected = self.selected_index;
        let spacing = self.item_spacing;

        let mut hits = Vec::new();
        let mut button_row = |rect: Rect, buf: &mut Buffer| {
            let buttons: Vec<Text<'static>> = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item_style.make_tab_item(item.icon(), item.title(), index == selected, theme)
                })
                .collect();
            hits = layout_row(&buttons, spacing, rect, buf);
        };

        self.tab_bar_style.make_tab_bar(&geometry, &mut button_row, buf);
        self.hit_areas = hits;
    }
}

/// Lay buttons out left to right, centred in `rect`, `spacing` apart.
///
/// A row too wide for `rect` first gives up spacing (down to one column),
/// then narrows its widest buttons. Buttons that still start past the right
/// edge are dropped.
fn layout_row(buttons: &[Text<'_>], spacing: u16, rect: Rect, buf: &mut Buffer) -> Vec<HitArea> {
    let rect = rect.intersection(buf.area);
    if rect.is_empty() || buttons.is_empty() {
        return Vec::new();
    }

    let mut widths: Vec<u16> = buttons
        .iter()
        .map(|button| u16::try_from(button.width()).unwrap_or(u16::MAX))
        .collect();
    let (spacing, total) = fit_row(&mut widths, spacing, rect.width);

    let mut x = rect.x + rect.width.saturating_sub(total) / 2;
    let mut hits = Vec::with_capacity(buttons.len());

    for (index, (button, width)) in buttons.iter().zip(widths).enumerate() {
        if x >= rect.right() {
            break;
        }
        let height = u16::try_from(button.height())
            .unwrap_or(u16::MAX)
            .min(rect.height);
        let button_rect = Rect {
            x,
            y: rect.y + (rect.height - height) / 2,
            width: width.min(rect.right() - x),
            height,
        };

        Paragraph::new(button.clone())
            .alignment(Alignment::Center)
            .render(button_rect, buf);
        hits.push(HitArea { index, rect: button_rect });

        x = x.saturating_add(width).saturating_add(spacing);
    }

    hits
}

/// Squeeze a row into `available` columns, narrowing `widths` in place.
/// Returns the spacing to use and the resulting row width.
fn fit_row(widths: &mut [u16], spacing: u16, available: u16) -> (u16, u16) {
    let available = u32::from(available);
    let gaps = widths.len().saturating_sub(1) as u32;
    let sum = |widths: &[u16]| widths.iter().map(|w| u32::from(*w)).sum::<u32>();
    let row_width = |widths: &[u16], spacing: u16| sum(widths) + u32::from(spacing) * gaps;

    let mut spacing = spacing;
    if gaps > 0 && row_width(widths, spacing) > available {
        let narrowest = spacing.min(1);
        spacing = match available.checked_sub(sum(widths)) {
            Some(free) if free >= u32::from(narrowest) * gaps => {
                u16::try_from(free / gaps).unwrap_or(spacing).min(spacing)
            }
            _ => narrowest,
        };
    }

    let budget = available.saturating_sub(u32::from(spacing) * gaps);
    if sum(widths) > budget {
        let capped = |cap: u16| widths.iter().map(|w| u32::from((*w).min(cap))).sum::<u32>();
        let mut cap = widths.iter().copied().max().unwrap_or(0);
        while cap > 1 && capped(cap) > budget {
            cap -= 1;
        }
        for width in widths.iter_mut() {
            *width = (*width).min(cap);
        }
    }

    let total = u16::try_from(row_width(widths, spacing)).unwrap_or(u16::MAX);
    (spacing, total)
}
