//! Layout helpers
//!
//! Rect arithmetic shared by the bar styles and by hosts placing things
//! around a tab bar.

use ratatui::layout::Rect;

/// Helper: Create a centered rect of given size, clamped to `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect { x, y, width, height }
}

/// Helper: Rect of given size, centered horizontally on the bottom edge of `area`
pub fn bottom_centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height - height;
    Rect { x, y, width, height }
}

/// Helper: Bottom `height` rows of `area`
pub fn bottom_rows(height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + area.height - height,
        height,
        ..area
    }
}
