//! Reusable layout builders for consistent screen structure.
//!
//! These functions provide standard layouts that all screens should use
//! to ensure consistent margins, spacing, and element positioning.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT, TOAST_HEIGHT, TOAST_WIDTH};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a fixed-size box inside `area`, clamped to the area's size.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Slot for the `index`-th toast, stacked down from the top-right corner.
///
/// Returns None when the slot would not fit on screen.
pub fn toast_slot(index: u16, area: Rect) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let y = area.y + 1 + index * TOAST_HEIGHT;
    if y + TOAST_HEIGHT > area.y + area.height {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - width,
        y,
        width,
        height: TOAST_HEIGHT,
    })
}
