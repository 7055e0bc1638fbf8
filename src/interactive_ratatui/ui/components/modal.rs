use crate::interactive_ratatui::constants::{DIALOG_MARGIN, DIALOG_MAX_WIDTH};
use ratatui::layout::Rect;

/// Rectangle covering `percent` of `area` in both directions, centered
pub fn centered_percent(area: Rect, percent: u16) -> Rect {
    let percent = percent.min(100);
    let scale = |len: u16| (u32::from(len) * u32::from(percent) / 100) as u16;
    centered(area, scale(area.width), scale(area.height))
}

/// Dialog box sized for `content_lines` rows of text, capped to the screen
pub fn dialog_rect(area: Rect, content_lines: u16) -> Rect {
    let width = DIALOG_MAX_WIDTH.min(area.width.saturating_sub(DIALOG_MARGIN));
    let height = content_lines
        .saturating_add(2)
        .min(area.height.saturating_sub(DIALOG_MARGIN));
    centered(area, width, height)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
