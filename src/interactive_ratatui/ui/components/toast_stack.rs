use crate::interactive_ratatui::application::notifier::{Toast, ToastKind};
use crate::interactive_ratatui::constants::TOAST_WIDTH;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Notification column drawn in the top-right corner above everything else
#[derive(Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_toasts<'a>(&mut self, toasts: impl Iterator<Item = &'a Toast>) {
        self.toasts.clear();
        self.toasts.extend(toasts.cloned());
    }

    fn icon(kind: ToastKind) -> &'static str {
        match kind {
            ToastKind::Loading => "…",
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }

    /// Newest toast on top; stops when the screen runs out of rows
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        let inner_width = width.saturating_sub(4).max(1) as usize;
        let mut y = area.y;

        for toast in self.toasts.iter().rev() {
            let text = format!("{} {}", Self::icon(toast.kind), toast.text);
            let text_rows = text.chars().count().div_ceil(inner_width).max(1) as u16;
            let height = text_rows + 2;
            if y + height > area.y + area.height {
                break;
            }

            let rect = Rect::new(area.x + area.width - width, y, width, height);
            let style = Styles::toast(toast.kind);
            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(text, style)))
                    .block(Block::default().borders(Borders::ALL).border_style(style))
                    .wrap(Wrap { trim: true }),
                rect,
            );
            y += height;
        }
    }
}
