use crate::interactive_ratatui::ui::components::{Component, modal::dialog_rect, view_layout::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Delete confirmation modal
#[derive(Default)]
pub struct ConfirmDialog {
    pattern_name: String,
    busy: bool,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, pattern_name: &str, busy: bool) {
        if self.pattern_name != pattern_name {
            self.pattern_name = pattern_name.to_string();
        }
        self.busy = busy;
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(""),
            Line::from("Are you sure you want to delete this data? This action cannot be undone."),
        ];
        if !self.pattern_name.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.pattern_name.as_str(),
                Styles::title(),
            )));
        }
        lines.push(Line::from(""));
        if self.busy {
            lines.push(Line::from(Span::styled("Deleting...", Styles::dimmed())));
        } else {
            lines.push(Line::from(vec![
                Span::styled("[Enter/y] Delete", Styles::error()),
                Span::raw("    "),
                Span::styled("[Esc/n] Cancel", Styles::normal()),
            ]));
        }
        lines
    }
}

impl Component for ConfirmDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines = self.lines();
        // Body line wraps on narrow screens
        let dialog_area = dialog_rect(area, lines.len() as u16 + 1);

        f.render_widget(Clear, dialog_area);
        let dialog = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Confirm Deletion ")
                    .borders(Borders::ALL)
                    .border_style(Styles::error()),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') if !self.busy => Some(Message::ConfirmDelete),
            KeyCode::Esc | KeyCode::Char('n') => Some(Message::CloseDeleteModal),
            _ => None,
        }
    }
}
