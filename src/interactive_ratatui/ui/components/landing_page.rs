use crate::interactive_ratatui::ui::components::{
    Component,
    view_layout::{Styles, ViewLayout},
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const ACTIONS: [(&str, &str); 2] = [
    ("Add Data", "Create a new pattern entry"),
    ("Manage Data", "Browse, edit and delete entries"),
];

/// Entry screen with the two navigation actions
#[derive(Default)]
pub struct LandingPage {
    selected: usize,
    notice: Option<String>,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    fn activate(&self) -> Message {
        if self.selected == 0 {
            Message::ShowCreate
        } else {
            Message::ShowManage
        }
    }
}

impl Component for LandingPage {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let layout = ViewLayout::new("Pattern Admin")
            .with_subtitle("Learning content catalog")
            .with_status_text("a: Add | m: Manage | ↑/↓ Enter: Choose | F1/?: Help | q: Quit")
            .with_notice(self.notice.clone());

        layout.render(f, area, |f, content| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(content);

            for (index, (label, description)) in ACTIONS.iter().enumerate() {
                let style = if index == self.selected {
                    Styles::selected()
                } else {
                    Styles::normal()
                };
                let button = Paragraph::new(Line::from(vec![
                    Span::styled(*label, style),
                    Span::styled(format!("  {description}"), Styles::dimmed()),
                ]))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(
                    if index == self.selected {
                        Styles::focus_border()
                    } else {
                        Styles::dimmed()
                    },
                ));
                f.render_widget(button, rows[index + 1]);
            }
        });
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match key.code {
            KeyCode::Char('a') => Some(Message::ShowCreate),
            KeyCode::Char('m') => Some(Message::ShowManage),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.selected = (self.selected + 1).min(ACTIONS.len() - 1);
                None
            }
            KeyCode::Enter => Some(self.activate()),
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            _ => None,
        }
    }
}
