use crate::interactive_ratatui::ui::components::{Component, modal::dialog_rect, view_layout::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, Styles::label()))
    }

    /// Key reference shown by the overlay and by `--help-keys`
    pub fn help_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("Pattern Admin - Key Bindings", Styles::title())),
            Line::from(""),
            Self::section("Everywhere:"),
            Line::from("  F1          - Show this help"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Self::section("Home:"),
            Line::from("  a / m       - Add data / Manage data"),
            Line::from("  ↑/↓, Enter  - Choose an action"),
            Line::from("  q / Esc     - Quit"),
            Line::from(""),
            Self::section("Add Data / Edit form:"),
            Line::from("  Tab/↓, Shift+Tab/↑ - Next / previous field"),
            Line::from("  Ctrl+S      - Save"),
            Line::from("  Ctrl+N      - Add a practice question"),
            Line::from("  Ctrl+R      - Remove the focused practice question"),
            Line::from("  Ctrl+A/E/W/U/K - Line editing"),
            Line::from("  Esc         - Back / close"),
            Line::from(""),
            Self::section("Manage Data:"),
            Line::from("  ↑/↓, PgUp/PgDn, Home/End - Select a row"),
            Line::from("  Enter / e   - Edit the selected record"),
            Line::from("  d / Delete  - Delete the selected record"),
            Line::from("  r           - Refresh the list"),
            Line::from("  Esc         - Back to home"),
            Line::from(""),
            Self::section("Delete confirmation:"),
            Line::from("  Enter / y   - Delete"),
            Line::from("  Esc / n     - Cancel"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }

    /// Help as plain text for terminal output
    pub fn help_text() -> String {
        Self::help_lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::help_lines();
        let dialog_area = dialog_rect(area, help_text.len() as u16);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
