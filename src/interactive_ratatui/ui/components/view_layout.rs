use crate::interactive_ratatui::application::notifier::ToastKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Title bar, content area and a key-hint status bar shared by every screen
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    status_text: Option<String>,
    /// Transient notice that replaces the key hints, e.g. the exit prompt
    notice: Option<String>,
}

impl ViewLayout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            status_text: None,
            notice: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = Some(text.into());
        self
    }

    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let title_height = if self.subtitle.is_some() { 3 } else { 2 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(title_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(f, chunks[0]);
        render_content(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);
    }

    fn render_title_bar(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(self.title.as_str(), Styles::title()))];
        if let Some(subtitle) = &self.subtitle {
            lines.push(Line::from(Span::styled(subtitle.as_str(), Styles::subtitle())));
        }

        let title = Paragraph::new(lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Left);
        f.render_widget(title, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let bar = match &self.notice {
            Some(notice) => Paragraph::new(notice.as_str()).style(Styles::warning()),
            None => Paragraph::new(
                self.status_text
                    .as_deref()
                    .unwrap_or("F1: Help | Ctrl+C twice: Quit"),
            )
            .style(Styles::dimmed()),
        };

        f.render_widget(bar.alignment(Alignment::Center), area);
    }
}

pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;
}

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn focused_label() -> Style {
        Self::label().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    /// Border of the widget that currently owns the keyboard
    pub fn focus_border() -> Style {
        Style::default().fg(ColorScheme::PRIMARY)
    }

    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(ColorScheme::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ColorScheme::TEXT_DIM)
        }
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(ColorScheme::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toast(kind: ToastKind) -> Style {
        match kind {
            ToastKind::Loading => Style::default().fg(ColorScheme::INFO),
            ToastKind::Success => Self::success(),
            ToastKind::Error => Self::error(),
        }
    }
}
