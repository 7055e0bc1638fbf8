use crate::interactive_ratatui::constants::{PAGE_SIZE, TABLE_COLUMN_PERCENTS};
use crate::interactive_ratatui::ui::components::{
    Component,
    view_layout::{Styles, ViewLayout},
};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::{PatternRecord, ScalarField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

const COLUMNS: [ScalarField; 4] = [
    ScalarField::PatternName,
    ScalarField::PatternType,
    ScalarField::ReliabilityScore,
    ScalarField::Experience,
];

/// Manage screen: one row per record with four summary columns and the row actions
#[derive(Default)]
pub struct RecordTable {
    records: Vec<PatternRecord>,
    selected_index: usize,
    is_loading: bool,
    notice: Option<String>,
    table_state: TableState,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_records(&mut self, records: &[PatternRecord]) {
        if self.records != records {
            self.records = records.to_vec();
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn select(&mut self, index: usize) -> Option<Message> {
        if self.records.is_empty() {
            return None;
        }
        let index = index.min(self.records.len() - 1);
        if index == self.selected_index {
            None
        } else {
            self.selected_index = index;
            Some(Message::SelectRecord(index))
        }
    }

    fn subtitle(&self) -> String {
        match (self.is_loading, self.records.len()) {
            (true, _) => "Loading Data...".to_string(),
            (false, 1) => "1 record".to_string(),
            (false, n) => format!("{n} records"),
        }
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        if self.records.is_empty() {
            let text = if self.is_loading {
                "Loading Data..."
            } else {
                "No data found. Press r to refresh."
            };
            let placeholder = Paragraph::new(Line::from(text))
                .style(Styles::dimmed())
                .alignment(Alignment::Center);
            f.render_widget(placeholder, area);
            return;
        }

        let header = Row::new(
            COLUMNS
                .iter()
                .map(|field| Cell::from(field.label()))
                .chain(std::iter::once(Cell::from("Actions")))
                .collect::<Vec<_>>(),
        )
        .style(Styles::label())
        .bottom_margin(1);

        let rows = self.records.iter().map(|record| {
            Row::new(
                COLUMNS
                    .iter()
                    .map(|field| Cell::from(record.scalar(*field).to_string()))
                    .chain(std::iter::once(
                        Cell::from("[e] Edit  [d] Delete").style(Styles::dimmed()),
                    ))
                    .collect::<Vec<_>>(),
            )
            .style(Styles::normal())
        });

        let widths = TABLE_COLUMN_PERCENTS.map(Constraint::Percentage);
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Styles::selected())
            .highlight_symbol("> ");

        self.table_state.select(Some(self.selected_index));
        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Component for RecordTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let layout = ViewLayout::new("Manage Data")
            .with_subtitle(self.subtitle())
            .with_status_text(
                "↑/↓: Select | Enter/e: Edit | d: Delete | r: Refresh | Esc: Back | ?: Help",
            )
            .with_notice(self.notice.clone());

        layout.render(f, area, |f, content| self.render_table(f, content));
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('p') => self.select(self.selected_index.saturating_sub(1)),
                KeyCode::Char('n') => self.select(self.selected_index + 1),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select(self.selected_index.saturating_sub(1))
            }
            KeyCode::Down | KeyCode::Char('j') => self.select(self.selected_index + 1),
            KeyCode::PageUp => self.select(self.selected_index.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => self.select(self.selected_index + PAGE_SIZE),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(usize::MAX),
            KeyCode::Enter | KeyCode::Char('e') if !self.records.is_empty() => {
                Some(Message::OpenEditModal)
            }
            KeyCode::Char('d') | KeyCode::Delete if !self.records.is_empty() => {
                Some(Message::OpenDeleteModal)
            }
            KeyCode::Char('r') => Some(Message::RefreshRecords),
            KeyCode::Esc | KeyCode::Backspace => Some(Message::ShowLanding),
            _ => None,
        }
    }
}
