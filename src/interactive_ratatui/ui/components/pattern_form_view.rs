use crate::formatters::{html_to_plain, single_line_preview};
use crate::interactive_ratatui::constants::EDIT_MODAL_PERCENT;
use crate::interactive_ratatui::domain::models::{FormTarget, SubmitStatus};
use crate::interactive_ratatui::domain::pattern_form::{FieldId, PatternForm, PracticeField};
use crate::interactive_ratatui::ui::components::{
    Component,
    modal::centered_percent,
    text_input::TextInput,
    view_layout::{Styles, ViewLayout},
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const STATUS_TEXT: &str =
    "Tab/↓: Next | Shift+Tab/↑: Prev | Ctrl+S: Save | Ctrl+N: Add question | Ctrl+R: Remove question | Esc: Back";

/// Scrollable pattern form used by the create screen and the edit modal.
///
/// Holds a render copy of the form; every edit goes out as a
/// `FieldChanged` message and comes back through `set_form`.
pub struct PatternFormView {
    target: FormTarget,
    form: PatternForm,
    status: SubmitStatus,
    /// Index into `field_ids()`; one past the end is the submit button
    focus: usize,
    input: TextInput,
    input_field: Option<FieldId>,
    scroll_offset: u16,
    session: Option<u64>,
    notice: Option<String>,
}

impl PatternFormView {
    pub fn new(target: FormTarget) -> Self {
        let mut view = Self {
            target,
            form: PatternForm::new(),
            status: SubmitStatus::Idle,
            focus: 0,
            input: TextInput::new(),
            input_field: None,
            scroll_offset: 0,
            session: None,
            notice: None,
        };
        view.sync_input();
        view
    }

    pub fn set_form(&mut self, form: &PatternForm) {
        if &self.form != form {
            self.form = form.clone();
        }
        self.focus = self.focus.min(self.button_index());
        self.sync_input();
    }

    pub fn set_submit_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    /// Start over at the first field when a new modal session opens
    pub fn sync_session(&mut self, session: u64) {
        if self.session != Some(session) {
            self.session = Some(session);
            self.focus = 0;
            self.scroll_offset = 0;
            self.input_field = None;
            self.sync_input();
        }
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.form.field_ids().get(self.focus).copied()
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    fn button_index(&self) -> usize {
        self.form.field_ids().len()
    }

    fn sync_input(&mut self) {
        let field = self.focused_field();
        match field {
            Some(field) => {
                let value = self.form.value(field);
                if self.input_field != Some(field) || self.input.text() != value {
                    self.input.set_text(value);
                }
            }
            None => self.input.clear(),
        }
        self.input_field = field;
    }

    fn move_focus(&mut self, forward: bool) {
        self.focus = if forward {
            (self.focus + 1).min(self.button_index())
        } else {
            self.focus.saturating_sub(1)
        };
        self.sync_input();
    }

    /// The added question's first input takes the button's current slot
    fn focus_new_practice(&mut self) {
        self.focus = self.button_index();
        self.input_field = None;
    }

    fn button_label(&self) -> &'static str {
        match (self.target, self.status) {
            (_, SubmitStatus::Submitting) => "Saving...",
            (FormTarget::Create, SubmitStatus::Saved) => "Saved",
            (FormTarget::Create, _) => "Save",
            (FormTarget::Edit, _) => "Save Changes",
        }
    }

    fn title(&self) -> &'static str {
        match self.target {
            FormTarget::Create => "Add Data",
            FormTarget::Edit => " Edit Data ",
        }
    }

    /// Build every line and return the line index of the focused item
    fn build_lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        let mut focus_line = 0;
        let field_ids = self.form.field_ids();

        for (index, field) in field_ids.iter().enumerate() {
            if let FieldId::Practice(practice, PracticeField::Question) = field {
                lines.push(Line::from(Span::styled(
                    format!("── Practice Question {} ──", practice + 1),
                    Styles::title(),
                )));
            }

            let focused = index == self.focus;
            if focused {
                focus_line = lines.len();
            }

            let mut label = field.label().to_string();
            if self.target == FormTarget::Create && matches!(field, FieldId::Scalar(_)) {
                label.push_str(" *");
            }
            let label_style = if focused {
                Styles::focused_label()
            } else {
                Styles::label()
            };
            lines.push(Line::from(Span::styled(label, label_style)));

            let value_line = if focused {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(
                    self.input
                        .render_cursor_spans_in(width.saturating_sub(2))
                        .into_iter()
                        .map(|span| Span::styled(span.content.into_owned(), span.style)),
                );
                Line::from(spans)
            } else {
                let raw = self.form.value(*field);
                let shown = match field {
                    FieldId::RichText(_) => html_to_plain(&raw),
                    _ => raw,
                };
                let preview = single_line_preview(&shown, width.saturating_sub(2));
                if preview.is_empty() {
                    Line::from(Span::styled("  (empty)", Styles::dimmed()))
                } else {
                    Line::from(Span::styled(format!("  {preview}"), Styles::normal()))
                }
            };
            lines.push(value_line);
            lines.push(Line::from(""));
        }

        if self.focus >= field_ids.len() {
            focus_line = lines.len();
        }
        let enabled = self.status.accepts_submit();
        let button_style = if self.focus >= field_ids.len() {
            Styles::button(enabled).add_modifier(Modifier::REVERSED)
        } else {
            Styles::button(enabled)
        };
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", self.button_label()),
            button_style,
        )));

        (lines, focus_line)
    }

    fn keep_focus_visible(&mut self, focus_line: usize, height: u16) {
        let focus_line = focus_line as u16;
        if focus_line < self.scroll_offset {
            self.scroll_offset = focus_line;
        }
        // Label and value row both visible
        let bottom = focus_line + 2;
        if bottom > self.scroll_offset + height {
            self.scroll_offset = bottom.saturating_sub(height);
        }
    }

    fn render_form(&mut self, f: &mut Frame, area: Rect, block: Block<'_>) {
        let inner = block.inner(area);
        let (lines, focus_line) = self.build_lines(inner.width as usize);
        let line_count = lines.len();
        self.keep_focus_visible(focus_line, inner.height);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll_offset, 0));
        f.render_widget(paragraph, area);

        tracing::trace!(line_count, scroll = self.scroll_offset, "form rendered");
    }
}

impl Component for PatternFormView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        match self.target {
            FormTarget::Create => {
                let layout = ViewLayout::new(self.title())
                    .with_subtitle("Fields marked * are required")
                    .with_status_text(STATUS_TEXT)
                    .with_notice(self.notice.clone());
                layout.render(f, area, |f, content| {
                    self.render_form(f, content, Block::default().borders(Borders::NONE));
                });
            }
            FormTarget::Edit => {
                let modal = centered_percent(area, EDIT_MODAL_PERCENT);
                f.render_widget(Clear, modal);
                let block = Block::default()
                    .title(self.title())
                    .title_bottom(" Ctrl+S: Save | Ctrl+N/R: Add/Remove question | Esc: Close ")
                    .borders(Borders::ALL)
                    .border_style(Styles::focus_border());
                self.render_form(f, modal, block);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let target = self.target;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => return Some(Message::SubmitForm(target)),
                KeyCode::Char('n') => {
                    self.focus_new_practice();
                    return Some(Message::AddPractice(target));
                }
                KeyCode::Char('r') => {
                    return self
                        .focused_field()
                        .and_then(FieldId::practice_index)
                        .map(|index| Message::RemovePractice(target, index));
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => return Some(Message::CloseForm(target)),
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                return None;
            }
            _ => {}
        }

        let Some(field) = self.focused_field() else {
            // Submit button
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SubmitForm(target)),
                _ => None,
            };
        };

        if key.code == KeyCode::Enter {
            self.move_focus(true);
            return None;
        }

        if self.input.handle_key(key) {
            Some(Message::FieldChanged(
                target,
                field,
                self.input.text().to_string(),
            ))
        } else {
            None
        }
    }
}
