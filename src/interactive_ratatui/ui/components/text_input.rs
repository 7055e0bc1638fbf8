use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Single-line field editor with a character cursor and readline-style keys
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the text and move the cursor to the end
    pub fn set_text(&mut self, text: String) {
        self.cursor_position = text.chars().count();
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    pub fn set_cursor_position(&mut self, position: usize) {
        self.cursor_position = position.min(self.char_len());
    }

    /// Byte offset of the character at `char_pos`, or the text length past the end
    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    fn next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Remove characters `start..end` and park the cursor at `start`
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_len() {
            return false;
        }

        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_forward(&mut self) -> bool {
        let cursor = self.cursor_position;
        self.delete_range(cursor, cursor + 1)
    }

    fn insert(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor_position);
        self.text.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Text with the cursor drawn as an inverted cell
    #[cfg(test)]
    pub fn render_cursor_spans(&self) -> Vec<Span<'_>> {
        self.cursor_spans_from(0)
    }

    /// Text with the cursor drawn as an inverted cell, scrolled so the cursor fits in `width` cells
    pub fn render_cursor_spans_in(&self, width: usize) -> Vec<Span<'_>> {
        let start = (self.cursor_position + 1).saturating_sub(width.max(1));
        self.cursor_spans_from(start)
    }

    fn cursor_spans_from(&self, start: usize) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let from = self.byte_index(start.min(self.cursor_position));
        let split = self.byte_index(self.cursor_position);
        let before = &self.text[from..split];
        let rest = &self.text[split..];

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }

        let mut rest_chars = rest.chars();
        match rest_chars.next() {
            Some(under) => {
                spans.push(Span::styled(under.to_string(), cursor_style));
                let remaining = rest_chars.as_str();
                if !remaining.is_empty() {
                    spans.push(Span::raw(remaining));
                }
            }
            None => spans.push(Span::styled(" ", cursor_style)),
        }

        spans
    }

    /// Apply a key and return true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_len();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.set_cursor_position(self.cursor_position + 1);
                    false
                }
                KeyCode::Char('h') => self.backspace(),
                KeyCode::Char('d') => self.delete_forward(),
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => {
                    let len = self.char_len();
                    self.delete_range(self.cursor_position, len)
                }
                _ => false,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.set_cursor_position(self.cursor_position + 1);
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = self.char_len();
                false
            }
            _ => false,
        }
    }
}
