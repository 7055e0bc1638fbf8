#[cfg(test)]
mod tests {
    use super::super::text_input::TextInput;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::style::Color;

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn input_with(text: &str, cursor: usize) -> TextInput {
        let mut input = TextInput::new();
        input.set_text(text.to_string());
        input.set_cursor_position(cursor);
        input
    }

    #[test]
    fn test_text_input_creation() {
        let input = TextInput::new();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = TextInput::new();
        input.set_text("Double Top".to_string());
        assert_eq!(input.text(), "Double Top");
        assert_eq!(input.cursor_position(), 10);
    }

    #[test]
    fn test_clear() {
        let mut input = input_with("Wedge", 3);
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut input = input_with("A,C", 2);

        assert!(input.handle_key(create_key_event(KeyCode::Char('B'))));
        assert!(input.handle_key(create_key_event(KeyCode::Char(','))));

        assert_eq!(input.text(), "A,B,C");
        assert_eq!(input.cursor_position(), 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = input_with("hello", 5);

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "hell");

        input.set_cursor_position(0);
        assert!(!input.handle_key(create_key_event(KeyCode::Backspace)));
        assert!(input.handle_key(create_key_event(KeyCode::Delete)));
        assert_eq!(input.text(), "ell");
        assert_eq!(input.cursor_position(), 0);

        input.set_cursor_position(3);
        assert!(!input.handle_key(create_key_event(KeyCode::Delete)));
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut input = input_with("ab", 2);

        assert!(!input.handle_key(create_key_event(KeyCode::Right)));
        assert_eq!(input.cursor_position(), 2);

        input.handle_key(create_key_event(KeyCode::Home));
        input.handle_key(create_key_event(KeyCode::Left));
        assert_eq!(input.cursor_position(), 0);

        input.handle_key(create_key_event(KeyCode::End));
        assert_eq!(input.cursor_position(), 2);

        input.set_cursor_position(99);
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_control_shortcuts() {
        let mut input = input_with("buy the breakout", 16);

        assert!(!input.handle_key(ctrl('a')));
        assert_eq!(input.cursor_position(), 0);
        assert!(!input.handle_key(ctrl('e')));
        assert_eq!(input.cursor_position(), 16);

        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.text(), "buy the ");

        assert!(input.handle_key(ctrl('h')));
        assert_eq!(input.text(), "buy the");

        input.set_cursor_position(3);
        assert!(input.handle_key(ctrl('k')));
        assert_eq!(input.text(), "buy");

        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.text(), "");
        assert!(!input.handle_key(ctrl('u')));
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(ctrl('x')));
        assert!(!input.handle_key(alt('x')));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_alt_word_movement() {
        let mut input = input_with("cup and handle", 14);

        input.handle_key(alt('b'));
        assert_eq!(input.cursor_position(), 8);
        input.handle_key(alt('b'));
        assert_eq!(input.cursor_position(), 4);
        input.handle_key(alt('f'));
        assert_eq!(input.cursor_position(), 8);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = input_with("日本語", 1);

        assert!(input.handle_key(create_key_event(KeyCode::Char('x'))));
        assert_eq!(input.text(), "日x本語");

        assert!(input.handle_key(create_key_event(KeyCode::Delete)));
        assert_eq!(input.text(), "日x語");

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "日語");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_render_cursor_spans() {
        let empty = TextInput::new();
        let spans = empty.render_cursor_spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, " ");
        assert_eq!(spans[0].style.bg, Some(Color::White));

        let middle = input_with("abc", 1);
        let spans = middle.render_cursor_spans();
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
        assert_eq!(spans[1].style.bg, Some(Color::White));

        let end = input_with("abc", 3);
        let spans = end.render_cursor_spans();
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["abc", " "]);
    }

    #[test]
    fn test_render_cursor_spans_in_scrolls_to_cursor() {
        let input = input_with("abcdefgh", 8);
        let spans = input.render_cursor_spans_in(4);
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["fgh", " "]);

        let input = input_with("abcdefgh", 2);
        let spans = input.render_cursor_spans_in(4);
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["ab", "c", "defgh"]);
    }
}
