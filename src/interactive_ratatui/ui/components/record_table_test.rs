#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::record_table::*;
    use crate::interactive_ratatui::ui::events::Message;
    use crate::schemas::PatternRecord;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_test_records(count: usize) -> Vec<PatternRecord> {
        (0..count)
            .map(|i| PatternRecord {
                id: Some(format!("id-{i}")),
                pattern_name: format!("Pattern {i}"),
                pattern_type: "Reversal".to_string(),
                reliability_score: "70".to_string(),
                experience: "Beginner".to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn render_table(table: &mut RecordTable) -> Buffer {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| table.render(f, f.area())).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    #[test]
    fn test_navigation_emits_selection() {
        let mut table = RecordTable::new();
        table.set_records(&create_test_records(3));

        assert_eq!(
            table.handle_key(create_key_event(KeyCode::Down)),
            Some(Message::SelectRecord(1))
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::End)),
            Some(Message::SelectRecord(2))
        );
        assert_eq!(table.handle_key(create_key_event(KeyCode::Down)), None);
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::Home)),
            Some(Message::SelectRecord(0))
        );
        assert_eq!(table.handle_key(create_key_event(KeyCode::Up)), None);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut table = RecordTable::new();
        table.set_records(&create_test_records(25));

        assert_eq!(
            table.handle_key(create_key_event(KeyCode::PageDown)),
            Some(Message::SelectRecord(10))
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::PageDown)),
            Some(Message::SelectRecord(20))
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::PageDown)),
            Some(Message::SelectRecord(24))
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::PageUp)),
            Some(Message::SelectRecord(14))
        );
    }

    #[test]
    fn test_row_actions() {
        let mut table = RecordTable::new();
        table.set_records(&create_test_records(1));

        assert_eq!(
            table.handle_key(create_key_event(KeyCode::Enter)),
            Some(Message::OpenEditModal)
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::Char('e'))),
            Some(Message::OpenEditModal)
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::Char('d'))),
            Some(Message::OpenDeleteModal)
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::Char('r'))),
            Some(Message::RefreshRecords)
        );
        assert_eq!(
            table.handle_key(create_key_event(KeyCode::Esc)),
            Some(Message::ShowLanding)
        );
    }

    #[test]
    fn test_empty_table_has_no_row_actions() {
        let mut table = RecordTable::new();

        assert_eq!(table.handle_key(create_key_event(KeyCode::Enter)), None);
        assert_eq!(table.handle_key(create_key_event(KeyCode::Char('d'))), None);
        assert_eq!(table.handle_key(create_key_event(KeyCode::Down)), None);
    }

    #[test]
    fn test_render_loading() {
        let mut table = RecordTable::new();
        table.set_loading(true);

        let buffer = render_table(&mut table);

        assert!(buffer_contains_text(&buffer, "Manage Data"));
        assert!(buffer_contains_text(&buffer, "Loading Data..."));
    }

    #[test]
    fn test_render_empty() {
        let mut table = RecordTable::new();
        let buffer = render_table(&mut table);
        assert!(buffer_contains_text(&buffer, "No data found"));
    }

    #[test]
    fn test_render_rows() {
        let mut table = RecordTable::new();
        table.set_records(&create_test_records(2));
        table.set_selected_index(1);

        let buffer = render_table(&mut table);

        assert!(buffer_contains_text(&buffer, "Pattern Name"));
        assert!(buffer_contains_text(&buffer, "Experience"));
        assert!(buffer_contains_text(&buffer, "Pattern 0"));
        assert!(buffer_contains_text(&buffer, "2 records"));

        let selected_row = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .find(|row| row.contains("Pattern 1"))
            .unwrap();
        assert!(selected_row.trim_start().starts_with('>'));
    }

    #[test]
    fn test_notice_shown_in_status_bar() {
        let mut table = RecordTable::new();
        table.set_notice(Some("Press Ctrl+C again to exit".to_string()));
        let buffer = render_table(&mut table);
        assert!(buffer_contains_text(&buffer, "Press Ctrl+C again to exit"));
    }
}
