pub mod confirm_dialog;
pub mod help_dialog;
pub mod landing_page;
pub mod modal;
pub mod pattern_form_view;
pub mod record_table;
pub mod text_input;
pub mod toast_stack;
pub mod view_layout;

#[cfg(test)]
mod record_table_test;
#[cfg(test)]
mod text_input_test;

use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
