pub mod record_formatter;
pub mod rich_text;

pub use record_formatter::format_record;
pub use rich_text::{TRUNCATION_MARKER, html_to_plain, single_line_preview};
