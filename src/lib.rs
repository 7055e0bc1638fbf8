pub mod api;
pub mod formatters;
pub mod interactive_ratatui;
pub mod logging;
pub mod schemas;

pub use api::{AdminApi, ApiConfig, ApiError, ApiResult, DEFAULT_API_URL, HttpAdminApi};
pub use formatters::{format_record, html_to_plain};
pub use interactive_ratatui::{AdminConsole, HelpDialog};
pub use schemas::{PatternRecord, PracticeQuestion, join_options, split_options};
