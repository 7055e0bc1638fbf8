use crate::interactive_ratatui::domain::models::{ApiResponse, FormTarget};
use crate::interactive_ratatui::domain::pattern_form::FieldId;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Screen navigation
    ShowLanding,
    ShowCreate,
    ShowManage,
    ShowHelp,
    CloseHelp,
    Quit,

    // Pattern form editing (create screen and edit modal)
    FieldChanged(FormTarget, FieldId, String),
    AddPractice(FormTarget),
    RemovePractice(FormTarget, usize),
    SubmitForm(FormTarget),
    CloseForm(FormTarget),

    // Manage screen
    RefreshRecords,
    SelectRecord(usize),
    OpenEditModal,
    OpenDeleteModal,
    ConfirmDelete,
    CloseDeleteModal,

    // Timers
    SubmitResetElapsed,
    EditCloseElapsed(u64),   // modal session
    DeleteCloseElapsed(u64), // modal session

    // Async events
    ApiCompleted(ApiResponse),
}
