use crate::interactive_ratatui::application::notifier::{Notifier, Notify, ToastId};
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::{
    ApiCall, ApiOutcome, ApiRequest, ApiResponse, FormTarget, SubmitStatus,
};
use crate::interactive_ratatui::domain::pattern_form::PatternForm;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::PatternRecord;
use std::collections::HashMap;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    /// Screen the help overlay returns to.
    pub help_return: Mode,
    pub create: CreateState,
    pub manage: ManageState,
    pub notifier: Notifier,
    pub ui: UiState,
    next_request_id: u64,
    /// Loading toasts to dismiss when the matching response lands.
    pending_toasts: HashMap<u64, ToastId>,
}

pub struct CreateState {
    pub form: PatternForm,
    pub status: SubmitStatus,
    pub pending_request: Option<u64>,
}

pub struct ManageState {
    pub records: Vec<PatternRecord>,
    pub selected_index: usize,
    pub is_loading: bool,
    pub current_fetch_id: u64,
    pub edit: Option<EditModalState>,
    pub delete: Option<DeleteModalState>,
    next_session: u64,
}

pub struct EditModalState {
    pub session: u64,
    pub form: PatternForm,
    pub busy: bool,
    pub pending_request: Option<u64>,
}

pub struct DeleteModalState {
    pub session: u64,
    pub target_id: Option<String>,
    pub pattern_name: String,
    pub busy: bool,
    pub pending_request: Option<u64>,
}

pub struct UiState {
    pub status: Option<String>,
}

impl CreateState {
    fn new() -> Self {
        Self {
            form: PatternForm::new(),
            status: SubmitStatus::Idle,
            pending_request: None,
        }
    }

    /// Validate and lock the form for a save. Returns the record to POST.
    fn begin_submit(&mut self, notifier: &mut dyn Notify) -> Option<PatternRecord> {
        if !self.status.accepts_submit() {
            return None;
        }

        if let Some(field) = self.form.missing_required().first() {
            notifier.notify_error(&format!("{} is required", field.label()));
            return None;
        }

        self.status = SubmitStatus::Submitting;
        let mut record = self.form.to_record();
        record.id = None;
        Some(record)
    }

    fn finish_submit(&mut self, notifier: &mut dyn Notify, failure: Option<String>) -> Command {
        self.pending_request = None;
        match failure {
            None => {
                notifier.notify_success(MSG_SAVED);
                self.form = PatternForm::new();
                self.status = SubmitStatus::Saved;
                Command::schedule(SAVED_DISPLAY_WINDOW_MS, Message::SubmitResetElapsed)
            }
            Some(message) => {
                notifier.notify_error(or_fallback(&message, MSG_SAVE_FAILED));
                self.status = SubmitStatus::Idle;
                Command::None
            }
        }
    }
}

impl ManageState {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            selected_index: 0,
            is_loading: false,
            current_fetch_id: 0,
            edit: None,
            delete: None,
            next_session: 0,
        }
    }

    pub fn selected_record(&self) -> Option<&PatternRecord> {
        self.records.get(self.selected_index)
    }

    fn next_session(&mut self) -> u64 {
        self.next_session += 1;
        self.next_session
    }

    fn set_records(&mut self, records: Vec<PatternRecord>) {
        self.records = records;
        self.is_loading = false;
        if self.selected_index >= self.records.len() {
            self.selected_index = self.records.len().saturating_sub(1);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Landing,
            help_return: Mode::Landing,
            create: CreateState::new(),
            manage: ManageState::new(),
            notifier: Notifier::new(),
            ui: UiState { status: None },
            next_request_id: 0,
            pending_toasts: HashMap::new(),
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::ShowLanding => {
                self.mode = Mode::Landing;
                Command::None
            }
            Message::ShowCreate => {
                self.mode = Mode::Create;
                Command::None
            }
            Message::ShowManage => {
                self.mode = Mode::Manage;
                self.start_fetch()
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.help_return = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.help_return;
                }
                Command::None
            }
            Message::Quit => Command::Quit,

            Message::FieldChanged(target, field, value) => {
                if let Some(form) = self.form_mut(target) {
                    form.set_value(field, value);
                }
                Command::None
            }
            Message::AddPractice(target) => {
                if let Some(form) = self.form_mut(target) {
                    form.add_practice();
                }
                Command::None
            }
            Message::RemovePractice(target, index) => {
                if let Some(form) = self.form_mut(target) {
                    form.remove_practice(index);
                }
                Command::None
            }
            Message::SubmitForm(FormTarget::Create) => self.submit_create(),
            Message::SubmitForm(FormTarget::Edit) => self.submit_edit(),
            Message::CloseForm(FormTarget::Create) => {
                self.mode = Mode::Landing;
                Command::None
            }
            Message::CloseForm(FormTarget::Edit) => {
                self.close_edit_modal();
                Command::None
            }
            Message::SubmitResetElapsed => {
                if self.create.status == SubmitStatus::Saved {
                    self.create.status = SubmitStatus::Idle;
                }
                Command::None
            }

            Message::RefreshRecords => self.start_fetch(),
            Message::SelectRecord(index) => {
                if index < self.manage.records.len() {
                    self.manage.selected_index = index;
                }
                Command::None
            }
            Message::OpenEditModal => {
                if let Some(record) = self.manage.selected_record() {
                    let form = PatternForm::from_record(record);
                    let session = self.manage.next_session();
                    self.manage.edit = Some(EditModalState {
                        session,
                        form,
                        busy: false,
                        pending_request: None,
                    });
                    self.mode = Mode::EditModal;
                }
                Command::None
            }
            Message::OpenDeleteModal => {
                if let Some(record) = self.manage.selected_record() {
                    let target_id = record.usable_id().map(str::to_string);
                    let pattern_name = record.pattern_name.clone();
                    let session = self.manage.next_session();
                    self.manage.delete = Some(DeleteModalState {
                        session,
                        target_id,
                        pattern_name,
                        busy: false,
                        pending_request: None,
                    });
                    self.mode = Mode::DeleteModal;
                }
                Command::None
            }
            Message::ConfirmDelete => self.confirm_delete(),
            Message::CloseDeleteModal => {
                self.close_delete_modal();
                Command::None
            }
            Message::EditCloseElapsed(session) => {
                if self.manage.edit.as_ref().is_some_and(|e| e.session == session) {
                    self.close_edit_modal();
                }
                Command::None
            }
            Message::DeleteCloseElapsed(session) => {
                if self.manage.delete.as_ref().is_some_and(|d| d.session == session) {
                    self.close_delete_modal();
                }
                Command::None
            }

            Message::ApiCompleted(response) => self.handle_response(response),
        }
    }

    fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    fn send(&mut self, call: ApiCall, loading_text: Option<&str>) -> (u64, Command) {
        let id = self.next_request_id();
        if let Some(text) = loading_text {
            let toast = self.notifier.notify_loading(text);
            self.pending_toasts.insert(id, toast);
        }
        (id, Command::SendRequest(ApiRequest { id, call }))
    }

    fn form_mut(&mut self, target: FormTarget) -> Option<&mut PatternForm> {
        match target {
            FormTarget::Create => Some(&mut self.create.form),
            FormTarget::Edit => self.manage.edit.as_mut().map(|edit| &mut edit.form),
        }
    }

    fn start_fetch(&mut self) -> Command {
        let (id, command) = self.send(ApiCall::List, None);
        self.manage.is_loading = true;
        self.manage.current_fetch_id = id;
        command
    }

    fn submit_create(&mut self) -> Command {
        let Some(record) = self.create.begin_submit(&mut self.notifier) else {
            return Command::None;
        };
        let (id, command) = self.send(ApiCall::Create(record), Some(MSG_SAVING));
        self.create.pending_request = Some(id);
        command
    }

    fn submit_edit(&mut self) -> Command {
        let Some(edit) = self.manage.edit.as_ref() else {
            return Command::None;
        };
        if edit.busy {
            return Command::None;
        }

        let record = edit.form.to_record();
        let Some(id) = record.usable_id().map(str::to_string) else {
            self.notifier.notify_error(MSG_INVALID_ID);
            return Command::None;
        };

        let (request_id, command) = self.send(ApiCall::Update { id, record }, Some(MSG_UPDATING));
        if let Some(edit) = self.manage.edit.as_mut() {
            edit.busy = true;
            edit.pending_request = Some(request_id);
        }
        command
    }

    fn confirm_delete(&mut self) -> Command {
        let Some(delete) = self.manage.delete.as_ref() else {
            return Command::None;
        };
        if delete.busy {
            return Command::None;
        }

        let Some(id) = delete.target_id.clone() else {
            self.notifier.notify_error(MSG_INVALID_ID);
            return Command::None;
        };

        let (request_id, command) = self.send(ApiCall::Delete { id }, Some(MSG_DELETING));
        if let Some(delete) = self.manage.delete.as_mut() {
            delete.busy = true;
            delete.pending_request = Some(request_id);
        }
        command
    }

    fn close_edit_modal(&mut self) {
        self.manage.edit = None;
        self.leave_modal(Mode::EditModal);
    }

    fn close_delete_modal(&mut self) {
        self.manage.delete = None;
        self.leave_modal(Mode::DeleteModal);
    }

    fn leave_modal(&mut self, modal: Mode) {
        if self.mode == modal {
            self.mode = Mode::Manage;
        }
        if self.help_return == modal {
            self.help_return = Mode::Manage;
        }
    }

    fn handle_response(&mut self, response: ApiResponse) -> Command {
        if let Some(toast) = self.pending_toasts.remove(&response.id) {
            self.notifier.dismiss(toast);
        }

        match response.outcome {
            ApiOutcome::Created => self.create.finish_submit(&mut self.notifier, None),
            ApiOutcome::CreateFailed(message) => {
                self.create.finish_submit(&mut self.notifier, Some(message))
            }
            ApiOutcome::Listed(records) => {
                if response.id == self.manage.current_fetch_id {
                    self.manage.set_records(records);
                }
                Command::None
            }
            ApiOutcome::ListFailed(_) => {
                if response.id == self.manage.current_fetch_id {
                    self.manage.is_loading = false;
                    self.notifier.notify_error(MSG_FETCH_FAILED);
                }
                Command::None
            }
            ApiOutcome::Updated => {
                self.notifier.notify_success(MSG_UPDATED);
                let mut commands = vec![self.start_fetch()];
                if let Some(edit) = self.edit_for(response.id) {
                    edit.busy = false;
                    edit.pending_request = None;
                    let session = edit.session;
                    commands.push(Command::schedule(
                        MODAL_CLOSE_DELAY_MS,
                        Message::EditCloseElapsed(session),
                    ));
                }
                Command::Batch(commands)
            }
            ApiOutcome::UpdateFailed(message) => {
                self.notifier
                    .notify_error(or_fallback(&message, MSG_UPDATE_FAILED));
                if let Some(edit) = self.edit_for(response.id) {
                    edit.busy = false;
                    edit.pending_request = None;
                }
                Command::None
            }
            ApiOutcome::Deleted => {
                let mut commands = vec![self.start_fetch()];
                self.notifier.notify_success(MSG_DELETED);
                if let Some(delete) = self.delete_for(response.id) {
                    delete.busy = false;
                    delete.pending_request = None;
                    let session = delete.session;
                    commands.push(Command::schedule(
                        MODAL_CLOSE_DELAY_MS,
                        Message::DeleteCloseElapsed(session),
                    ));
                }
                Command::Batch(commands)
            }
            ApiOutcome::DeleteFailed(message) => {
                self.notifier
                    .notify_error(or_fallback(&message, MSG_DELETE_FAILED));
                if let Some(delete) = self.delete_for(response.id) {
                    delete.busy = false;
                    delete.pending_request = None;
                }
                Command::None
            }
        }
    }

    fn edit_for(&mut self, request_id: u64) -> Option<&mut EditModalState> {
        self.manage
            .edit
            .as_mut()
            .filter(|edit| edit.pending_request == Some(request_id))
    }

    fn delete_for(&mut self, request_id: u64) -> Option<&mut DeleteModalState> {
        self.manage
            .delete
            .as_mut()
            .filter(|delete| delete.pending_request == Some(request_id))
    }

    /// Form and busy flag the pattern form view should show for `target`.
    pub fn form_view(&self, target: FormTarget) -> Option<(&PatternForm, bool)> {
        match target {
            FormTarget::Create => Some((
                &self.create.form,
                !self.create.status.accepts_submit(),
            )),
            FormTarget::Edit => self
                .manage
                .edit
                .as_ref()
                .map(|edit| (&edit.form, edit.busy)),
        }
    }

    #[cfg(test)]
    pub fn field_value(
        &self,
        target: FormTarget,
        field: crate::interactive_ratatui::domain::pattern_form::FieldId,
    ) -> Option<String> {
        self.form_view(target).map(|(form, _)| form.value(field))
    }
}

fn or_fallback<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}
