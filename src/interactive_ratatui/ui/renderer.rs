use crate::interactive_ratatui::domain::models::{FormTarget, SubmitStatus};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, confirm_dialog::ConfirmDialog, help_dialog::HelpDialog, landing_page::LandingPage,
    pattern_form_view::PatternFormView, record_table::RecordTable, toast_stack::ToastStack,
};
use ratatui::Frame;

pub struct Renderer {
    landing_page: LandingPage,
    create_form: PatternFormView,
    record_table: RecordTable,
    edit_form: PatternFormView,
    confirm_dialog: ConfirmDialog,
    help_dialog: HelpDialog,
    toast_stack: ToastStack,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            landing_page: LandingPage::new(),
            create_form: PatternFormView::new(FormTarget::Create),
            record_table: RecordTable::new(),
            edit_form: PatternFormView::new(FormTarget::Edit),
            confirm_dialog: ConfirmDialog::new(),
            help_dialog: HelpDialog::new(),
            toast_stack: ToastStack::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_mode(f, state, state.mode);

        self.toast_stack.set_toasts(state.notifier.toasts());
        self.toast_stack.render(f, f.area());
    }

    fn render_mode(&mut self, f: &mut Frame, state: &AppState, mode: Mode) {
        match mode {
            Mode::Landing => self.render_landing(f, state),
            Mode::Create => self.render_create(f, state),
            Mode::Manage => self.render_manage(f, state),
            Mode::EditModal => {
                self.render_manage(f, state);
                self.render_edit_modal(f, state);
            }
            Mode::DeleteModal => {
                self.render_manage(f, state);
                self.render_delete_modal(f, state);
            }
            Mode::Help => {
                // Help never returns to itself
                if state.help_return != Mode::Help {
                    self.render_mode(f, state, state.help_return);
                }
                self.help_dialog.render(f, f.area());
            }
        }
    }

    fn render_landing(&mut self, f: &mut Frame, state: &AppState) {
        self.landing_page.set_notice(state.ui.status.clone());
        self.landing_page.render(f, f.area());
    }

    fn render_create(&mut self, f: &mut Frame, state: &AppState) {
        self.sync_create_form(state);
        self.create_form.set_notice(state.ui.status.clone());
        self.create_form.render(f, f.area());
    }

    fn render_manage(&mut self, f: &mut Frame, state: &AppState) {
        self.sync_manage(state);
        self.record_table.set_loading(state.manage.is_loading);
        self.record_table.set_notice(state.ui.status.clone());
        self.record_table.render(f, f.area());
    }

    fn render_edit_modal(&mut self, f: &mut Frame, state: &AppState) {
        if self.sync_edit_form(state) {
            self.edit_form.render(f, f.area());
        }
    }

    fn render_delete_modal(&mut self, f: &mut Frame, state: &AppState) {
        if let Some(delete) = &state.manage.delete {
            self.confirm_dialog
                .set_target(&delete.pattern_name, delete.busy);
            self.confirm_dialog.render(f, f.area());
        }
    }

    /// Push the create form state into its view; also used before key handling
    pub fn sync_create_form(&mut self, state: &AppState) {
        self.create_form.set_form(&state.create.form);
        self.create_form.set_submit_status(state.create.status);
    }

    /// Push the open edit modal into its view; false when no modal is open
    pub fn sync_edit_form(&mut self, state: &AppState) -> bool {
        let Some(edit) = &state.manage.edit else {
            return false;
        };
        self.edit_form.sync_session(edit.session);
        self.edit_form.set_form(&edit.form);
        self.edit_form.set_submit_status(if edit.busy {
            SubmitStatus::Submitting
        } else {
            SubmitStatus::Idle
        });
        true
    }

    pub fn sync_manage(&mut self, state: &AppState) {
        self.record_table.set_records(&state.manage.records);
        self.record_table
            .set_selected_index(state.manage.selected_index);
        if let Some(delete) = &state.manage.delete {
            self.confirm_dialog
                .set_target(&delete.pattern_name, delete.busy);
        }
    }

    pub fn get_landing_page_mut(&mut self) -> &mut LandingPage {
        &mut self.landing_page
    }

    pub fn get_create_form_mut(&mut self) -> &mut PatternFormView {
        &mut self.create_form
    }

    pub fn get_record_table_mut(&mut self) -> &mut RecordTable {
        &mut self.record_table
    }

    pub fn get_edit_form_mut(&mut self) -> &mut PatternFormView {
        &mut self.edit_form
    }

    pub fn get_confirm_dialog_mut(&mut self) -> &mut ConfirmDialog {
        &mut self.confirm_dialog
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
