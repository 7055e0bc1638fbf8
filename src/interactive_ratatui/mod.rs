use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::api::AdminApi;

mod application;
pub mod constants;
mod domain;
pub mod ui;


use self::application::admin_service::AdminService;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MSG_EXIT_PROMPT};
use self::domain::models::{ApiRequest, ApiResponse, Mode};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub use self::ui::components::help_dialog::HelpDialog;

/// Full-screen admin console: landing page, create form and manage table
pub struct AdminConsole {
    state: AppState,
    renderer: Renderer,
    admin_service: Arc<AdminService>,
    request_sender: Option<Sender<ApiRequest>>,
    response_receiver: Option<Receiver<ApiResponse>>,
    scheduled: Vec<(Instant, Message)>,
    last_ctrl_c_press: Option<Instant>,
}

impl AdminConsole {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            admin_service: Arc::new(AdminService::new(api)),
            request_sender: None,
            response_receiver: None,
            scheduled: Vec::new(),
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        self.start_worker();
        tracing::info!("admin console started");

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        tracing::info!("admin console stopped");
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            if self.process_responses() {
                break;
            }

            let now = Instant::now();
            if self.fire_due_timers(now) {
                break;
            }
            self.state.notifier.expire(now);
            self.expire_exit_prompt(now);

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply every response the worker has finished. Returns true on quit.
    fn process_responses(&mut self) -> bool {
        let mut responses = Vec::new();
        if let Some(receiver) = &self.response_receiver {
            while let Ok(response) = receiver.try_recv() {
                responses.push(response);
            }
        }

        responses
            .into_iter()
            .any(|response| self.handle_message(Message::ApiCompleted(response)))
    }

    /// Deliver scheduled messages whose delay has passed. Returns true on quit.
    fn fire_due_timers(&mut self, now: Instant) -> bool {
        let (due, pending): (Vec<_>, Vec<_>) =
            self.scheduled.drain(..).partition(|(at, _)| *at <= now);
        self.scheduled = pending;

        due.into_iter()
            .any(|(_, message)| self.handle_message(message))
    }

    fn expire_exit_prompt(&mut self, now: Instant) {
        let timeout = Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS);
        if let Some(last_press) = self.last_ctrl_c_press {
            if now.duration_since(last_press) >= timeout {
                self.last_ctrl_c_press = None;
                if self.state.ui.status.as_deref() == Some(MSG_EXIT_PROMPT) {
                    self.state.ui.status = None;
                }
            }
        }
    }

    /// Route a key press. Returns true when the console should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.status = Some(MSG_EXIT_PROMPT.to_string());
            return false;
        }

        match key.code {
            KeyCode::F(1) if self.state.mode != Mode::Help => {
                return self.handle_message(Message::ShowHelp);
            }
            // Forms take '?' as text
            KeyCode::Char('?') if matches!(self.state.mode, Mode::Landing | Mode::Manage) => {
                return self.handle_message(Message::ShowHelp);
            }
            _ => {}
        }

        let message = match self.state.mode {
            Mode::Landing => self.renderer.get_landing_page_mut().handle_key(key),
            Mode::Create => {
                self.renderer.sync_create_form(&self.state);
                self.renderer.get_create_form_mut().handle_key(key)
            }
            Mode::Manage => {
                self.renderer.sync_manage(&self.state);
                self.renderer.get_record_table_mut().handle_key(key)
            }
            Mode::EditModal => {
                if self.renderer.sync_edit_form(&self.state) {
                    self.renderer.get_edit_form_mut().handle_key(key)
                } else {
                    None
                }
            }
            Mode::DeleteModal => {
                self.renderer.sync_manage(&self.state);
                self.renderer.get_confirm_dialog_mut().handle_key(key)
            }
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        match message {
            Some(msg) => self.handle_message(msg),
            None => false,
        }
    }

    /// Run one message through the state. Returns true when it asked to quit.
    fn handle_message(&mut self, message: Message) -> bool {
        let command = self.state.update(message);
        self.execute_command(command)
    }

    fn execute_command(&mut self, command: Command) -> bool {
        let mut quit = false;
        for command in command.into_vec() {
            match command {
                Command::None | Command::Batch(_) => {}
                Command::SendRequest(request) => self.send_request(request),
                Command::Schedule { delay_ms, message } => {
                    let at = Instant::now() + Duration::from_millis(delay_ms);
                    self.scheduled.push((at, *message));
                }
                Command::Quit => quit = true,
            }
        }
        quit
    }

    fn send_request(&mut self, request: ApiRequest) {
        tracing::debug!(id = request.id, call = request.call.name(), "queue request");
        let Some(sender) = &self.request_sender else {
            tracing::warn!(id = request.id, "api worker not running; request dropped");
            return;
        };
        if sender.send(request).is_err() {
            tracing::error!("api worker stopped");
            self.request_sender = None;
        }
    }

    fn start_worker(&mut self) {
        let (tx, rx) = self.start_api_worker();
        self.request_sender = Some(tx);
        self.response_receiver = Some(rx);
    }

    fn start_api_worker(&self) -> (Sender<ApiRequest>, Receiver<ApiResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<ApiRequest>();
        let (response_tx, response_rx) = mpsc::channel::<ApiResponse>();
        let admin_service = self.admin_service.clone();

        // Calls run on their own threads and never queue behind each other
        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let admin_service = admin_service.clone();
                let response_tx = response_tx.clone();
                thread::spawn(move || {
                    let id = request.id;
                    let response = admin_service.handle(request);
                    if response_tx.send(response).is_err() {
                        tracing::debug!(id, "console gone; response dropped");
                    }
                });
            }
            tracing::debug!("api dispatcher exiting");
        });

        (request_tx, response_rx)
    }
}
