use super::events::Message;
use crate::interactive_ratatui::domain::models::ApiRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Batch(Vec<Command>),
    SendRequest(ApiRequest),
    Schedule { delay_ms: u64, message: Box<Message> },
    Quit,
}

impl Command {
    pub fn schedule(delay_ms: u64, message: Message) -> Self {
        Command::Schedule {
            delay_ms,
            message: Box::new(message),
        }
    }

    /// Flatten nested batches into the order they should run in.
    pub fn into_vec(self) -> Vec<Command> {
        match self {
            Command::None => Vec::new(),
            Command::Batch(commands) => commands.into_iter().flat_map(Command::into_vec).collect(),
            other => vec![other],
        }
    }
}
