use crate::interactive_ratatui::constants::{
    ERROR_TOAST_DURATION_MS, MAX_VISIBLE_TOASTS, SUCCESS_TOAST_DURATION_MS,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub text: String,
    expires_at: Option<Instant>,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Notification capability handed to the screens.
pub trait Notify {
    fn notify_loading(&mut self, text: &str) -> ToastId;
    fn notify_success(&mut self, text: &str) -> ToastId;
    fn notify_error(&mut self, text: &str) -> ToastId;
    fn dismiss(&mut self, id: ToastId);
}

/// Toast queue owned by the console shell.
///
/// Loading toasts stay until dismissed; success and error toasts expire on
/// their own. When full, the oldest finished toast makes room first.
pub struct Notifier {
    toasts: VecDeque<Toast>,
    next_id: ToastId,
    capacity: usize,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            capacity: MAX_VISIBLE_TOASTS,
        }
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Drop every toast whose display time has passed.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    fn push(&mut self, kind: ToastKind, text: &str, lifetime: Option<Duration>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        if self.toasts.len() >= self.capacity {
            let evict = self
                .toasts
                .iter()
                .position(|toast| toast.kind != ToastKind::Loading)
                .unwrap_or(0);
            self.toasts.remove(evict);
        }

        self.toasts.push_back(Toast {
            id,
            kind,
            text: text.to_string(),
            expires_at: lifetime.map(|d| Instant::now() + d),
        });
        id
    }
}

impl Notify for Notifier {
    fn notify_loading(&mut self, text: &str) -> ToastId {
        tracing::debug!(text, "loading toast");
        self.push(ToastKind::Loading, text, None)
    }

    fn notify_success(&mut self, text: &str) -> ToastId {
        tracing::debug!(text, "success toast");
        self.push(
            ToastKind::Success,
            text,
            Some(Duration::from_millis(SUCCESS_TOAST_DURATION_MS)),
        )
    }

    fn notify_error(&mut self, text: &str) -> ToastId {
        tracing::debug!(text, "error toast");
        self.push(
            ToastKind::Error,
            text,
            Some(Duration::from_millis(ERROR_TOAST_DURATION_MS)),
        )
    }

    fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
