//! Transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root; pages push outcomes of async operations and
//! the `Toaster` component renders and auto-dismisses them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 3;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DISMISS_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// What a toast says, before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastContent {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastContent {
    #[must_use]
    pub fn success(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: ToastVariant::Default }
    }

    #[must_use]
    pub fn error(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: ToastVariant::Destructive }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub content: ToastContent,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, content: ToastContent) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, content });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
