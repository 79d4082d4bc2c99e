//! Toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages report outcomes of backend calls through [`notify`]; `ToastHost`
//! renders the stack bottom-right. In the browser each toast dismisses itself
//! after [`AUTO_DISMISS`].

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::time::Duration;

use leptos::prelude::*;

pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub const MAX_VISIBLE: usize = 5;

    /// Add a toast and return its id. The oldest toast is dropped once more
    /// than [`Self::MAX_VISIBLE`] are showing.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > Self::MAX_VISIBLE {
            let overflow = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    if kind == ToastKind::Error {
        log::warn!("{message}");
    }
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(AUTO_DISMISS).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
