//! Stale-response protection for views that fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page creates one [`ViewScope`] when it mounts; the scope closes when the
//! component is cleaned up. Each kind of request the page issues gets a
//! [`RequestSlot`], and every request takes a [`RequestTicket`] from its slot.
//! A response is applied only if the scope is still open and no newer ticket
//! has been issued from the same slot.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use leptos::prelude::on_cleanup;

/// Liveness flag for one mounted view.
#[derive(Clone, Debug)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Scope that closes with the current reactive owner.
    pub fn for_component() -> Self {
        let scope = Self::new();
        let closer = scope.clone();
        on_cleanup(move || closer.close());
        scope
    }

    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// A new independent request sequence tied to this scope.
    pub fn slot(&self) -> RequestSlot {
        RequestSlot { alive: self.alive.clone(), issued: Arc::new(AtomicU64::new(0)) }
    }
}

/// One request sequence, e.g. "load the book list".
#[derive(Clone, Debug)]
pub struct RequestSlot {
    alive: Arc<AtomicBool>,
    issued: Arc<AtomicU64>,
}

impl RequestSlot {
    /// Issue a ticket; every earlier ticket from this slot goes stale.
    pub fn ticket(&self) -> RequestTicket {
        let seq = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        RequestTicket { alive: self.alive.clone(), issued: self.issued.clone(), seq }
    }
}

/// Proof that a response belongs to the latest request of its slot.
#[derive(Clone, Debug)]
pub struct RequestTicket {
    alive: Arc<AtomicBool>,
    issued: Arc<AtomicU64>,
    seq: u64,
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.alive.load(Ordering::Relaxed) && self.issued.load(Ordering::Relaxed) == self.seq
    }

    /// Run `apply` if the ticket is still current. Returns whether it ran.
    pub fn apply(&self, apply: impl FnOnce()) -> bool {
        if self.is_current() {
            apply();
            true
        } else {
            log::debug!("dropping stale response for request #{}", self.seq);
            false
        }
    }
}
