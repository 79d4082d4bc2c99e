//! Client-side state shared through Leptos context or owned by one page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `notify` are app-wide and provided by `App`. The table
//! states (`books`, `rentals`, `reservations`, `users`) and `forms` hold
//! plain data so their filtering, sorting, and validation run in native
//! tests without a reactive runtime.

pub mod books;
pub mod forms;
pub mod notify;
pub mod rentals;
pub mod reservations;
pub mod session;
pub mod users;
