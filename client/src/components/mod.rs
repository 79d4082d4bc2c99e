//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navbar, toasts, dialogs, table headers) and
//! the route guards, reading shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod field_error;
pub mod guards;
pub mod navbar;
pub mod sort_header;
pub mod toast_host;
