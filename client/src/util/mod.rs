//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, downloads,
//! timers) and pure rules (claims, access decisions, sorting, validation)
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod claims;
pub mod datetime;
pub mod download;
pub mod routes;
pub mod scope;
pub mod storage;
pub mod table;
pub mod task;
pub mod token_store;
pub mod validate;
