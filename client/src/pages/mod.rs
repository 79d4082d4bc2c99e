//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and submit orchestration, keeps its
//! pure helpers (messages, parsing) testable beside it, and delegates shared
//! chrome to `components`.

pub mod add_author;
pub mod add_book;
pub mod add_reservation;
pub mod borrow;
pub mod login;
pub mod register;
pub mod rentals;
pub mod reservations;
pub mod users;
