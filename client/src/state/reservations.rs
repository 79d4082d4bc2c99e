//! Room reservation list view state.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use std::cmp::Ordering;

use crate::net::types::Reservation;
use crate::util::table::{SortState, contains_ci, sort_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationColumn {
    Username,
    Start,
    End,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    pub username: String,
    pub room: String,
    /// Empty shows everything, `true` only cancelled rows, any other text
    /// only active rows.
    pub cancelled: String,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        contains_ci(&reservation.username, &self.username)
            && contains_ci(&reservation.room.name, &self.room)
            && self.matches_cancelled(reservation.cancelled)
    }

    fn matches_cancelled(&self, cancelled: bool) -> bool {
        let wanted = self.cancelled.trim().to_lowercase();
        wanted.is_empty() || cancelled == (wanted == "true")
    }
}

#[derive(Clone, Debug)]
pub struct ReservationsState {
    pub items: Vec<Reservation>,
    pub loading: bool,
    pub sort: SortState<ReservationColumn>,
    pub filter: ReservationFilter,
}

impl Default for ReservationsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            sort: SortState::new(ReservationColumn::Start),
            filter: ReservationFilter::default(),
        }
    }
}

impl ReservationsState {
    pub fn visible(&self) -> Vec<Reservation> {
        let mut rows: Vec<Reservation> = self.items.iter().filter(|r| self.filter.matches(r)).cloned().collect();
        sort_rows(&mut rows, self.sort, compare_reservations);
        rows
    }
}

/// Timestamps are ISO strings, so text order is time order.
pub fn compare_reservations(a: &Reservation, b: &Reservation, column: ReservationColumn) -> Ordering {
    match column {
        ReservationColumn::Username => a.username.cmp(&b.username),
        ReservationColumn::Start => a.start_date_time.cmp(&b.start_date_time),
        ReservationColumn::End => a.end_date_time.cmp(&b.end_date_time),
    }
}
