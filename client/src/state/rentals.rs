//! Rental list view state.

#[cfg(test)]
#[path = "rentals_test.rs"]
mod rentals_test;

use std::cmp::Ordering;

use crate::net::types::Rental;
use crate::util::table::{SortState, contains_ci, sort_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RentalColumn {
    BookTitle,
    StartDate,
    EndDate,
    Username,
    Returned,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RentalFilter {
    pub book_title: String,
    pub username: String,
    /// Substring of either date, e.g. `2024-05`.
    pub date: String,
}

impl RentalFilter {
    pub fn matches(&self, rental: &Rental) -> bool {
        contains_ci(&rental.book_title, &self.book_title)
            && contains_ci(&rental.username, &self.username)
            && (rental.start_date.contains(&self.date) || rental.end_date.contains(&self.date))
    }
}

#[derive(Clone, Debug)]
pub struct RentalsState {
    pub items: Vec<Rental>,
    pub loading: bool,
    pub sort: SortState<RentalColumn>,
    pub filter: RentalFilter,
}

impl Default for RentalsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            sort: SortState::new(RentalColumn::BookTitle),
            filter: RentalFilter::default(),
        }
    }
}

impl RentalsState {
    pub fn visible(&self) -> Vec<Rental> {
        let mut rows: Vec<Rental> = self.items.iter().filter(|r| self.filter.matches(r)).cloned().collect();
        sort_rows(&mut rows, self.sort, compare_rentals);
        rows
    }
}

pub fn compare_rentals(a: &Rental, b: &Rental, column: RentalColumn) -> Ordering {
    match column {
        RentalColumn::BookTitle => a.book_title.cmp(&b.book_title),
        RentalColumn::StartDate => a.start_date.cmp(&b.start_date),
        RentalColumn::EndDate => a.end_date.cmp(&b.end_date),
        RentalColumn::Username => a.username.cmp(&b.username),
        RentalColumn::Returned => a.is_returned.cmp(&b.is_returned),
    }
}

/// Only outstanding rentals can be marked returned.
pub fn can_return(rental: &Rental) -> bool {
    !rental.is_returned
}
