use super::*;
use crate::util::table::SortDirection;

fn rental(id: i64, title: &str, user: &str, start: &str, end: &str, returned: bool) -> Rental {
    Rental {
        id,
        book_title: title.to_owned(),
        username: user.to_owned(),
        start_date: start.to_owned(),
        end_date: end.to_owned(),
        is_returned: returned,
    }
}

fn rentals() -> Vec<Rental> {
    vec![
        rental(1, "Solaris", "alice", "2024-05-01", "2024-05-15", false),
        rental(2, "Dune", "bob", "2024-04-20", "2024-05-04", true),
        rental(3, "Emma", "Alice", "2024-06-01", "2024-06-15", false),
    ]
}

fn ids(rows: &[Rental]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

#[test]
fn default_sort_is_book_title() {
    let state = RentalsState { items: rentals(), ..RentalsState::default() };
    assert_eq!(ids(&state.visible()), vec![2, 3, 1]);
}

#[test]
fn username_filter_ignores_case() {
    let mut state = RentalsState { items: rentals(), ..RentalsState::default() };
    state.filter.username = "ALICE".to_owned();
    assert_eq!(ids(&state.visible()), vec![3, 1]);
}

#[test]
fn date_filter_matches_start_or_end() {
    let mut state = RentalsState { items: rentals(), ..RentalsState::default() };
    state.filter.date = "2024-05".to_owned();
    assert_eq!(ids(&state.visible()), vec![2, 1]);
}

#[test]
fn returned_column_sorts_outstanding_first() {
    let mut state = RentalsState { items: rentals(), ..RentalsState::default() };
    state.sort = SortState { key: RentalColumn::Returned, direction: SortDirection::Asc };
    assert_eq!(ids(&state.visible()), vec![1, 3, 2]);
}

#[test]
fn only_outstanding_rentals_can_be_returned() {
    let rows = rentals();
    assert!(can_return(&rows[0]));
    assert!(!can_return(&rows[1]));
}
