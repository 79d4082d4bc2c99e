use super::*;

#[test]
fn fresh_ticket_is_current() {
    let slot = ViewScope::new().slot();
    let ticket = slot.ticket();
    assert!(ticket.is_current());
}

#[test]
fn newer_ticket_makes_older_stale() {
    let slot = ViewScope::new().slot();
    let first = slot.ticket();
    let second = slot.ticket();

    let mut applied = Vec::new();
    assert!(!first.apply(|| applied.push(1)));
    assert!(second.apply(|| applied.push(2)));
    assert_eq!(applied, vec![2]);
}

#[test]
fn closing_scope_discards_pending_responses() {
    let scope = ViewScope::new();
    let ticket = scope.slot().ticket();
    scope.close();

    let mut ran = false;
    assert!(!ticket.apply(|| ran = true));
    assert!(!ran);
}

#[test]
fn slots_are_independent() {
    let scope = ViewScope::new();
    let books = scope.slot();
    let authors = scope.slot();
    let book_ticket = books.ticket();
    let _ = authors.ticket();
    assert!(book_ticket.is_current());
}
