use super::*;
use crate::net::types::Author;
use crate::util::table::SortDirection;

fn book(id: i64, title: &str, name: &str, surname: &str, quantity: i64, genre: Option<&str>) -> Book {
    Book {
        id,
        title: title.to_owned(),
        author: Author { id, name: name.to_owned(), surname: surname.to_owned() },
        quantity,
        genre: genre.map(str::to_owned),
    }
}

fn catalogue() -> Vec<Book> {
    vec![
        book(1, "Solaris", "Stanislaw", "Lem", 2, Some("Sci-fi")),
        book(2, "Dune", "Frank", "Herbert", 0, Some("Sci-fi")),
        book(3, "Emma", "Jane", "Austen", 5, Some("Romance")),
        book(4, "Untitled", "Anon", "Ymous", 1, None),
    ]
}

fn titles(rows: &[Book]) -> Vec<&str> {
    rows.iter().map(|b| b.title.as_str()).collect()
}

#[test]
fn default_view_sorts_by_title_and_hides_genreless_books() {
    let state = BooksState { items: catalogue(), ..BooksState::default() };
    assert_eq!(titles(&state.visible()), vec!["Dune", "Emma", "Solaris"]);
}

#[test]
fn author_filter_matches_name_then_surname() {
    let mut state = BooksState { items: catalogue(), ..BooksState::default() };
    state.filter.author = "stanislaw l".to_owned();
    assert_eq!(titles(&state.visible()), vec!["Solaris"]);
}

#[test]
fn filters_combine() {
    let mut state = BooksState { items: catalogue(), ..BooksState::default() };
    state.filter.genre = "SCI".to_owned();
    state.filter.title = "dun".to_owned();
    assert_eq!(titles(&state.visible()), vec!["Dune"]);
}

#[test]
fn author_column_sorts_by_surname() {
    let mut state = BooksState { items: catalogue(), ..BooksState::default() };
    state.sort = SortState { key: BookColumn::Author, direction: SortDirection::Asc };
    assert_eq!(titles(&state.visible()), vec!["Emma", "Dune", "Solaris"]);
}

#[test]
fn quantity_column_sorts_descending() {
    let mut state = BooksState { items: catalogue(), ..BooksState::default() };
    state.sort = SortState { key: BookColumn::Quantity, direction: SortDirection::Desc };
    assert_eq!(titles(&state.visible()), vec!["Emma", "Solaris", "Dune"]);
}

#[test]
fn borrowing_needs_a_copy() {
    let books = catalogue();
    assert!(can_borrow(&books[0]));
    assert!(!can_borrow(&books[1]));
}

#[test]
fn existing_titles_are_sorted_and_distinct() {
    let mut books = catalogue();
    books.push(book(5, "Dune", "Frank", "Herbert", 1, Some("Sci-fi")));
    assert_eq!(existing_titles(&books), vec!["Dune", "Emma", "Solaris", "Untitled"]);
}

#[test]
fn prefill_requires_exact_title() {
    let books = catalogue();
    let found = prefill_for_title(&books, "Emma").unwrap();
    assert_eq!(found.author.surname, "Austen");
    assert!(prefill_for_title(&books, "emma").is_none());
}
