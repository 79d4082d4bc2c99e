//! Book catalogue view state for the borrow and add-book pages.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use std::cmp::Ordering;

use crate::net::types::Book;
use crate::util::table::{SortState, contains_ci, sort_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookColumn {
    Title,
    Author,
    Quantity,
    Genre,
}

/// Free-text filters above the book table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl BookFilter {
    /// All three filters must match. The author filter checks `"name surname"`;
    /// a book without a genre never matches.
    pub fn matches(&self, book: &Book) -> bool {
        contains_ci(&book.title, &self.title)
            && contains_ci(&book.author.full_name(), &self.author)
            && book.genre.as_deref().is_some_and(|genre| contains_ci(genre, &self.genre))
    }
}

#[derive(Clone, Debug)]
pub struct BooksState {
    pub items: Vec<Book>,
    pub loading: bool,
    pub sort: SortState<BookColumn>,
    pub filter: BookFilter,
}

impl Default for BooksState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, sort: SortState::new(BookColumn::Title), filter: BookFilter::default() }
    }
}

impl BooksState {
    /// Filtered and sorted rows for the table.
    pub fn visible(&self) -> Vec<Book> {
        let mut rows: Vec<Book> = self.items.iter().filter(|book| self.filter.matches(book)).cloned().collect();
        sort_rows(&mut rows, self.sort, compare_books);
        rows
    }
}

/// Column ordering. Authors sort by `"surname name"`.
pub fn compare_books(a: &Book, b: &Book, column: BookColumn) -> Ordering {
    match column {
        BookColumn::Title => a.title.cmp(&b.title),
        BookColumn::Author => sort_name(a).cmp(&sort_name(b)),
        BookColumn::Quantity => a.quantity.cmp(&b.quantity),
        BookColumn::Genre => a.genre.as_deref().unwrap_or_default().cmp(b.genre.as_deref().unwrap_or_default()),
    }
}

fn sort_name(book: &Book) -> String {
    format!("{} {}", book.author.surname, book.author.name)
}

pub fn can_borrow(book: &Book) -> bool {
    book.quantity > 0
}

/// Distinct titles for the add-book suggestions, sorted.
pub fn existing_titles(books: &[Book]) -> Vec<String> {
    let mut titles: Vec<String> = books.iter().map(|book| book.title.clone()).collect();
    titles.sort();
    titles.dedup();
    titles
}

/// The catalogue entry whose title matches exactly, used to pre-fill author
/// and genre when adding more copies of a known book.
pub fn prefill_for_title<'a>(books: &'a [Book], title: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.title == title)
}
