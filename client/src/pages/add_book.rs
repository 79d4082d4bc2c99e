//! Admin form for adding a book or more copies of a known one.
//!
//! Picking an existing title from the suggestions pre-fills its author and
//! genre from the catalogue.

#[cfg(test)]
#[path = "add_book_test.rs"]
mod add_book_test;

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::net::api::Api;
use crate::net::types::{Author, Book};
use crate::state::books::{existing_titles, prefill_for_title};
use crate::state::forms::BookForm;
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::util::scope::ViewScope;
use crate::util::task::spawn_request;
use crate::util::validate::ValidationError;

/// Apply a typed or picked title, pre-filling from a catalogue match.
pub(crate) fn apply_title(form: &mut BookForm, books: &[Book], title: String) {
    if let Some(known) = prefill_for_title(books, &title) {
        form.author = Some(known.author.clone());
        form.genre = known.genre.clone().unwrap_or_default();
    }
    form.title = title;
}

pub(crate) fn author_by_id(authors: &[Author], raw_id: &str) -> Option<Author> {
    let id: i64 = raw_id.parse().ok()?;
    authors.iter().find(|author| author.id == id).cloned()
}

/// Number inputs can be blank or partial while typing; those read as 0.
pub(crate) fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn AddBookPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let books = RwSignal::new(Vec::<Book>::new());
    let authors = RwSignal::new(Vec::<Author>::new());
    let form = RwSignal::new(BookForm::default());
    let errors = RwSignal::new(None::<ValidationError>);
    let busy = RwSignal::new(false);

    let scope = ViewScope::for_component();
    let books_slot = scope.slot();
    let authors_slot = scope.slot();

    {
        let api = api.clone();
        Effect::new(move || {
            let books_ticket = books_slot.ticket();
            let authors_ticket = authors_slot.ticket();
            let api = api.clone();
            spawn_request(async move {
                match api.books().list().await.and_then(|resp| resp.json::<Vec<Book>>()) {
                    Ok(items) => {
                        books_ticket.apply(|| books.set(items));
                    }
                    Err(e) => log::warn!("book list failed: {e}"),
                }
                match api.authors().list().await.and_then(|resp| resp.json::<Vec<Author>>()) {
                    Ok(items) => {
                        authors_ticket.apply(|| authors.set(items));
                    }
                    Err(e) => {
                        log::warn!("author list failed: {e}");
                        notify(toasts, ToastKind::Error, "Could not load authors.");
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(BookForm::submit) {
            Ok(request) => request,
            Err(e) => {
                errors.set(Some(e));
                return;
            }
        };
        errors.set(None);
        busy.set(true);

        let api = api.clone();
        spawn_request(async move {
            match api.books().add(&request).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, "Book added!");
                    form.set(BookForm::default());
                }
                Err(e) => {
                    log::warn!("adding book {} failed: {e}", request.title);
                    notify(toasts, ToastKind::Error, "The book could not be added.");
                }
            }
            busy.set(false);
        });
    };

    let title_options = move || {
        books
            .with(|items| existing_titles(items))
            .into_iter()
            .map(|title| view! { <option value=title></option> })
            .collect_view()
    };

    let author_options = move || {
        authors
            .get()
            .into_iter()
            .map(|author| {
                let label = author.full_name();
                view! { <option value=author.id.to_string()>{label}</option> }
            })
            .collect_view()
    };

    let selected_author_id =
        move || form.with(|f| f.author.as_ref().map(|a| a.id.to_string()).unwrap_or_default());

    view! {
        <section class="page page--form">
            <form class="form-card" on:submit=on_submit>
                <h1>"Add book"</h1>
                <label class="form__field">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        list="known-titles"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            let title = event_target_value(&ev);
                            books.with_untracked(|items| form.update(|f| apply_title(f, items, title)));
                        }
                    />
                    <datalist id="known-titles">{title_options}</datalist>
                    <FieldError errors=errors field="title"/>
                </label>
                <label class="form__field">
                    "Author"
                    <select
                        class="form__input"
                        prop:value=selected_author_id
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            let author = authors.with_untracked(|items| author_by_id(items, &raw));
                            form.update(|f| f.author = author);
                        }
                    >
                        <option value="">"Choose an author"</option>
                        {author_options}
                    </select>
                    <FieldError errors=errors field="author"/>
                </label>
                <label class="form__field">
                    "Quantity"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.quantity.to_string())
                        on:input=move |ev| form.update(|f| f.quantity = parse_quantity(&event_target_value(&ev)))
                    />
                    <FieldError errors=errors field="quantity"/>
                </label>
                <label class="form__field">
                    "Genre"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.genre.clone())
                        on:input=move |ev| form.update(|f| f.genre = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="genre"/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add book"
                </button>
            </form>
        </section>
    }
}
