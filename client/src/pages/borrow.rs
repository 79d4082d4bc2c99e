//! Borrow page: the book catalogue with filters, sorting, and rent action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Loads the full catalogue once on mount and
//! again after each successful rental; filtering and sorting happen locally.
//! Admins also get the catalogue PDF report.

#[cfg(test)]
#[path = "borrow_test.rs"]
mod borrow_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::sort_header::SortHeader;
use crate::net::api::Api;
use crate::net::types::Book;
use crate::state::books::{BookColumn, BooksState, can_borrow};
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::state::session::SessionContext;
use crate::util::download::{BOOK_REPORT_FILE, save_report};
use crate::util::scope::{RequestSlot, ViewScope};
use crate::util::task::spawn_request;

pub(crate) fn borrow_prompt(title: &str) -> String {
    format!("Do you really want to borrow \"{title}\"?")
}

pub(crate) fn borrowed_message(title: &str) -> String {
    format!("\"{title}\" has been borrowed!")
}

pub(crate) fn borrow_failed_message(title: &str) -> String {
    format!("Could not borrow \"{title}\". Try again.")
}

fn load_books(api: Api, slot: &RequestSlot, books: RwSignal<BooksState>, toasts: RwSignal<ToastState>) {
    let ticket = slot.ticket();
    books.update(|s| s.loading = true);
    spawn_request(async move {
        let result = api.books().list().await.and_then(|resp| resp.json::<Vec<Book>>());
        ticket.apply(|| match result {
            Ok(items) => books.update(|s| {
                s.items = items;
                s.loading = false;
            }),
            Err(e) => {
                log::warn!("book list failed: {e}");
                books.update(|s| s.loading = false);
                notify(toasts, ToastKind::Error, "Could not load the book list.");
            }
        });
    });
}

#[component]
pub fn BorrowPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = expect_context::<SessionContext>().state();

    let books = RwSignal::new(BooksState::default());
    let selected = RwSignal::new(None::<Book>);
    let busy = RwSignal::new(false);
    let list_slot = ViewScope::for_component().slot();

    let reload = {
        let api = api.clone();
        move || load_books(api.clone(), &list_slot, books, toasts)
    };
    let reload_on_mount = reload.clone();
    Effect::new(move || reload_on_mount());

    let sort = Signal::derive(move || books.with(|s| s.sort));
    let on_sort = Callback::new(move |column: BookColumn| books.update(|s| s.sort.toggle(column)));

    let on_cancel = Callback::new(move |()| selected.set(None));
    let on_confirm = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(book) = selected.get_untracked() else {
                return;
            };
            selected.set(None);
            let api = api.clone();
            let reload = reload.clone();
            spawn_request(async move {
                match api.rentals().rent(&book.title).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, borrowed_message(&book.title));
                        reload();
                    }
                    Err(e) => {
                        log::warn!("renting {} failed: {e}", book.title);
                        notify(toasts, ToastKind::Error, borrow_failed_message(&book.title));
                    }
                }
            });
        })
    };

    let on_report = move |_: leptos::ev::MouseEvent| {
        busy.set(true);
        let api = api.clone();
        spawn_request(async move {
            match save_report(api.books().report().await, BOOK_REPORT_FILE) {
                Ok(()) => notify(toasts, ToastKind::Success, "Report generated!"),
                Err(e) => {
                    log::warn!("book report failed: {e}");
                    notify(toasts, ToastKind::Error, "Could not generate the report.");
                }
            }
            busy.set(false);
        });
    };

    let rows = move || {
        books
            .with(BooksState::visible)
            .into_iter()
            .map(|book| {
                let unavailable = !can_borrow(&book);
                let hint = if unavailable { "No copies available" } else { "" };
                let genre = book.genre.clone().unwrap_or_default();
                let author = book.author.full_name();
                let title = book.title.clone();
                let quantity = book.quantity;
                view! {
                    <tr>
                        <td>{title}</td>
                        <td>{author}</td>
                        <td>{quantity}</td>
                        <td>{genre}</td>
                        <td>
                            <button
                                class="btn btn--primary"
                                title=hint
                                disabled=move || unavailable || busy.get()
                                on:click=move |_| selected.set(Some(book.clone()))
                            >
                                "Borrow"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="page page--borrow">
            <div class="filters">
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Filter by title"
                    prop:value=move || books.with(|s| s.filter.title.clone())
                    on:input=move |ev| books.update(|s| s.filter.title = event_target_value(&ev))
                />
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Filter by author"
                    prop:value=move || books.with(|s| s.filter.author.clone())
                    on:input=move |ev| books.update(|s| s.filter.author = event_target_value(&ev))
                />
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Filter by genre"
                    prop:value=move || books.with(|s| s.filter.genre.clone())
                    on:input=move |ev| books.update(|s| s.filter.genre = event_target_value(&ev))
                />
                <Show when=move || session.with(|s| s.is_admin())>
                    <button class="btn btn--success" disabled=move || busy.get() on:click=on_report.clone()>
                        "Generate report"
                    </button>
                </Show>
            </div>
            <Show when=move || books.with(|s| s.loading)>
                <p class="page__status">"Loading books..."</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <SortHeader label="Title" column=BookColumn::Title sort=sort on_sort=on_sort/>
                        <SortHeader label="Author" column=BookColumn::Author sort=sort on_sort=on_sort/>
                        <SortHeader label="Quantity" column=BookColumn::Quantity sort=sort on_sort=on_sort/>
                        <SortHeader label="Genre" column=BookColumn::Genre sort=sort on_sort=on_sort/>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || selected.with(Option::is_some)>
                <ConfirmDialog
                    title="Confirm borrowing"
                    message=selected.with_untracked(|b| b.as_ref().map(|b| borrow_prompt(&b.title)).unwrap_or_default())
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </section>
    }
}
