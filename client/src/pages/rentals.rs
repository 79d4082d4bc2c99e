//! Rentals page: loan history with filters and, for admins, the return
//! action and the rentals PDF report.

#[cfg(test)]
#[path = "rentals_test.rs"]
mod rentals_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::sort_header::SortHeader;
use crate::net::api::Api;
use crate::net::types::Rental;
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::state::rentals::{RentalColumn, RentalsState, can_return};
use crate::state::session::SessionContext;
use crate::util::download::{RENTAL_REPORT_FILE, save_report};
use crate::util::scope::{RequestSlot, ViewScope};
use crate::util::task::spawn_request;

pub(crate) fn return_prompt(rental: &Rental) -> String {
    format!("Mark \"{}\" borrowed by {} as returned?", rental.book_title, rental.username)
}

pub(crate) fn returned_label(rental: &Rental) -> &'static str {
    if rental.is_returned { "Yes" } else { "No" }
}

fn load_rentals(api: Api, slot: &RequestSlot, rentals: RwSignal<RentalsState>, toasts: RwSignal<ToastState>) {
    let ticket = slot.ticket();
    rentals.update(|s| s.loading = true);
    spawn_request(async move {
        let result = api.rentals().list().await.and_then(|resp| resp.json::<Vec<Rental>>());
        ticket.apply(|| match result {
            Ok(items) => rentals.update(|s| {
                s.items = items;
                s.loading = false;
            }),
            Err(e) => {
                log::warn!("rental list failed: {e}");
                rentals.update(|s| s.loading = false);
                notify(toasts, ToastKind::Error, "Could not load rentals.");
            }
        });
    });
}

#[component]
pub fn RentalsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = expect_context::<SessionContext>().state();
    let is_admin = Memo::new(move |_| session.with(|s| s.is_admin()));

    let rentals = RwSignal::new(RentalsState::default());
    let selected = RwSignal::new(None::<Rental>);
    let busy = RwSignal::new(false);
    let list_slot = ViewScope::for_component().slot();

    let reload = {
        let api = api.clone();
        move || load_rentals(api.clone(), &list_slot, rentals, toasts)
    };
    let reload_on_mount = reload.clone();
    Effect::new(move || reload_on_mount());

    let sort = Signal::derive(move || rentals.with(|s| s.sort));
    let on_sort = Callback::new(move |column: RentalColumn| rentals.update(|s| s.sort.toggle(column)));

    let on_cancel = Callback::new(move |()| selected.set(None));
    let on_confirm = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(rental) = selected.get_untracked() else {
                return;
            };
            selected.set(None);
            let api = api.clone();
            let reload = reload.clone();
            spawn_request(async move {
                match api.rentals().mark_returned(rental.id).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Warning, "Rental marked as returned.");
                        reload();
                    }
                    Err(e) => {
                        log::warn!("returning rental {} failed: {e}", rental.id);
                        notify(toasts, ToastKind::Error, "Could not close the rental.");
                    }
                }
            });
        })
    };

    let on_report = move |_: leptos::ev::MouseEvent| {
        busy.set(true);
        let api = api.clone();
        spawn_request(async move {
            match save_report(api.rentals().report().await, RENTAL_REPORT_FILE) {
                Ok(()) => notify(toasts, ToastKind::Success, "Report generated!"),
                Err(e) => {
                    log::warn!("rental report failed: {e}");
                    notify(toasts, ToastKind::Error, "Could not generate the report.");
                }
            }
            busy.set(false);
        });
    };

    let rows = move || {
        rentals
            .with(RentalsState::visible)
            .into_iter()
            .map(|rental| {
                let returned = returned_label(&rental);
                let show_action = is_admin.get() && can_return(&rental);
                let cells = (
                    rental.book_title.clone(),
                    rental.username.clone(),
                    rental.start_date.clone(),
                    rental.end_date.clone(),
                );
                view! {
                    <tr>
                        <td>{cells.0}</td>
                        <td>{cells.1}</td>
                        <td>{cells.2}</td>
                        <td>{cells.3}</td>
                        <td>{returned}</td>
                        <td>
                            {show_action
                                .then(|| {
                                    view! {
                                        <button
                                            class="btn btn--warning"
                                            on:click=move |_| selected.set(Some(rental.clone()))
                                        >
                                            "Return"
                                        </button>
                                    }
                                })}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="page page--rentals">
            <div class="filters">
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Filter by book title"
                    prop:value=move || rentals.with(|s| s.filter.book_title.clone())
                    on:input=move |ev| rentals.update(|s| s.filter.book_title = event_target_value(&ev))
                />
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Filter by user"
                    prop:value=move || rentals.with(|s| s.filter.username.clone())
                    on:input=move |ev| rentals.update(|s| s.filter.username = event_target_value(&ev))
                />
                <input
                    class="filters__input"
                    type="text"
                    placeholder="YYYY-MM-DD"
                    prop:value=move || rentals.with(|s| s.filter.date.clone())
                    on:input=move |ev| rentals.update(|s| s.filter.date = event_target_value(&ev))
                />
                <Show when=move || is_admin.get()>
                    <button class="btn btn--success" disabled=move || busy.get() on:click=on_report.clone()>
                        "Generate report"
                    </button>
                </Show>
            </div>
            <Show when=move || rentals.with(|s| s.loading)>
                <p class="page__status">"Loading rentals..."</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <SortHeader label="Book" column=RentalColumn::BookTitle sort=sort on_sort=on_sort/>
                        <SortHeader label="User" column=RentalColumn::Username sort=sort on_sort=on_sort/>
                        <SortHeader label="Start" column=RentalColumn::StartDate sort=sort on_sort=on_sort/>
                        <SortHeader label="End" column=RentalColumn::EndDate sort=sort on_sort=on_sort/>
                        <SortHeader label="Returned" column=RentalColumn::Returned sort=sort on_sort=on_sort/>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || selected.with(Option::is_some)>
                <ConfirmDialog
                    title="Confirm return"
                    message=selected.with_untracked(|r| r.as_ref().map(return_prompt).unwrap_or_default())
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </section>
    }
}
