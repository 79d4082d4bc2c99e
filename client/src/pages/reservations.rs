//! Room reservations page.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use leptos::prelude::*;

use crate::components::sort_header::SortHeader;
use crate::net::api::Api;
use crate::net::types::Reservation;
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::state::reservations::{ReservationColumn, ReservationsState};
use crate::util::datetime::format_date_time;
use crate::util::scope::ViewScope;
use crate::util::task::spawn_request;

pub(crate) fn row_class(reservation: &Reservation) -> &'static str {
    if reservation.cancelled { "table__row table__row--muted" } else { "table__row" }
}

pub(crate) fn room_label(reservation: &Reservation) -> String {
    format!("{} ({} seats)", reservation.room.name, reservation.room.capacity)
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let reservations = RwSignal::new(ReservationsState::default());
    let list_slot = ViewScope::for_component().slot();

    Effect::new(move || {
        let ticket = list_slot.ticket();
        reservations.update(|s| s.loading = true);
        let api = api.clone();
        spawn_request(async move {
            let result = api.reservations().list().await.and_then(|resp| resp.json::<Vec<Reservation>>());
            ticket.apply(|| match result {
                Ok(items) => reservations.update(|s| {
                    s.items = items;
                    s.loading = false;
                }),
                Err(e) => {
                    log::warn!("reservation list failed: {e}");
                    reservations.update(|s| s.loading = false);
                    notify(toasts, ToastKind::Error, "Could not load reservations.");
                }
            });
        });
    });

    let sort = Signal::derive(move || reservations.with(|s| s.sort));
    let on_sort = Callback::new(move |column: ReservationColumn| reservations.update(|s| s.sort.toggle(column)));

    let rows = move || {
        reservations
            .with(ReservationsState::visible)
            .into_iter()
            .map(|reservation| {
                let class = row_class(&reservation);
                let room = room_label(&reservation);
                let start = format_date_time(&reservation.start_date_time);
                let end = format_date_time(&reservation.end_date_time);
                let cancelled = if reservation.cancelled { "Yes" } else { "No" };
                view! {
                    <tr class=class>
                        <td>{reservation.username}</td>
                        <td>{room}</td>
                        <td>{start}</td>
                        <td>{end}</td>
                        <td>{cancelled}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="page page--reservations">
            <div class="filters">
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Filter by user"
                    prop:value=move || reservations.with(|s| s.filter.username.clone())
                    on:input=move |ev| reservations.update(|s| s.filter.username = event_target_value(&ev))
                />
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Filter by room"
                    prop:value=move || reservations.with(|s| s.filter.room.clone())
                    on:input=move |ev| reservations.update(|s| s.filter.room = event_target_value(&ev))
                />
                <input
                    class="filters__input"
                    type="text"
                    placeholder="Cancelled (true/false)"
                    prop:value=move || reservations.with(|s| s.filter.cancelled.clone())
                    on:input=move |ev| {
                        reservations.update(|s| s.filter.cancelled = event_target_value(&ev).to_lowercase());
                    }
                />
            </div>
            <Show when=move || reservations.with(|s| s.loading)>
                <p class="page__status">"Loading reservations..."</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <SortHeader label="User" column=ReservationColumn::Username sort=sort on_sort=on_sort/>
                        <th>"Room"</th>
                        <SortHeader label="Start" column=ReservationColumn::Start sort=sort on_sort=on_sort/>
                        <SortHeader label="End" column=ReservationColumn::End sort=sort on_sort=on_sort/>
                        <th>"Cancelled"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
