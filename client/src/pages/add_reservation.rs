//! Room booking form.

#[cfg(test)]
#[path = "add_reservation_test.rs"]
mod add_reservation_test;

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::net::api::Api;
use crate::net::types::Room;
use crate::state::forms::ReservationForm;
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::util::scope::ViewScope;
use crate::util::task::spawn_request;
use crate::util::validate::ValidationError;

pub(crate) fn room_option_label(room: &Room) -> String {
    format!("{} (capacity: {})", room.name, room.capacity)
}

/// Select values are strings; anything unparsable means "no room chosen".
pub(crate) fn parse_room_id(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

#[component]
pub fn AddReservationPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let rooms = RwSignal::new(Vec::<Room>::new());
    let form = RwSignal::new(ReservationForm::default());
    let errors = RwSignal::new(None::<ValidationError>);
    let busy = RwSignal::new(false);
    let rooms_slot = ViewScope::for_component().slot();

    {
        let api = api.clone();
        Effect::new(move || {
            let ticket = rooms_slot.ticket();
            let api = api.clone();
            spawn_request(async move {
                let result = api.rooms().list().await.and_then(|resp| resp.json::<Vec<Room>>());
                ticket.apply(|| match result {
                    Ok(items) => rooms.set(items),
                    Err(e) => {
                        log::warn!("room list failed: {e}");
                        notify(toasts, ToastKind::Error, "Could not load rooms.");
                    }
                });
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(ReservationForm::submit) {
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
            match api.reservations().add(&request).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, "Reservation added!");
                    form.set(ReservationForm::default());
                }
                Err(e) => {
                    log::warn!("reservation for room {} failed: {e}", request.room_id);
                    notify(toasts, ToastKind::Error, "Could not add the reservation.");
                }
            }
            busy.set(false);
        });
    };

    let room_options = move || {
        rooms
            .get()
            .into_iter()
            .map(|room| {
                let label = room_option_label(&room);
                view! { <option value=room.id.to_string()>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <section class="page page--form">
            <form class="form-card" on:submit=on_submit novalidate>
                <h1>"Reserve a room"</h1>
                <label class="form__field">
                    "Room"
                    <select
                        class="form__input"
                        prop:value=move || form.with(|f| f.room_id.to_string())
                        on:change=move |ev| form.update(|f| f.room_id = parse_room_id(&event_target_value(&ev)))
                    >
                        <option value="0">"Choose a room from the list"</option>
                        {room_options}
                    </select>
                    <FieldError errors=errors field="room_id"/>
                </label>
                <label class="form__field">
                    "Start"
                    <input
                        class="form__input"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.start_date_time.clone())
                        on:input=move |ev| form.update(|f| f.start_date_time = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="start_date_time"/>
                </label>
                <label class="form__field">
                    "End"
                    <input
                        class="form__input"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.end_date_time.clone())
                        on:input=move |ev| form.update(|f| f.end_date_time = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="end_date_time"/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Reserve" }}
                </button>
            </form>
        </section>
    }
}
