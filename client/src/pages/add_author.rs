//! Admin form for adding an author.

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::net::api::Api;
use crate::state::forms::AuthorForm;
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::util::task::spawn_request;
use crate::util::validate::ValidationError;

#[component]
pub fn AddAuthorPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(AuthorForm::default());
    let errors = RwSignal::new(None::<ValidationError>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(AuthorForm::submit) {
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
            match api.authors().add(&request).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, "Author added!");
                    form.set(AuthorForm::default());
                }
                Err(e) => {
                    log::warn!("adding author {} {} failed: {e}", request.name, request.surname);
                    notify(toasts, ToastKind::Error, "The author could not be added.");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page page--form">
            <form class="form-card" on:submit=on_submit>
                <h1>"Add author"</h1>
                <label class="form__field">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="name"/>
                </label>
                <label class="form__field">
                    "Surname"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.surname.clone())
                        on:input=move |ev| form.update(|f| f.surname = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="surname"/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add author"
                </button>
            </form>
        </section>
    }
}
