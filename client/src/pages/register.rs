//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::net::api::Api;
use crate::state::forms::RegisterForm;
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::util::routes::AppRoute;
use crate::util::task::spawn_request;
use crate::util::validate::ValidationError;

pub(crate) fn registered_message(name: &str) -> String {
    format!("Account {name} created. You can log in now.")
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(None::<ValidationError>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            registered.set(false);
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(RegisterForm::submit) {
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
            match api.auth().register(&request).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, registered_message(&request.name));
                    registered.set(true);
                }
                Err(e) => {
                    log::warn!("registration of {} failed: {e}", request.name);
                    notify(toasts, ToastKind::Error, "Registration failed. Try again.");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Register"</h1>
                <label class="form__field">
                    "Username"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="name"/>
                </label>
                <label class="form__field">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="password"/>
                </label>
                <label class="form__field">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="email"/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create account"
                </button>
            </form>
        </div>
    }
}

