//! Username + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in decodes the returned token, establishes the session
//! in context (which persists it), and navigates to the borrow page. Every
//! failure shows the same message: wrong credentials, an unreachable backend,
//! and an undecodable token are indistinguishable to the user.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::net::api::Api;
use crate::state::forms::LoginForm;
use crate::state::session::{SessionContext, sign_in};
use crate::util::routes::AppRoute;
use crate::util::task::spawn_request;
use crate::util::validate::ValidationError;

pub const LOGIN_FAILED: &str = "Login failed. Check your details and try again.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(None::<ValidationError>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            signed_in.set(false);
            navigate(AppRoute::Borrow.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(LoginForm::submit) {
            Ok(request) => request,
            Err(e) => {
                errors.set(Some(e));
                return;
            }
        };
        errors.set(None);
        info.set(String::new());
        busy.set(true);

        let api = api.clone();
        let session = session.clone();
        spawn_request(async move {
            match sign_in(&api, &request).await {
                Ok(established) => {
                    session.establish(established);
                    signed_in.set(true);
                }
                Err(e) => {
                    log::warn!("login for {} failed: {e}", request.username);
                    info.set(LOGIN_FAILED.to_owned());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Log in"</h1>
                <label class="form__field">
                    "Username"
                    <input
                        class="form__input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="username"/>
                </label>
                <label class="form__field">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="password"/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Log in"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message form__message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__alt">
                    "No account yet? "
                    <a href=AppRoute::Register.path()>"Register"</a>
                </p>
            </form>
        </div>
    }
}
