//! Inline validation message under a form input.

use leptos::prelude::*;

use crate::util::validate::ValidationError;

#[component]
pub fn FieldError(errors: RwSignal<Option<ValidationError>>, field: &'static str) -> impl IntoView {
    let message = move || errors.with(|e| e.as_ref().and_then(|e| e.message_for(field)).map(str::to_owned));
    view! { <span class="form__error">{message}</span> }
}
