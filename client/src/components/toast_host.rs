//! Bottom-right toast stack.

use leptos::prelude::*;

use crate::state::notify::{Toast, ToastState};

/// Renders every visible toast; clicking one dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            role="status"
                            on:click=move |_| toasts.update(|state| state.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
