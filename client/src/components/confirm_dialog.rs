//! Yes/no confirmation modal.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: &'static str,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <h2>{title}</h2>
                <p>{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>"Confirm"</button>
                </div>
            </div>
        </div>
    }
}
