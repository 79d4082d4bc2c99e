//! Admin user management: wallet payments and role changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dialog sends one PATCH and reloads the whole list on success. A wallet
//! payment is entered as a positive amount paid and recorded by the façade as
//! a negative balance delta.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::components::sort_header::SortHeader;
use crate::net::api::Api;
use crate::net::types::User;
use crate::state::forms::WalletForm;
use crate::state::notify::{ToastKind, ToastState, notify};
use crate::state::users::{UserColumn, UserDialog, UsersState, format_wallet};
use crate::util::claims::Role;
use crate::util::scope::{RequestSlot, ViewScope};
use crate::util::task::spawn_request;
use crate::util::validate::ValidationError;

pub(crate) fn wallet_updated_message(username: &str) -> String {
    format!("Wallet of {username} updated!")
}

pub(crate) fn role_changed_message(username: &str, role: Role) -> String {
    format!("Role of {username} changed to {role}.")
}

fn load_users(api: Api, slot: &RequestSlot, users: RwSignal<UsersState>, toasts: RwSignal<ToastState>) {
    let ticket = slot.ticket();
    users.update(|s| s.loading = true);
    spawn_request(async move {
        let result = api.auth().users().await.and_then(|resp| resp.json::<Vec<User>>());
        ticket.apply(|| match result {
            Ok(items) => users.update(|s| {
                s.items = items;
                s.loading = false;
            }),
            Err(e) => {
                log::warn!("user list failed: {e}");
                users.update(|s| s.loading = false);
                notify(toasts, ToastKind::Error, "Could not load users.");
            }
        });
    });
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let users = RwSignal::new(UsersState::default());
    let errors = RwSignal::new(None::<ValidationError>);
    let list_slot = ViewScope::for_component().slot();

    let reload = {
        let api = api.clone();
        move || load_users(api.clone(), &list_slot, users, toasts)
    };
    let reload_on_mount = reload.clone();
    Effect::new(move || reload_on_mount());

    let sort = Signal::derive(move || users.with(|s| s.sort));
    let on_sort = Callback::new(move |column: UserColumn| users.update(|s| s.sort.toggle(column)));

    let close = move || {
        errors.set(None);
        users.update(UsersState::close_dialog);
    };

    let on_wallet_confirm = {
        let api = api.clone();
        let reload = reload.clone();
        move |_: leptos::ev::MouseEvent| {
            let UserDialog::Wallet { username, amount } = users.with_untracked(|s| s.dialog.clone()) else {
                return;
            };
            let fee = match (WalletForm { amount }).submit() {
                Ok(fee) => fee,
                Err(e) => {
                    errors.set(Some(e));
                    return;
                }
            };
            close();
            let api = api.clone();
            let reload = reload.clone();
            spawn_request(async move {
                match api.auth().update_wallet(&username, fee).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, wallet_updated_message(&username));
                        reload();
                    }
                    Err(e) => {
                        log::warn!("wallet update for {username} failed: {e}");
                        notify(toasts, ToastKind::Error, "Could not update the wallet.");
                    }
                }
            });
        }
    };

    let on_role_confirm = move |_: leptos::ev::MouseEvent| {
        let UserDialog::Role { username, role } = users.with_untracked(|s| s.dialog.clone()) else {
            return;
        };
        close();
        let api = api.clone();
        let reload = reload.clone();
        spawn_request(async move {
            match api.auth().update_role(&username, role).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, role_changed_message(&username, role));
                    reload();
                }
                Err(e) => {
                    log::warn!("role change for {username} failed: {e}");
                    notify(toasts, ToastKind::Error, "Could not change the role.");
                }
            }
        });
    };

    let rows = move || {
        users
            .with(UsersState::visible)
            .into_iter()
            .map(|user| {
                let wallet = format_wallet(user.wallet);
                let name = user.name.clone();
                let cells = (user.name.clone(), user.email.clone(), user.role.clone());
                view! {
                    <tr>
                        <td>{cells.0}</td>
                        <td>{cells.1}</td>
                        <td>{cells.2}</td>
                        <td>{wallet}</td>
                        <td>
                            <button class="btn btn--primary" on:click=move |_| users.update(|s| s.open_wallet(&name))>
                                "Change wallet"
                            </button>
                            <button class="btn" on:click=move |_| users.update(|s| s.open_role(&user))>
                                "Change role"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let wallet_amount = move || match users.with(|s| s.dialog.clone()) {
        UserDialog::Wallet { amount, .. } => amount,
        _ => String::new(),
    };
    let set_wallet_amount = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        users.update(|s| {
            if let UserDialog::Wallet { amount, .. } = &mut s.dialog {
                *amount = value;
            }
        });
    };
    let role_value = move || match users.with(|s| s.dialog.clone()) {
        UserDialog::Role { role, .. } => role.as_str(),
        _ => Role::User.as_str(),
    };
    let set_role = move |ev: leptos::ev::Event| {
        let picked = event_target_value(&ev).parse::<Role>().unwrap_or_default();
        users.update(|s| {
            if let UserDialog::Role { role, .. } = &mut s.dialog {
                *role = picked;
            }
        });
    };
    let dialog_user = move || match users.with(|s| s.dialog.clone()) {
        UserDialog::Wallet { username, .. } | UserDialog::Role { username, .. } => username,
        UserDialog::Closed => String::new(),
    };

    view! {
        <section class="page page--users">
            <Show when=move || users.with(|s| s.loading)>
                <p class="page__status">"Loading users..."</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <SortHeader label="Username" column=UserColumn::Name sort=sort on_sort=on_sort/>
                        <SortHeader label="Email" column=UserColumn::Email sort=sort on_sort=on_sort/>
                        <SortHeader label="Role" column=UserColumn::Role sort=sort on_sort=on_sort/>
                        <SortHeader label="Wallet" column=UserColumn::Wallet sort=sort on_sort=on_sort/>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <Show when=move || users.with(|s| matches!(s.dialog, UserDialog::Wallet { .. }))>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h2>"Change wallet"</h2>
                        <p>"Amount paid by " {dialog_user}</p>
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=wallet_amount
                            on:input=set_wallet_amount
                        />
                        <FieldError errors=errors field="amount"/>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close()>"Cancel"</button>
                            <button class="btn btn--primary" on:click=on_wallet_confirm.clone()>"Save"</button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || users.with(|s| matches!(s.dialog, UserDialog::Role { .. }))>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h2>"Change role"</h2>
                        <p>"New role for " {dialog_user}</p>
                        <select class="form__input" prop:value=role_value on:change=set_role>
                            {Role::ALL
                                .into_iter()
                                .map(|role| view! { <option value=role.as_str()>{role.as_str()}</option> })
                                .collect_view()}
                        </select>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close()>"Cancel"</button>
                            <button class="btn btn--primary" on:click=on_role_confirm.clone()>"Confirm"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
