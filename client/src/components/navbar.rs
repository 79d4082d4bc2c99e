//! Top navigation bar.
//!
//! Shows the role-dependent page list, the wallet balance, and the signed-in
//! user with a logout action; signed-out visitors get login/register links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::Api;
use crate::state::session::SessionContext;
use crate::state::users::format_wallet;
use crate::util::routes::{AppRoute, nav_links};
use crate::util::scope::ViewScope;
use crate::util::task::spawn_request;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<Api>();
    let state = session.state();
    let navigate = use_navigate();

    let wallet = RwSignal::new(None::<f64>);
    let wallet_slot = ViewScope::for_component().slot();
    let subject = Memo::new(move |_| state.with(|s| s.subject().filter(|name| !name.is_empty()).map(str::to_owned)));

    // Balance follows whoever is signed in.
    Effect::new(move || {
        wallet.set(None);
        let Some(username) = subject.get() else {
            return;
        };
        let ticket = wallet_slot.ticket();
        let api = api.clone();
        spawn_request(async move {
            match api.auth().wallet(&username).await.and_then(|resp| resp.json::<f64>()) {
                Ok(balance) => {
                    ticket.apply(|| wallet.set(Some(balance)));
                }
                Err(e) => log::warn!("wallet lookup for {username} failed: {e}"),
            }
        });
    });

    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });
    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.clear();
        logged_out.set(true);
    };

    let links = move || {
        state.with(|s| s.role()).map(|role| {
            nav_links(role)
                .into_iter()
                .map(|link| view! { <a class="navbar__link" href=link.route.path()>{link.label}</a> })
                .collect_view()
        })
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=AppRoute::Borrow.path()>"Library"</a>
            <div class="navbar__links">{links}</div>
            <span class="navbar__spacer"></span>
            <Show
                when=move || state.with(|s| s.is_authenticated())
                fallback=|| {
                    view! {
                        <a class="navbar__link navbar__link--accent" href=AppRoute::Login.path()>"Log in"</a>
                        <a class="navbar__link navbar__link--accent" href=AppRoute::Register.path()>"Register"</a>
                    }
                }
            >
                <span class="navbar__wallet">{move || wallet.get().map(format_wallet).unwrap_or_default()}</span>
                <span class="navbar__user">
                    {move || if state.with(|s| s.is_admin()) { "[admin] " } else { "" }}
                    {move || subject.get().unwrap_or_default()}
                </span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>"Log out"</button>
            </Show>
        </nav>
    }
}
