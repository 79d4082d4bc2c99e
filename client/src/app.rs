//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{RequireAdmin, RequireAuth};
use crate::components::navbar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::transport::HttpTransport;
use crate::pages::{
    add_author::AddAuthorPage, add_book::AddBookPage, add_reservation::AddReservationPage, borrow::BorrowPage,
    login::LoginPage, register::RegisterPage, rentals::RentalsPage, reservations::ReservationsPage,
    users::UsersPage,
};
use crate::state::notify::ToastState;
use crate::state::session::SessionContext;
use crate::util::storage::BrowserStorage;
use crate::util::token_store::TokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, the REST façade, and the toast stack, then restores
/// any persisted token once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = TokenStore::new(Arc::new(BrowserStorage));
    let session = SessionContext::new(store.clone());
    let api = ApiClient::new(ApiConfig::from_build_env(), store, HttpTransport);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session.clone());
    provide_context(api);
    provide_context(toasts);

    // Effects only run in the browser, where localStorage is reachable.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/library-desk.css"/>
        <Title text="Library"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth><BorrowPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("rentals")
                        view=|| view! { <RequireAuth><RentalsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("reservations")
                        view=|| view! { <RequireAuth><ReservationsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("addReservation")
                        view=|| view! { <RequireAuth><AddReservationPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("addBook")
                        view=|| view! { <RequireAdmin><AddBookPage/></RequireAdmin> }
                    />
                    <Route
                        path=StaticSegment("addAuthor")
                        view=|| view! { <RequireAdmin><AddAuthorPage/></RequireAdmin> }
                    />
                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <RequireAdmin><UsersPage/></RequireAdmin> }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
