//! Client route table and navigation entries.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use super::claims::Role;

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Every page the client serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Borrow,
    Rentals,
    Reservations,
    AddReservation,
    AddBook,
    AddAuthor,
    Users,
    Login,
    Register,
}

impl AppRoute {
    pub const ALL: [AppRoute; 9] = [
        AppRoute::Borrow,
        AppRoute::Rentals,
        AppRoute::Reservations,
        AppRoute::AddReservation,
        AppRoute::AddBook,
        AppRoute::AddAuthor,
        AppRoute::Users,
        AppRoute::Login,
        AppRoute::Register,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Borrow => "/",
            AppRoute::Rentals => "/rentals",
            AppRoute::Reservations => "/reservations",
            AppRoute::AddReservation => "/addReservation",
            AppRoute::AddBook => "/addBook",
            AppRoute::AddAuthor => "/addAuthor",
            AppRoute::Users => "/users",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
        }
    }

    /// Navbar caption.
    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Borrow => "Borrow a book",
            AppRoute::Rentals => "Rentals",
            AppRoute::Reservations => "Room reservations",
            AppRoute::AddReservation => "Reserve a room",
            AppRoute::AddBook => "Add book",
            AppRoute::AddAuthor => "Add author",
            AppRoute::Users => "Users",
            AppRoute::Login => "Log in",
            AppRoute::Register => "Register",
        }
    }

    pub fn access(self) -> Access {
        match self {
            AppRoute::Login | AppRoute::Register => Access::Public,
            AppRoute::Borrow | AppRoute::Rentals | AppRoute::Reservations | AppRoute::AddReservation => {
                Access::Authenticated
            }
            AppRoute::AddBook | AppRoute::AddAuthor | AppRoute::Users => Access::Admin,
        }
    }
}

/// One navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub route: AppRoute,
    pub label: &'static str,
}

/// Pages listed in the navbar for a signed-in user with `role`.
///
/// Regular users see their own rentals and reservations, so the captions say so.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let link = |route: AppRoute| NavLink { route, label: route.label() };
    match role {
        Role::Admin => vec![
            link(AppRoute::Borrow),
            link(AppRoute::AddBook),
            link(AppRoute::AddAuthor),
            link(AppRoute::Rentals),
            link(AppRoute::Reservations),
            link(AppRoute::AddReservation),
            link(AppRoute::Users),
        ],
        Role::User => vec![
            link(AppRoute::Borrow),
            NavLink { route: AppRoute::Rentals, label: "Your rentals" },
            NavLink { route: AppRoute::Reservations, label: "Your reservations" },
            link(AppRoute::AddReservation),
        ],
    }
}
