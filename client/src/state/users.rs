//! Admin user list view state and the wallet/role dialogs.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::cmp::Ordering;

use crate::net::types::User;
use crate::util::claims::Role;
use crate::util::table::{SortState, compare_f64, sort_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserColumn {
    Name,
    Email,
    Role,
    Wallet,
}

/// Which dialog is open, and for whom.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UserDialog {
    #[default]
    Closed,
    Wallet { username: String, amount: String },
    Role { username: String, role: Role },
}

#[derive(Clone, Debug)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub sort: SortState<UserColumn>,
    pub dialog: UserDialog,
}

impl Default for UsersState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, sort: SortState::new(UserColumn::Name), dialog: UserDialog::Closed }
    }
}

impl UsersState {
    pub fn visible(&self) -> Vec<User> {
        let mut rows = self.items.clone();
        sort_rows(&mut rows, self.sort, compare_users);
        rows
    }

    pub fn open_wallet(&mut self, username: &str) {
        self.dialog = UserDialog::Wallet { username: username.to_owned(), amount: String::new() };
    }

    /// Opens preselected on the user's current role.
    pub fn open_role(&mut self, user: &User) {
        let role = user.role.parse().unwrap_or_default();
        self.dialog = UserDialog::Role { username: user.name.clone(), role };
    }

    pub fn close_dialog(&mut self) {
        self.dialog = UserDialog::Closed;
    }
}

pub fn compare_users(a: &User, b: &User, column: UserColumn) -> Ordering {
    match column {
        UserColumn::Name => a.name.cmp(&b.name),
        UserColumn::Email => a.email.cmp(&b.email),
        UserColumn::Role => a.role.cmp(&b.role),
        UserColumn::Wallet => compare_f64(a.wallet, b.wallet),
    }
}

/// Balance as shown in the table and navbar.
pub fn format_wallet(amount: f64) -> String {
    format!("{amount:.2} PLN")
}
