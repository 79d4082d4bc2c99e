//! Form models and their validation rules.
//!
//! DESIGN
//! ======
//! Each page binds inputs to one of these structs. `submit` runs the rules and
//! turns the form into the request body, so a body is never built from
//! unchecked input.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use validator::Validate;

use crate::net::types::{Author, AuthorRequest, BookRequest, LoginRequest, RegisterRequest, ReservationRequest};
use crate::util::validate::{ValidationError, check};

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the failed field checks.
    pub fn submit(&self) -> Result<LoginRequest, ValidationError> {
        check(self)?;
        Ok(LoginRequest { username: self.username.clone(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub name: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Email is required"), email(message = "Invalid email format"))]
    pub email: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the failed field checks.
    pub fn submit(&self) -> Result<RegisterRequest, ValidationError> {
        check(self)?;
        Ok(RegisterRequest { name: self.name.clone(), password: self.password.clone(), email: self.email.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct AuthorForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Surname is required"))]
    pub surname: String,
}

impl AuthorForm {
    /// # Errors
    ///
    /// Returns the failed field checks.
    pub fn submit(&self) -> Result<AuthorRequest, ValidationError> {
        check(self)?;
        Ok(AuthorRequest { name: self.name.trim().to_owned(), surname: self.surname.trim().to_owned() })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(required(message = "Choose an author"))]
    pub author: Option<Author>,
    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: i64,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
}

impl Default for BookForm {
    fn default() -> Self {
        Self { title: String::new(), author: None, quantity: 1, genre: String::new() }
    }
}

impl BookForm {
    /// # Errors
    ///
    /// Returns the failed field checks.
    pub fn submit(&self) -> Result<BookRequest, ValidationError> {
        check(self)?;
        let author = self.author.clone().ok_or_else(|| ValidationError::single("author", "Choose an author"))?;
        Ok(BookRequest { title: self.title.clone(), author, quantity: self.quantity, genre: self.genre.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct ReservationForm {
    #[validate(range(min = 1, message = "Choose a room"))]
    pub room_id: i64,
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date_time: String,
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date_time: String,
}

impl ReservationForm {
    /// # Errors
    ///
    /// Returns the failed field checks.
    pub fn submit(&self) -> Result<ReservationRequest, ValidationError> {
        check(self)?;
        Ok(ReservationRequest {
            room_id: self.room_id,
            start_date_time: self.start_date_time.clone(),
            end_date_time: self.end_date_time.clone(),
        })
    }
}

/// Amount a user paid in, as typed into the wallet dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct WalletForm {
    #[validate(custom(function = "validate_amount"))]
    pub amount: String,
}

impl WalletForm {
    /// The fee to record.
    ///
    /// # Errors
    ///
    /// Returns the failed field check.
    pub fn submit(&self) -> Result<f64, ValidationError> {
        check(self)?;
        parse_amount(&self.amount).ok_or_else(|| ValidationError::single("amount", AMOUNT_MESSAGE))
    }
}

const AMOUNT_MESSAGE: &str = "Enter an amount greater than 0";

fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().replace(',', ".").parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

fn validate_amount(raw: &str) -> Result<(), validator::ValidationError> {
    match parse_amount(raw) {
        Some(_) => Ok(()),
        None => Err(validator::ValidationError::new("amount").with_message(AMOUNT_MESSAGE.into())),
    }
}
