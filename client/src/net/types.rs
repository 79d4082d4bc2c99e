//! Backend DTOs for the library and room-reservation API.
//!
//! DESIGN
//! ======
//! Records are consumed as the server sends them (camelCase JSON). Optional
//! or loosely-populated fields carry `#[serde(default)]` so a partial record
//! still renders instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A book author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

impl Author {
    /// `"name surname"`, as shown in tables and selects.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// A catalogue entry with its available copy count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Author,
    pub quantity: i64,
    #[serde(default)]
    pub genre: Option<String>,
}

/// A book loan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: i64,
    pub book_title: String,
    pub username: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub is_returned: bool,
}

/// A bookable meeting room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
}

/// A room booking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub username: String,
    pub start_date_time: String,
    pub end_date_time: String,
    pub room: Room,
    #[serde(default)]
    pub cancelled: bool,
}

/// A user account as listed in the admin users table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub wallet: f64,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub email: String,
}

/// `POST /auth/token` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/book` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: String,
    pub author: Author,
    pub quantity: i64,
    pub genre: String,
}

/// `POST /api/author` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorRequest {
    pub name: String,
    pub surname: String,
}

/// `POST /api/rentals/rent` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RentRequest {
    pub title: String,
}

/// `POST /api/reservation` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub room_id: i64,
    pub start_date_time: String,
    pub end_date_time: String,
}
