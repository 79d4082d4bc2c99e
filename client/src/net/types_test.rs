use super::*;

#[test]
fn book_deserializes_with_missing_genre() {
    let json = r#"{
        "id": 3,
        "title": "Solaris",
        "author": { "id": 1, "name": "Stanislaw", "surname": "Lem" },
        "quantity": 2
    }"#;
    let book: Book = serde_json::from_str(json).unwrap();
    assert_eq!(book.genre, None);
    assert_eq!(book.author.full_name(), "Stanislaw Lem");
}

#[test]
fn rental_reads_camel_case_fields() {
    let json = r#"{
        "id": 9,
        "bookTitle": "Solaris",
        "username": "alice",
        "startDate": "2024-05-01",
        "endDate": "2024-05-15",
        "isReturned": true
    }"#;
    let rental: Rental = serde_json::from_str(json).unwrap();
    assert_eq!(rental.book_title, "Solaris");
    assert_eq!(rental.end_date, "2024-05-15");
    assert!(rental.is_returned);
}

#[test]
fn reservation_nests_room() {
    let json = r#"{
        "id": 1,
        "username": "bob",
        "startDateTime": "2024-05-01T10:00:00",
        "endDateTime": "2024-05-01T11:30:00",
        "room": { "id": 4, "name": "Aula", "capacity": 40 },
        "cancelled": false
    }"#;
    let reservation: Reservation = serde_json::from_str(json).unwrap();
    assert_eq!(reservation.room.name, "Aula");
    assert!(!reservation.cancelled);
}

#[test]
fn user_tolerates_sparse_records() {
    let user: User = serde_json::from_str(r#"{ "name": "carol" }"#).unwrap();
    assert_eq!(user.wallet, 0.0);
    assert!(user.role.is_empty());
}

#[test]
fn reservation_request_serializes_camel_case() {
    let body = ReservationRequest {
        room_id: 4,
        start_date_time: "2024-05-01T10:00".to_owned(),
        end_date_time: "2024-05-01T11:00".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "roomId": 4,
            "startDateTime": "2024-05-01T10:00",
            "endDateTime": "2024-05-01T11:00"
        })
    );
}

#[test]
fn book_request_embeds_full_author() {
    let body = BookRequest {
        title: "Solaris".to_owned(),
        author: Author { id: 1, name: "Stanislaw".to_owned(), surname: "Lem".to_owned() },
        quantity: 3,
        genre: "sci-fi".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["author"]["surname"], "Lem");
    assert_eq!(value["quantity"], 3);
}
