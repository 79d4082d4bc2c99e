use super::*;

#[derive(Validate)]
struct Probe {
    #[validate(length(min = 1, message = "Name is required"))]
    name: String,
    #[validate(range(min = 1))]
    count: i64,
}

#[test]
fn check_passes_valid_form() {
    let probe = Probe { name: "x".to_owned(), count: 2 };
    assert!(check(&probe).is_ok());
}

#[test]
fn check_keeps_declared_message() {
    let probe = Probe { name: String::new(), count: 2 };
    let err = check(&probe).unwrap_err();
    assert_eq!(err.message_for("name"), Some("Name is required"));
    assert_eq!(err.message_for("count"), None);
}

#[test]
fn missing_message_falls_back_to_rule_code() {
    let probe = Probe { name: "x".to_owned(), count: 0 };
    let err = check(&probe).unwrap_err();
    assert_eq!(err.message_for("count"), Some("range"));
    assert_eq!(err.to_string(), "invalid fields: count");
}
