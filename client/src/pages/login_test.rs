use super::*;

#[test]
fn login_failure_message_is_generic() {
    assert_eq!(LOGIN_FAILED, "Login failed. Check your details and try again.");
    assert!(!LOGIN_FAILED.to_lowercase().contains("password"));
}
