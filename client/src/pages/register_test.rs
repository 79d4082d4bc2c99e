use super::*;

#[test]
fn registered_message_names_the_account() {
    assert_eq!(registered_message("bob"), "Account bob created. You can log in now.");
}
