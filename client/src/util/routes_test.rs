use super::*;

#[test]
fn admin_pages_require_admin() {
    assert_eq!(AppRoute::AddBook.access(), Access::Admin);
    assert_eq!(AppRoute::AddAuthor.access(), Access::Admin);
    assert_eq!(AppRoute::Users.access(), Access::Admin);
    assert_eq!(AppRoute::Borrow.access(), Access::Authenticated);
    assert_eq!(AppRoute::Login.access(), Access::Public);
}

#[test]
fn nav_links_hide_admin_pages_from_users() {
    let user_routes: Vec<AppRoute> = nav_links(Role::User).into_iter().map(|l| l.route).collect();
    assert_eq!(
        user_routes,
        vec![AppRoute::Borrow, AppRoute::Rentals, AppRoute::Reservations, AppRoute::AddReservation]
    );

    let admin_routes: Vec<AppRoute> = nav_links(Role::Admin).into_iter().map(|l| l.route).collect();
    assert_eq!(admin_routes.len(), 7);
    assert!(admin_routes.contains(&AppRoute::AddBook));
    assert!(admin_routes.contains(&AppRoute::Users));
}

#[test]
fn user_captions_mention_ownership() {
    let labels: Vec<&str> = nav_links(Role::User).into_iter().map(|l| l.label).collect();
    assert!(labels.contains(&"Your rentals"));
    assert!(labels.contains(&"Your reservations"));
}
