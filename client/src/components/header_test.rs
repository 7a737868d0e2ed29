use super::*;
use crate::net::types::UserRecord;

#[test]
fn anonymous_menu_offers_sign_in_and_sign_up() {
    let items = menu_items(&AuthState::default());
    assert_eq!(
        items,
        vec![
            MenuItem { label: "Sign In", action: MenuAction::Navigate(Page::SignIn) },
            MenuItem { label: "Sign Up", action: MenuAction::Navigate(Page::SignUp) },
        ]
    );
}

#[test]
fn signed_in_menu_offers_only_logout() {
    let auth = AuthState { user: Some(UserRecord::with_username("Ada")) };
    assert_eq!(menu_items(&auth), vec![MenuItem { label: "Logout", action: MenuAction::Logout }]);
}
