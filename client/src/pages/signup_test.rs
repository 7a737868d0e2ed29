use futures::executor::block_on;

use super::*;
use crate::net::types::UserRecord;
use crate::state::session::MemoryStorage;
use crate::test_support::FakeTransport;

fn form(password: &str, confirm_password: &str) -> SignupForm {
    SignupForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        user_id: "  ada42 ".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    }
}

// =============================================================
// validate_passwords
// =============================================================

#[test]
fn validate_passwords_accepts_matching_six_chars() {
    assert_eq!(validate_passwords("abcdef", "abcdef"), Ok(()));
}

#[test]
fn validate_passwords_rejects_mismatch() {
    assert_eq!(validate_passwords("abcdef", "abcxyz"), Err(PASSWORDS_DO_NOT_MATCH));
}

#[test]
fn validate_passwords_rejects_short_password() {
    assert_eq!(validate_passwords("abc12", "abc12"), Err(PASSWORD_TOO_SHORT));
    assert_eq!(validate_passwords("", ""), Err(PASSWORD_TOO_SHORT));
}

#[test]
fn validate_passwords_checks_match_before_length() {
    assert_eq!(validate_passwords("abc", "xyz"), Err(PASSWORDS_DO_NOT_MATCH));
}

#[test]
fn validate_passwords_counts_characters_not_bytes() {
    assert_eq!(validate_passwords("pässwö", "pässwö"), Ok(()));
    assert_eq!(validate_passwords("äöüäö", "äöüäö"), Err(PASSWORD_TOO_SHORT));
}

#[test]
fn validate_passwords_counts_utf16_code_units() {
    // Each emoji is a surrogate pair, so three of them reach the minimum.
    assert_eq!(validate_passwords("😀😀😀", "😀😀😀"), Ok(()));
    assert_eq!(validate_passwords("😀😀a", "😀😀a"), Err(PASSWORD_TOO_SHORT));
}

// =============================================================
// submit_signup
// =============================================================

#[test]
fn short_password_is_rejected_without_request() {
    let transport = FakeTransport::responding(200, r#"{"username":"Ada Lovelace"}"#);
    let client = AuthClient::new(transport.clone(), MemoryStorage::new(), "");

    let err = block_on(submit_signup(&client, &form("abc12", "abc12"))).unwrap_err();
    assert!(err.contains("must be at least 6 characters"));
    assert!(transport.calls().is_empty());
    assert_eq!(client.current_user(), None);
}

#[test]
fn mismatched_passwords_are_rejected_without_request() {
    let transport = FakeTransport::responding(200, r#"{"username":"Ada Lovelace"}"#);
    let client = AuthClient::new(transport.clone(), MemoryStorage::new(), "");

    let err = block_on(submit_signup(&client, &form("abcdef", "abcxyz"))).unwrap_err();
    assert!(err.contains("do not match"));
    assert!(transport.calls().is_empty());
}

#[test]
fn valid_signup_registers_once_without_user_id() {
    let transport = FakeTransport::responding(200, r#"{"username":"Ada Lovelace","email":"ada@example.com"}"#);
    let client = AuthClient::new(transport.clone(), MemoryStorage::new(), "");

    assert_eq!(block_on(submit_signup(&client, &form("abcdef", "abcdef"))), Ok(()));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/api/auth/register");
    let body = calls[0].1.as_object().unwrap();
    assert!(!body.contains_key("userId"));
    assert!(!body.contains_key("user_id"));
    assert!(!calls[0].1.to_string().contains("ada42"));
    assert_eq!(body["username"], "Ada Lovelace");
    assert_eq!(client.current_user().as_ref().and_then(UserRecord::username), Some("Ada Lovelace"));
}

#[test]
fn server_rejection_is_reported_verbatim() {
    let transport = FakeTransport::responding(400, r#"{"error":"Username already taken."}"#);
    let client = AuthClient::new(transport, MemoryStorage::new(), "");

    assert_eq!(
        block_on(submit_signup(&client, &form("abcdef", "abcdef"))),
        Err("Username already taken.".to_owned())
    );
    assert_eq!(client.current_user(), None);
}
