use super::*;

#[test]
fn user_record_keeps_unknown_fields() {
    let raw = r#"{"username":"Ada Lovelace","email":"ada@example.com","role":"admin"}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.username(), Some("Ada Lovelace"));
    assert_eq!(user.field_str("email"), Some("ada@example.com"));
    assert_eq!(user.field_str("role"), Some("admin"));

    let back: serde_json::Value = serde_json::to_value(&user).unwrap();
    assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
}

#[test]
fn user_record_without_username_is_not_given_one() {
    let user: UserRecord = serde_json::from_str(r#"{"email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.username(), None);
    assert_eq!(user.display_name(), "");
    assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"email":"ada@example.com"}"#);
}

#[test]
fn user_record_accepts_null_or_non_string_username() {
    for raw in [r#"{"username":null,"email":"a@b"}"#, r#"{"username":7,"email":"a@b"}"#] {
        let user: UserRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(user.username(), None, "raw value {raw}");
        assert_eq!(user.display_name(), "");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::from_str::<serde_json::Value>(raw).unwrap()
        );
    }
}

#[test]
fn with_username_builds_single_field_record() {
    let user = UserRecord::with_username("Ada");
    assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"username":"Ada"}"#);
}

#[test]
fn user_record_rejects_non_objects() {
    assert!(serde_json::from_str::<UserRecord>("null").is_err());
    assert!(serde_json::from_str::<UserRecord>("[1,2]").is_err());
}

#[test]
fn register_request_has_no_user_id_field() {
    let body = RegisterRequest { username: "Ada Lovelace".to_owned(), email: "ada@example.com", password: "secret1" };
    let value = serde_json::to_value(&body).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&"username"));
    assert!(keys.contains(&"email"));
    assert!(keys.contains(&"password"));
}

#[test]
fn error_body_prefers_error_over_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid credentials","message":"other"}"#).unwrap();
    assert_eq!(body.into_message(), Some("Invalid credentials".to_owned()));
}

#[test]
fn error_body_falls_back_to_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"success":false,"message":"Email already registered."}"#).unwrap();
    assert_eq!(body.into_message(), Some("Email already registered.".to_owned()));
}

#[test]
fn error_body_treats_empty_strings_as_absent() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"","message":""}"#).unwrap();
    assert_eq!(body.into_message(), None);
}
