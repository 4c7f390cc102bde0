use super::*;

#[test]
fn user_parses_backend_response() {
    let user: User = serde_json::from_str(
        r#"{
            "username": "alice",
            "full_name": "Alice Nguyen",
            "email": "alice@example.com",
            "password_changed_at": "0001-01-01T00:00:00Z",
            "created_at": "2024-03-01T10:00:00Z"
        }"#,
    )
    .unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.full_name, "Alice Nguyen");
    assert_eq!(user.created_at, "2024-03-01T10:00:00Z");
    assert!(user.extra.is_empty());
}

#[test]
fn user_keeps_unknown_fields() {
    let raw = r#"{"username":"bob","full_name":"","email":"","password_changed_at":"","created_at":"","tier":"gold"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.extra.get("tier"), Some(&serde_json::json!("gold")));

    let back: serde_json::Value = serde_json::to_value(&user).unwrap();
    assert_eq!(back["tier"], "gold");
}

#[test]
fn user_missing_optional_fields_default_to_empty() {
    let user: User = serde_json::from_str(r#"{"username":"carol"}"#).unwrap();
    assert_eq!(user, User { username: "carol".to_owned(), ..User::default() });
}

#[test]
fn user_without_username_is_rejected() {
    assert!(serde_json::from_str::<User>(r#"{"email":"x@y.z"}"#).is_err());
}

#[test]
fn login_response_parses_tokens_and_user() {
    let resp: LoginUserResponse = serde_json::from_str(
        r#"{
            "session_id": "5d1f",
            "access_token": "v2.local.aaa",
            "access_token_expires_at": "2024-03-01T10:15:00Z",
            "refresh_token": "v2.local.bbb",
            "refresh_token_expires_at": "2024-03-02T10:00:00Z",
            "user": {"username": "alice"}
        }"#,
    )
    .unwrap();
    assert_eq!(resp.access_token, "v2.local.aaa");
    assert_eq!(resp.refresh_token, "v2.local.bbb");
    assert_eq!(resp.user.username, "alice");
}

#[test]
fn login_request_serializes_credentials() {
    let req = LoginUserRequest { username: "alice".to_owned(), password: "secret".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"username": "alice", "password": "secret"})
    );
}

#[test]
fn error_response_parses() {
    let err: ErrorResponse = serde_json::from_str(r#"{"error":"user not found"}"#).unwrap();
    assert_eq!(err.error, "user not found");
}
