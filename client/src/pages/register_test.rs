use super::*;

#[test]
fn validate_register_input_accepts_and_trims() {
    assert_eq!(
        validate_register_input(" alice1 ", " Alice Nguyen ", " alice@example.com ", "secret"),
        Ok(RegisterInput {
            username: "alice1".to_owned(),
            full_name: "Alice Nguyen".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("alice", "", "a@b.c", "secret"), Err("All fields are required."));
    assert_eq!(validate_register_input("alice", "Alice", "a@b.c", ""), Err("All fields are required."));
}

#[test]
fn validate_register_input_rejects_non_alphanumeric_username() {
    assert_eq!(
        validate_register_input("alice_n", "Alice", "a@b.c", "secret"),
        Err("Username may only contain letters and digits.")
    );
}

#[test]
fn validate_register_input_rejects_bad_email() {
    for email in ["alice", "@example.com", "alice@"] {
        assert_eq!(
            validate_register_input("alice", "Alice", email, "secret"),
            Err("Enter a valid email address."),
            "{email}"
        );
    }
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("alice", "Alice", "a@b.c", "12345"),
        Err("Password must be at least 6 characters.")
    );
}
