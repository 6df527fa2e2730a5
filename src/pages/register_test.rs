use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" alice ", " alice@example.com ", "longenough", "longenough"),
        Ok(RegisterUser {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "longenough".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "a@b.com", "longenough", "longenough"), Err("Fill in every field."));
    assert_eq!(validate_register_input("alice", "  ", "longenough", "longenough"), Err("Fill in every field."));
    assert_eq!(validate_register_input("alice", "a@b.com", "", ""), Err("Fill in every field."));
}

#[test]
fn validate_register_input_checks_email_shape() {
    assert_eq!(
        validate_register_input("alice", "not-an-email", "longenough", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_register_input_enforces_min_password_length() {
    assert_eq!(
        validate_register_input("alice", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_register_input_requires_matching_confirmation() {
    assert_eq!(
        validate_register_input("alice", "a@b.com", "longenough", "longenougH"),
        Err("Passwords do not match.")
    );
}
