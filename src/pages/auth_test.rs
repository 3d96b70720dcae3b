use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both() {
    assert_eq!(
        validate_login_input(" a@b.com ", "pw123"),
        Ok(("a@b.com".to_owned(), "pw123".to_owned()))
    );
    assert_eq!(
        validate_login_input("", "pw123"),
        Err("Please enter email and password.")
    );
    assert_eq!(
        validate_login_input("a@b.com", ""),
        Err("Please enter email and password.")
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input("alice", "a@x.com", "pw123", "pw123")
            .map(|input| (input.username, input.email, input.password)),
        Ok((
            "alice".to_owned(),
            "a@x.com".to_owned(),
            "pw123".to_owned()
        ))
    );
    assert_eq!(
        validate_register_input("", "a@x.com", "pw123", "pw123").map(|_| ()),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        validate_register_input("alice", "a@x.com", "pw123", "").map(|_| ()),
        Err("Please fill in all fields.")
    );
}

#[test]
fn validate_register_input_rejects_mismatched_passwords() {
    assert_eq!(
        validate_register_input("alice", "a@x.com", "pw123", "pw124").map(|_| ()),
        Err("Passwords do not match.")
    );
}
