use super::*;

#[test]
fn profile_payload_trims_and_requires_username() {
    let payload = profile_payload(" alice ").unwrap();
    assert_eq!(payload.username.as_deref(), Some("alice"));
    assert!(payload.email.is_none());
    assert!(payload.password_current.is_none());

    assert_eq!(profile_payload("   "), Err("Please enter a username."));
}

#[test]
fn security_payload_requires_email_and_current_password() {
    assert_eq!(
        security_payload("", "old", "new"),
        Err("Please fill in all fields.")
    );
    assert_eq!(
        security_payload("a@x.com", "", "new"),
        Err("Please fill in all fields.")
    );
}

#[test]
fn security_payload_omits_empty_new_password() {
    let payload = security_payload(" a@x.com ", "old", "").unwrap();
    assert_eq!(payload.email.as_deref(), Some("a@x.com"));
    assert_eq!(payload.password_current.as_deref(), Some("old"));
    assert!(payload.password_new.is_none());

    let with_new = security_payload("a@x.com", "old", "fresh").unwrap();
    assert_eq!(with_new.password_new.as_deref(), Some("fresh"));
}
