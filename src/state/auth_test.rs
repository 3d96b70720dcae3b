use super::*;

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_with_user_is_authenticated() {
    let state = AuthState {
        user: Some(UserResponse {
            id: "u-1".to_owned(),
            username: "alice".to_owned(),
            email: Some("a@x.com".to_owned()),
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
