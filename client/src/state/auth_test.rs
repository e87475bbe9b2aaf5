use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn authenticated_iff_user_present() {
    let state = AuthState {
        user: Some(SessionRecord {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            avatar: "https://example.test/a.png".to_owned(),
            token: None,
            updated_at: None,
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.display_name(), Some("Alice"));
}
