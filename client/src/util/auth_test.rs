use super::*;
use crate::net::types::SessionRecord;

fn user() -> SessionRecord {
    SessionRecord {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: "https://example.test/a.png".to_owned(),
        token: None,
        updated_at: None,
    }
}

fn state(user_present: bool, loading: bool) -> AuthState {
    AuthState { user: user_present.then(user), loading }
}

const ALL_PREVIOUS: [Option<GuardDecision>; 4] =
    [None, Some(GuardDecision::Pending), Some(GuardDecision::Denied), Some(GuardDecision::Granted)];

// =============================================================
// evaluate
// =============================================================

#[test]
fn pending_while_loading_regardless_of_user() {
    assert_eq!(GuardDecision::evaluate(&state(false, true)), GuardDecision::Pending);
    assert_eq!(GuardDecision::evaluate(&state(true, true)), GuardDecision::Pending);
}

#[test]
fn denied_when_loaded_without_user() {
    assert_eq!(GuardDecision::evaluate(&state(false, false)), GuardDecision::Denied);
}

#[test]
fn granted_when_loaded_with_user() {
    assert_eq!(GuardDecision::evaluate(&state(true, false)), GuardDecision::Granted);
}

// =============================================================
// transition
// =============================================================

#[test]
fn never_redirects_while_pending() {
    for previous in ALL_PREVIOUS {
        for user_present in [false, true] {
            let step = transition(previous, &state(user_present, true));
            assert_eq!(step.decision, GuardDecision::Pending);
            assert_eq!(step.redirect, None, "previous {previous:?}");
        }
    }
}

#[test]
fn never_redirects_while_granted() {
    for previous in ALL_PREVIOUS {
        let step = transition(previous, &state(true, false));
        assert_eq!(step.decision, GuardDecision::Granted);
        assert_eq!(step.redirect, None);
    }
}

#[test]
fn redirects_to_login_on_entering_denied() {
    for previous in [None, Some(GuardDecision::Pending), Some(GuardDecision::Granted)] {
        let step = transition(previous, &state(false, false));
        assert_eq!(step, GuardStep { decision: GuardDecision::Denied, redirect: Some(LOGIN_ROUTE) });
    }
}

#[test]
fn stays_quiet_when_already_denied() {
    let step = transition(Some(GuardDecision::Denied), &state(false, false));
    assert_eq!(step.decision, GuardDecision::Denied);
    assert_eq!(step.redirect, None);
}

#[test]
fn restore_then_logout_walks_pending_granted_denied() {
    let first = transition(None, &state(false, true));
    let second = transition(Some(first.decision), &state(true, false));
    let third = transition(Some(second.decision), &state(false, false));
    assert_eq!(
        [first.decision, second.decision, third.decision],
        [GuardDecision::Pending, GuardDecision::Granted, GuardDecision::Denied]
    );
    assert_eq!([first.redirect, second.redirect, third.redirect], [None, None, Some("/login")]);
}
