use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn login_state_default_is_idle_and_masked() {
    let state = LoginState::default();
    assert_eq!(state.status, LoginStatus::Idle);
    assert!(state.email.is_empty());
    assert!(state.password.is_empty());
    assert!(!state.show_password);
    assert_eq!(state.error(), None);
    assert!(!state.is_pending());
}

// =============================================================
// Status transitions
// =============================================================

#[test]
fn begin_attempt_clears_previous_error() {
    let mut state = LoginState::default();
    state.fail(PASSWORD_FAILURE_MESSAGE);
    assert_eq!(state.error(), Some(PASSWORD_FAILURE_MESSAGE));

    state.begin_attempt();
    assert!(state.is_pending());
    assert_eq!(state.error(), None);
}

#[test]
fn fail_releases_pending() {
    let mut state = LoginState::default();
    state.begin_attempt();
    state.fail(GOOGLE_FAILURE_MESSAGE);
    assert!(!state.is_pending());
    assert_eq!(state.status, LoginStatus::Failed(GOOGLE_FAILURE_MESSAGE.to_owned()));
}

#[test]
fn succeed_releases_pending() {
    let mut state = LoginState::default();
    state.begin_attempt();
    state.succeed();
    assert_eq!(state.status, LoginStatus::Succeeded);
    assert_eq!(state.error(), None);
}

// =============================================================
// Rendering helpers
// =============================================================

#[test]
fn password_input_type_follows_visibility() {
    let mut state = LoginState::default();
    assert_eq!(state.password_input_type(), "password");
    state.toggle_password_visibility();
    assert_eq!(state.password_input_type(), "text");
    state.toggle_password_visibility();
    assert_eq!(state.password_input_type(), "password");
}

#[test]
fn submit_label_reflects_pending() {
    let mut state = LoginState::default();
    assert_eq!(state.submit_label(), "Se connecter");
    state.begin_attempt();
    assert_eq!(state.submit_label(), "Connexion...");
}

#[test]
fn rc_handle_snapshot_sees_modifications() {
    let handle = Rc::new(RefCell::new(LoginState::default()));
    handle.modify(|s| s.email = "a@b.fr".to_owned());
    assert_eq!(handle.snapshot().email, "a@b.fr");
}
