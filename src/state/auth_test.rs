use super::*;

fn user(id: &str) -> User {
    User { id: Some(id.to_owned()), name: None, email: None }
}

fn msg(text: &str) -> AuthMessage {
    AuthMessage(text.to_owned())
}

fn ok_auth(id: &str, text: &str) -> Result<AuthResponse, AuthError> {
    Ok(AuthResponse { user: user(id), message: msg(text) })
}

fn rejected(text: &str) -> AuthError {
    AuthError::Rejected { status: 401, message: text.to_owned() }
}

fn ready() -> AuthState {
    let mut state = AuthState::default();
    state.start_bootstrap();
    state.finish_bootstrap(Err(AuthError::Unavailable));
    state
}

// =============================================================
// Defaults and bootstrap
// =============================================================

#[test]
fn auth_state_default_is_bootstrapping_without_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.message.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert!(state.bootstrapping);
    assert_eq!(state.phase(), SessionPhase::Bootstrapping);
}

#[test]
fn bootstrap_success_sets_user() {
    let mut state = AuthState::default();
    assert!(state.start_bootstrap());
    state.finish_bootstrap(Ok(user("7")));
    assert!(!state.bootstrapping);
    assert_eq!(state.user, Some(user("7")));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}

#[test]
fn bootstrap_failure_is_anonymous_without_error() {
    let mut state = AuthState::default();
    state.start_bootstrap();
    state.finish_bootstrap(Err(rejected("unauthorized")));
    assert!(!state.bootstrapping);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn bootstrap_only_starts_once() {
    let mut state = AuthState::default();
    assert!(state.start_bootstrap());
    assert!(!state.start_bootstrap());
    state.finish_bootstrap(Ok(user("1")));
    assert!(!state.start_bootstrap());
    assert!(!state.bootstrapping);
}

// =============================================================
// Register / login
// =============================================================

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = ready();
    state.error = Some(rejected("old"));
    let ticket = state.begin(AuthOp::Login);
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(ticket.op(), AuthOp::Login);
    assert!(state.is_current(ticket));
}

#[test]
fn login_success_sets_user_and_message_then_schedules_redirect() {
    let mut state = ready();
    let ticket = state.begin(AuthOp::Login);
    let pending = state.settle_auth(ticket, ok_auth("1", "welcome back"), "/users/my-account");
    assert!(!state.loading);
    assert_eq!(state.user, Some(user("1")));
    assert_eq!(state.message, Some(msg("welcome back")));
    let pending = pending.unwrap();
    assert_eq!(pending.redirect(), "/users/my-account");
    assert!(state.redirect.is_none());
}

#[test]
fn login_failure_keeps_prior_user_and_sets_error() {
    let mut state = ready();
    state.user = Some(user("9"));
    let ticket = state.begin(AuthOp::Login);
    let pending = state.settle_auth(ticket, Err(rejected("invalid credentials")), "/users/my-account");
    assert!(pending.is_none());
    assert!(!state.loading);
    assert_eq!(state.user, Some(user("9")));
    assert_eq!(state.error, Some(rejected("invalid credentials")));
    assert!(state.message.is_none());
}

#[test]
fn register_success_targets_login_route() {
    let mut state = ready();
    let ticket = state.begin(AuthOp::Register);
    let pending = state.settle_auth(ticket, ok_auth("1", "welcome"), "/users/login").unwrap();
    assert_eq!(state.user.as_ref().and_then(|u| u.id.as_deref()), Some("1"));
    assert_eq!(state.message, Some(msg("welcome")));
    assert!(state.dismiss(&pending));
    assert!(state.message.is_none());
    assert_eq!(state.redirect.as_deref(), Some("/users/login"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_does_not_touch_loading() {
    let mut state = ready();
    state.user = Some(user("1"));
    let ticket = state.begin(AuthOp::Logout);
    assert!(!state.loading);
    let pending = state.settle_logout(ticket, Ok(LogoutResponse { message: msg("bye") }), "/").unwrap();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.message, Some(msg("bye")));
    assert!(state.dismiss(&pending));
    assert_eq!(state.take_redirect().as_deref(), Some("/"));
    assert!(state.redirect.is_none());
}

#[test]
fn logout_failure_sets_error_and_keeps_user() {
    let mut state = ready();
    state.user = Some(user("1"));
    let ticket = state.begin(AuthOp::Logout);
    let pending = state.settle_logout(ticket, Err(AuthError::Transport("offline".to_owned())), "/");
    assert!(pending.is_none());
    assert_eq!(state.user, Some(user("1")));
    assert_eq!(state.error, Some(AuthError::Transport("offline".to_owned())));
}

// =============================================================
// Request generations and loading
// =============================================================

#[test]
fn stale_login_result_is_dropped() {
    let mut state = ready();
    let first = state.begin(AuthOp::Login);
    let second = state.begin(AuthOp::Login);
    assert!(!state.is_current(first));

    let latest = state.settle_auth(second, ok_auth("2", "hi two"), "/users/my-account");
    assert!(latest.is_some());
    let stale = state.settle_auth(first, ok_auth("1", "hi one"), "/users/my-account");
    assert!(stale.is_none());

    assert_eq!(state.user, Some(user("2")));
    assert_eq!(state.message, Some(msg("hi two")));
    assert!(!state.loading);
}

#[test]
fn stale_failure_does_not_overwrite_fresh_success() {
    let mut state = ready();
    let first = state.begin(AuthOp::Login);
    let second = state.begin(AuthOp::Login);
    state.settle_auth(second, ok_auth("2", "ok"), "/users/my-account");
    state.settle_auth(first, Err(rejected("invalid credentials")), "/users/my-account");
    assert!(state.error.is_none());
    assert_eq!(state.user, Some(user("2")));
}

#[test]
fn loading_stays_true_until_every_call_settles() {
    let mut state = ready();
    let login = state.begin(AuthOp::Login);
    let register = state.begin(AuthOp::Register);
    state.settle_auth(login, Err(rejected("nope")), "/users/my-account");
    assert!(state.loading);
    state.settle_auth(register, Err(rejected("taken")), "/users/login");
    assert!(!state.loading);
}

#[test]
fn generations_are_tracked_per_kind() {
    let mut state = ready();
    let login = state.begin(AuthOp::Login);
    let register = state.begin(AuthOp::Register);
    assert!(state.is_current(login));
    assert!(state.is_current(register));
}

// =============================================================
// Dismissal tokens
// =============================================================

#[test]
fn newer_message_invalidates_older_dismissal() {
    let mut state = ready();
    let login = state.begin(AuthOp::Login);
    let login_pending = state.settle_auth(login, ok_auth("1", "welcome"), "/users/my-account").unwrap();
    let logout = state.begin(AuthOp::Logout);
    let logout_pending = state.settle_logout(logout, Ok(LogoutResponse { message: msg("bye") }), "/").unwrap();

    assert!(!state.dismiss(&login_pending));
    assert_eq!(state.message, Some(msg("bye")));
    assert!(state.redirect.is_none());

    assert!(state.dismiss(&logout_pending));
    assert_eq!(state.redirect.as_deref(), Some("/"));
}

#[test]
fn dismissal_fires_only_once() {
    let mut state = ready();
    let ticket = state.begin(AuthOp::Login);
    let pending = state.settle_auth(ticket, ok_auth("1", "hi"), "/users/my-account").unwrap();
    assert!(state.dismiss(&pending));
    state.take_redirect();
    assert!(!state.dismiss(&pending));
    assert!(state.redirect.is_none());
}

#[test]
fn manual_dismiss_clears_message_and_cancels_redirect() {
    let mut state = ready();
    let ticket = state.begin(AuthOp::Login);
    let pending = state.settle_auth(ticket, ok_auth("1", "hi"), "/users/my-account").unwrap();
    state.dismiss_message();
    assert!(state.message.is_none());
    assert!(!state.dismiss(&pending));
    assert!(state.redirect.is_none());
}

// =============================================================
// Route changes
// =============================================================

#[test]
fn first_route_observation_keeps_error() {
    let mut state = ready();
    state.error = Some(rejected("boom"));
    assert!(!state.observe_route("/users/login"));
    assert!(state.error.is_some());
}

#[test]
fn route_change_clears_error() {
    let mut state = ready();
    state.observe_route("/users/login");
    let ticket = state.begin(AuthOp::Login);
    state.settle_auth(ticket, Err(rejected("invalid credentials")), "/users/my-account");
    assert!(!state.observe_route("/users/login"));
    assert!(state.error.is_some());
    assert!(state.observe_route("/"));
    assert!(state.error.is_none());
}

#[test]
fn route_change_without_error_reports_nothing_cleared() {
    let mut state = ready();
    state.observe_route("/");
    assert!(!state.observe_route("/users/register"));
}
