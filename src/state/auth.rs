//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in a `RwSignal<AuthState>` provided by `AuthProvider`. Pages read the
//! snapshot; only `state::session` mutates it, always through the transition
//! methods below so the bookkeeping stays consistent.
//!
//! DESIGN
//! ======
//! Every request is stamped with a [`RequestTicket`] (operation kind plus a
//! per-kind generation). A settled request whose generation is no longer the
//! latest for its kind is dropped, so overlapping logins resolve to the one
//! issued last. Message auto-clear works the same way: each shown message
//! gets a dismissal token and only the newest token may clear it and post the
//! follow-up redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthError, AuthMessage, AuthResponse, LogoutResponse, User};

/// Remote operations the session can start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOp {
    Register,
    Login,
    Logout,
}

impl AuthOp {
    /// Whether the operation drives the `loading` flag.
    #[must_use]
    pub fn tracks_loading(self) -> bool {
        !matches!(self, Self::Logout)
    }
}

/// Coarse identity phase derived from the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial identity check still in flight; children are not rendered.
    Bootstrapping,
    Authenticated,
    Anonymous,
}

/// Stamp handed out when a request starts and presented when it settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    op: AuthOp,
    generation: u64,
}

impl RequestTicket {
    #[must_use]
    pub fn op(self) -> AuthOp {
        self.op
    }
}

/// A shown message waiting to be auto-cleared, plus where to go afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDismissal {
    token: u64,
    redirect: String,
}

impl PendingDismissal {
    #[must_use]
    pub fn redirect(&self) -> &str {
        &self.redirect
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Generations {
    register: u64,
    login: u64,
    logout: u64,
}

impl Generations {
    fn slot(&mut self, op: AuthOp) -> &mut u64 {
        match op {
            AuthOp::Register => &mut self.register,
            AuthOp::Login => &mut self.login,
            AuthOp::Logout => &mut self.logout,
        }
    }

    fn bump(&mut self, op: AuthOp) -> u64 {
        let slot = self.slot(op);
        *slot += 1;
        *slot
    }

    fn current(self, op: AuthOp) -> u64 {
        match op {
            AuthOp::Register => self.register,
            AuthOp::Login => self.login,
            AuthOp::Logout => self.logout,
        }
    }
}

/// Authentication snapshot: who is signed in plus transient UI status.
///
/// `Default` is the state at mount time: bootstrapping, nobody signed in.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub message: Option<AuthMessage>,
    pub error: Option<AuthError>,
    /// A register or login call is in flight.
    pub loading: bool,
    /// The one-time current-user fetch has not settled yet.
    pub bootstrapping: bool,
    /// Route posted by a completed dismissal, consumed by the router effect.
    pub redirect: Option<String>,
    bootstrap_started: bool,
    generations: Generations,
    in_flight: u32,
    dismissal_seq: u64,
    route: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            message: None,
            error: None,
            loading: false,
            bootstrapping: true,
            redirect: None,
            bootstrap_started: false,
            generations: Generations::default(),
            in_flight: 0,
            dismissal_seq: 0,
            route: None,
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.bootstrapping {
            SessionPhase::Bootstrapping
        } else if self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Mark the bootstrap fetch as started. Returns `false` if it already ran.
    pub fn start_bootstrap(&mut self) -> bool {
        if self.bootstrap_started {
            return false;
        }
        self.bootstrap_started = true;
        self.bootstrapping = true;
        true
    }

    /// Apply the current-user result. Failure means "not signed in" and is
    /// never surfaced as an error.
    pub fn finish_bootstrap(&mut self, result: Result<User, AuthError>) {
        match result {
            Ok(user) => self.user = Some(user),
            Err(e) => leptos::logging::log!("no existing session: {e}"),
        }
        self.bootstrapping = false;
    }

    /// Start a remote operation: clear the error and hand out a ticket.
    pub fn begin(&mut self, op: AuthOp) -> RequestTicket {
        self.error = None;
        if op.tracks_loading() {
            self.in_flight += 1;
            self.loading = true;
        }
        RequestTicket { op, generation: self.generations.bump(op) }
    }

    /// Whether `ticket` is still the newest request of its kind.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generations.current(ticket.op) == ticket.generation
    }

    /// Settle a register or login call.
    ///
    /// Returns the dismissal to schedule when a message was shown.
    pub fn settle_auth(
        &mut self,
        ticket: RequestTicket,
        result: Result<AuthResponse, AuthError>,
        redirect: &str,
    ) -> Option<PendingDismissal> {
        if !self.finish_request(ticket) {
            return None;
        }
        match result {
            Ok(AuthResponse { user, message }) => {
                self.user = Some(user);
                Some(self.show_message(message, redirect))
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Settle a logout call. Failure is stored like any other error and the
    /// user stays signed in.
    pub fn settle_logout(
        &mut self,
        ticket: RequestTicket,
        result: Result<LogoutResponse, AuthError>,
        redirect: &str,
    ) -> Option<PendingDismissal> {
        if !self.finish_request(ticket) {
            return None;
        }
        match result {
            Ok(LogoutResponse { message }) => {
                self.user = None;
                Some(self.show_message(message, redirect))
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// Fire a scheduled dismissal. Stale tokens are ignored.
    ///
    /// Returns `true` when the message was cleared and the redirect posted.
    pub fn dismiss(&mut self, pending: &PendingDismissal) -> bool {
        if pending.token != self.dismissal_seq {
            return false;
        }
        self.dismissal_seq += 1;
        self.message = None;
        self.redirect = Some(pending.redirect.clone());
        true
    }

    /// Clear the message now and cancel its scheduled redirect.
    pub fn dismiss_message(&mut self) {
        self.dismissal_seq += 1;
        self.message = None;
    }

    pub fn take_redirect(&mut self) -> Option<String> {
        self.redirect.take()
    }

    /// Record the active route. A change of route clears the error.
    ///
    /// Returns `true` if an error was cleared.
    pub fn observe_route(&mut self, path: &str) -> bool {
        if self.route.as_deref() == Some(path) {
            return false;
        }
        let changed = self.route.is_some();
        self.route = Some(path.to_owned());
        changed && self.error.take().is_some()
    }

    fn finish_request(&mut self, ticket: RequestTicket) -> bool {
        if ticket.op.tracks_loading() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.loading = self.in_flight > 0;
        }
        if !self.is_current(ticket) {
            leptos::logging::warn!("dropping stale {:?} result", ticket.op);
            return false;
        }
        true
    }

    fn show_message(&mut self, message: AuthMessage, redirect: &str) -> PendingDismissal {
        self.dismissal_seq += 1;
        self.message = Some(message);
        PendingDismissal { token: self.dismissal_seq, redirect: redirect.to_owned() }
    }
}
