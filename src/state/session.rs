//! Async driver for the auth session: request, settle, auto-dismiss.
//!
//! ARCHITECTURE
//! ============
//! [`AuthSession`] sequences one operation end to end against three seams:
//! the users API ([`AuthApi`]), wherever the snapshot lives ([`AuthStore`]),
//! and a timer ([`Sleep`]). In the browser those are `HttpAuthApi`, the
//! context `RwSignal<AuthState>`, and `gloo-timers`; tests swap in fakes.
//!
//! [`AuthHandle`] is the `Copy` value pages pull from context. Each call
//! builds a session and spawns it on the local executor, so the UI never
//! awaits anything itself.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use super::auth::{AuthOp, AuthState, PendingDismissal};
use crate::config::{AuthRoutes, SessionConfig};
use crate::net::types::{AuthError, AuthResponse, LoginUser, LogoutResponse, RegisterUser, User};

/// Remote users API consumed by the session.
pub trait AuthApi {
    fn current_user(&self) -> impl Future<Output = Result<User, AuthError>>;
    fn register(&self, payload: &RegisterUser) -> impl Future<Output = Result<AuthResponse, AuthError>>;
    fn login(&self, payload: &LoginUser) -> impl Future<Output = Result<AuthResponse, AuthError>>;
    fn logout(&self) -> impl Future<Output = Result<LogoutResponse, AuthError>>;
}

/// Mutable home of the [`AuthState`] snapshot.
pub trait AuthStore {
    /// Run `f` against the state. `None` means the store is gone (the owning
    /// reactive scope was disposed) and nothing was applied.
    fn apply<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R>;
}

impl AuthStore for RwSignal<AuthState> {
    fn apply<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Delay used for message auto-dismissal.
pub trait Sleep {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// Browser timer backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[cfg(feature = "hydrate")]
impl Sleep for BrowserTimer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(delay)
    }
}

pub struct AuthSession<A, S, T> {
    api: A,
    store: S,
    timer: T,
    config: SessionConfig,
}

impl<A, S, T> AuthSession<A, S, T>
where
    A: AuthApi,
    S: AuthStore,
    T: Sleep,
{
    pub fn new(api: A, store: S, timer: T, config: SessionConfig) -> Self {
        Self { api, store, timer, config }
    }

    /// One-time current-user check. Later calls return immediately.
    pub async fn bootstrap(&self) {
        if !self.store.apply(AuthState::start_bootstrap).unwrap_or(false) {
            return;
        }
        let result = self.api.current_user().await;
        self.store.apply(|s| s.finish_bootstrap(result));
    }

    /// Register, then show the service message and move on to the login page.
    pub async fn register(&self, payload: RegisterUser) {
        let Some(ticket) = self.store.apply(|s| s.begin(AuthOp::Register)) else {
            return;
        };
        let result = self.api.register(&payload).await;
        let redirect = self.config.routes.login.as_str();
        let pending = self.store.apply(|s| s.settle_auth(ticket, result, redirect));
        self.auto_dismiss(pending.flatten()).await;
    }

    /// Log in, then show the service message and move on to the account page.
    pub async fn login(&self, payload: LoginUser) {
        let Some(ticket) = self.store.apply(|s| s.begin(AuthOp::Login)) else {
            return;
        };
        let result = self.api.login(&payload).await;
        let redirect = self.config.routes.account.as_str();
        let pending = self.store.apply(|s| s.settle_auth(ticket, result, redirect));
        self.auto_dismiss(pending.flatten()).await;
    }

    /// Log out, then show the service message and go home.
    pub async fn logout(&self) {
        let Some(ticket) = self.store.apply(|s| s.begin(AuthOp::Logout)) else {
            return;
        };
        let result = self.api.logout().await;
        let redirect = self.config.routes.home.as_str();
        let pending = self.store.apply(|s| s.settle_logout(ticket, result, redirect));
        self.auto_dismiss(pending.flatten()).await;
    }

    async fn auto_dismiss(&self, pending: Option<PendingDismissal>) {
        let Some(pending) = pending else {
            return;
        };
        self.timer.sleep(self.config.message_ttl).await;
        if self.store.apply(|s| s.dismiss(&pending)) != Some(true) {
            leptos::logging::log!("message dismissal superseded; skipping redirect to {}", pending.redirect());
        }
    }
}

/// Context handle exposing the session operations to pages.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    pub state: RwSignal<AuthState>,
    config: StoredValue<SessionConfig>,
}

impl AuthHandle {
    pub fn new(state: RwSignal<AuthState>, config: SessionConfig) -> Self {
        Self { state, config: StoredValue::new(config) }
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config.get_value()
    }

    /// Client routes pages link to, kept in step with the redirect targets.
    #[must_use]
    pub fn routes(&self) -> AuthRoutes {
        self.config.with_value(|config| config.routes.clone())
    }

    pub fn bootstrap(self) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session();
            leptos::task::spawn_local(async move { session.bootstrap().await });
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    pub fn register(self, payload: RegisterUser) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session();
            leptos::task::spawn_local(async move { session.register(payload).await });
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    pub fn login(self, payload: LoginUser) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session();
            leptos::task::spawn_local(async move { session.login(payload).await });
        }
    }

    pub fn logout(self) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session();
            leptos::task::spawn_local(async move { session.logout().await });
        }
    }

    pub fn dismiss_message(self) {
        self.state.update(AuthState::dismiss_message);
    }

    #[cfg(feature = "hydrate")]
    fn session(self) -> AuthSession<crate::net::api::HttpAuthApi, RwSignal<AuthState>, BrowserTimer> {
        let config = self.config();
        AuthSession::new(crate::net::api::HttpAuthApi::new(config.clone()), self.state, BrowserTimer, config)
    }
}
