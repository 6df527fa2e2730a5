//! Router-facing glue for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself never touches the router. It posts redirects into
//! `AuthState` and these effects, installed once under `<Router>`, carry them
//! out and feed route changes back in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Children render only once the initial identity check has settled.
pub fn should_render_children(state: &AuthState) -> bool {
    !state.bootstrapping
}

/// Whether a protected page should show its sign-in prompt.
///
/// A visible message means a transition is still playing out (for example the
/// farewell after logout), so the prompt waits for its redirect instead.
pub fn requires_sign_in(state: &AuthState) -> bool {
    !state.bootstrapping && state.user.is_none() && state.message.is_none() && state.redirect.is_none()
}

/// Navigate whenever the session posts a redirect, consuming it.
pub fn install_redirect_delivery<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !auth.with(|s| s.redirect.is_some()) {
            return;
        }
        if let Some(path) = auth.try_update(AuthState::take_redirect).flatten() {
            leptos::logging::log!("auth redirect -> {path}");
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// Report every route change to the session so stale errors are dismissed.
pub fn install_route_error_reset<P>(auth: RwSignal<AuthState>, pathname: P)
where
    P: Fn() -> String + 'static,
{
    Effect::new(move || {
        let path = pathname();
        auth.maybe_update(|s| s.observe_route(&path));
    });
}
