//! Login page: email + password form wired to the auth session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::auth_notice::AuthNotice;
use crate::net::types::LoginUser;
use crate::state::session::AuthHandle;

/// Trim and check the login form fields.
///
/// # Errors
///
/// Returns the hint to show when either field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginUser, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginUser { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let routes = auth.routes();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get(), &password.get()) {
            Ok(payload) => {
                hint.set(None);
                auth.login(payload);
            }
            Err(msg) => hint.set(Some(msg)),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <AuthNotice/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || auth.state.get().loading>
                        {move || if auth.state.get().loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || hint.get().is_some()>
                    <p class="auth-hint">{move || hint.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-switch">
                    "No account yet? "
                    <a href=routes.register>"Register"</a>
                </p>
            </div>
        </div>
    }
}
