//! Registration page.
//!
//! A successful registration shows the service message and then lands on the
//! login page rather than the account page, even though the response already
//! carries the new user.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::auth_notice::AuthNotice;
use crate::net::types::RegisterUser;
use crate::state::session::AuthHandle;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and check the registration form fields.
///
/// # Errors
///
/// Returns the hint to show for the first field that fails a check.
pub fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterUser, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterUser { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let routes = auth.routes();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_register_input(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(payload) => {
                hint.set(None);
                auth.register(payload);
            }
            Err(msg) => hint.set(Some(msg)),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <AuthNotice/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || auth.state.get().loading>
                        {move || if auth.state.get().loading { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || hint.get().is_some()>
                    <p class="auth-hint">{move || hint.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <a href=routes.login>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
