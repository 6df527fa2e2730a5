//! Account page for the signed-in user.

use leptos::prelude::*;

use crate::components::auth_notice::AuthNotice;
use crate::state::session::AuthHandle;
use crate::util::auth::requires_sign_in;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let state = auth.state;
    let login_href = auth.routes().login;

    let display_name = move || {
        state
            .get()
            .user
            .and_then(|user| user.name.or(user.email).or(user.id))
            .unwrap_or_default()
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"My account"</h1>
                <AuthNotice/>
                <Show
                    when=move || !requires_sign_in(&state.get())
                    fallback=move || view! {
                        <p class="auth-hint">
                            "You are not signed in. "
                            <a href=login_href.clone()>"Sign in"</a>
                        </p>
                    }
                >
                    <Show when=move || state.get().user.is_some()>
                        <p class="account-name">"Signed in as " <strong>{display_name}</strong></p>
                        <button class="auth-button" on:click=move |_| auth.logout()>
                            "Log out"
                        </button>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
