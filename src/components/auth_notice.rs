//! Inline banner for the session's transient message and last error.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every auth page so a failed login stays visible until the
//! route changes, and the post-login/logout message shows during its window.

use leptos::prelude::*;

use crate::state::session::AuthHandle;

#[component]
pub fn AuthNotice() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let state = auth.state;

    let message = move || state.get().message.map(|m| m.to_string());
    let error = move || state.get().error.map(|e| e.to_string());

    view! {
        <Show when=move || message().is_some()>
            <div class="auth-notice auth-notice--message" role="status">
                <span>{move || message().unwrap_or_default()}</span>
                <button
                    class="auth-notice__close"
                    title="Dismiss"
                    on:click=move |_| auth.dismiss_message()
                >
                    "×"
                </button>
            </div>
        </Show>
        <Show when=move || error().is_some()>
            <div class="auth-notice auth-notice--error" role="alert">
                {move || error().unwrap_or_default()}
            </div>
        </Show>
    }
}
