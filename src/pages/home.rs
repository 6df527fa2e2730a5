//! Landing page.

use leptos::prelude::*;

use crate::components::auth_notice::AuthNotice;
use crate::config::AuthRoutes;
use crate::state::auth::SessionPhase;
use crate::state::session::AuthHandle;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let signed_in = move || auth.state.get().phase() == SessionPhase::Authenticated;
    let AuthRoutes { login, register, account, .. } = auth.routes();

    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <AuthNotice/>
            <Show
                when=signed_in
                fallback=move || view! {
                    <nav class="home-links">
                        <a href=login.clone()>"Sign in"</a>
                        <a href=register.clone()>"Register"</a>
                    </nav>
                }
            >
                <nav class="home-links">
                    <a href=account.clone()>"My account"</a>
                </nav>
            </Show>
        </div>
    }
}
