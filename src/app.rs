//! Root application component with routing and the auth context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::SessionConfig;
use crate::pages::{account::AccountPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::session::AuthHandle;
use crate::util::auth::{install_redirect_delivery, install_route_error_reset, should_render_children};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-session.css"/>
        <Title text="Account"/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("users"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("users"), StaticSegment("register")) view=RegisterPage/>
                    <Route path=(StaticSegment("users"), StaticSegment("my-account")) view=AccountPage/>
                </Routes>
            </AuthProvider>
        </Router>
    }
}

/// Owns the auth session for the lifetime of the app.
///
/// Provides `RwSignal<AuthState>` and `AuthHandle` as context, starts the
/// one-time current-user fetch, and holds back `children` until it settles.
/// Must sit inside `<Router>`.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(AuthState::default());
    let auth = AuthHandle::new(state, SessionConfig::from_build_env());
    provide_context(state);
    provide_context(auth);

    let location = use_location();
    install_route_error_reset(state, move || location.pathname.get());
    install_redirect_delivery(state, use_navigate());

    auth.bootstrap();

    view! {
        <Show when=move || should_render_children(&state.get())>
            {children()}
        </Show>
    }
}
