//! REST helpers for the users API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`AuthError::Unavailable`] since the
//! session endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are turned into [`AuthError::Rejected`] carrying the
//! service's own message when the body has one, so the UI can show it as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{AuthError, AuthResponse, LoginUser, LogoutResponse, RegisterUser, User};
use crate::config::SessionConfig;
use crate::state::session::AuthApi;

pub(crate) const CURRENT_USER_ROUTE: &str = "users/me";
pub(crate) const REGISTER_ROUTE: &str = "users/register";
pub(crate) const LOGIN_ROUTE: &str = "users/login";
pub(crate) const LOGOUT_ROUTE: &str = "users/logout";

/// Build the error for a non-success response from its status and raw body.
///
/// The body is searched for a `message` or `error` string field; anything
/// else falls back to a generic status line.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn rejection_from_body(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .map(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .unwrap_or_default()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(status));
    AuthError::Rejected { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// [`AuthApi`] backed by the users REST endpoints under `api_base`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: SessionConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    fn url(&self, route: &str) -> String {
        self.config.endpoint(route)
    }
}

impl AuthApi for HttpAuthApi {
    fn current_user(&self) -> impl Future<Output = Result<User, AuthError>> {
        let url = self.url(CURRENT_USER_ROUTE);
        async move {
            let body: super::types::CurrentUserResponse = get_json(&url).await?;
            Ok(body.user)
        }
    }

    fn register(&self, payload: &RegisterUser) -> impl Future<Output = Result<AuthResponse, AuthError>> {
        let url = self.url(REGISTER_ROUTE);
        let payload = payload.clone();
        async move { post_json(&url, Some(&payload)).await }
    }

    fn login(&self, payload: &LoginUser) -> impl Future<Output = Result<AuthResponse, AuthError>> {
        let url = self.url(LOGIN_ROUTE);
        let payload = payload.clone();
        async move { post_json(&url, Some(&payload)).await }
    }

    fn logout(&self) -> impl Future<Output = Result<LogoutResponse, AuthError>> {
        let url = self.url(LOGOUT_ROUTE);
        async move { post_json::<(), _>(&url, None).await }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
async fn get_json<T>(url: &str) -> Result<T, AuthError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Unavailable)
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
async fn post_json<B, T>(url: &str, body: Option<&B>) -> Result<T, AuthError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        log::debug!("POST {url}");
        let builder = gloo_net::http::Request::post(url);
        let request = match body {
            Some(body) => builder.json(body).map_err(|e| AuthError::Transport(e.to_string()))?,
            None => builder.build().map_err(|e| AuthError::Transport(e.to_string()))?,
        };
        let resp = request.send().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T>(resp: gloo_net::http::Response) -> Result<T, AuthError>
where
    T: serde::de::DeserializeOwned,
{
    let status = resp.status();
    if !(200..300).contains(&status) {
        let body = resp.text().await.unwrap_or_default();
        log::debug!("{} -> {status}", resp.url());
        return Err(rejection_from_body(status, &body));
    }
    resp.json::<T>().await.map_err(|e| AuthError::Decode(e.to_string()))
}
