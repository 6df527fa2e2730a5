//! Session configuration baked in at build time.
//!
//! A wasm bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled.

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_MESSAGE_TTL_MS: u64 = 2000;
pub const DEFAULT_LOGIN_PATH: &str = "/users/login";
pub const DEFAULT_REGISTER_PATH: &str = "/users/register";
pub const DEFAULT_ACCOUNT_PATH: &str = "/users/my-account";
pub const DEFAULT_HOME_PATH: &str = "/";

/// Client routes the session redirects to and the pages link between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRoutes {
    /// Target after a successful register.
    pub login: String,
    /// Sign-up form, linked from the login page.
    pub register: String,
    /// Target after a successful login.
    pub account: String,
    /// Target after a successful logout.
    pub home: String,
}

impl Default for AuthRoutes {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_PATH.to_owned(),
            register: DEFAULT_REGISTER_PATH.to_owned(),
            account: DEFAULT_ACCOUNT_PATH.to_owned(),
            home: DEFAULT_HOME_PATH.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix for the users REST endpoints, without a trailing slash.
    pub api_base: String,
    /// How long a status message stays up before it is cleared and the
    /// follow-up redirect fires.
    pub message_ttl: Duration,
    pub routes: AuthRoutes,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            message_ttl: Duration::from_millis(DEFAULT_MESSAGE_TTL_MS),
            routes: AuthRoutes::default(),
        }
    }
}

impl SessionConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `AUTH_API_BASE`: default `/api`
    /// - `AUTH_MESSAGE_TTL_MS`: default 2000
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("AUTH_API_BASE"), option_env!("AUTH_MESSAGE_TTL_MS"))
    }

    fn from_values(api_base: Option<&str>, ttl_ms: Option<&str>) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
            message_ttl: Duration::from_millis(parse_ttl_ms(ttl_ms)),
            routes: AuthRoutes::default(),
        }
    }

    /// Absolute endpoint path for a users API route such as `users/login`.
    #[must_use]
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.api_base, route.trim_start_matches('/'))
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        // An explicit "/" means same-origin root.
        if raw.is_some_and(|r| r.trim() == "/") {
            return String::new();
        }
        return DEFAULT_API_BASE.to_owned();
    }
    trimmed.to_owned()
}

fn parse_ttl_ms(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_MESSAGE_TTL_MS;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) => ms,
        Err(_) => {
            leptos::logging::warn!("ignoring invalid AUTH_MESSAGE_TTL_MS={raw:?}");
            DEFAULT_MESSAGE_TTL_MS
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
