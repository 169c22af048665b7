//! Browser session carried in the `access_token` cookie.
//!
//! DESIGN
//! ======
//! The token is opaque to this service. A session is authenticated when the
//! cookie is present with a non-empty value; no signature or expiry check is
//! made, so a forged or stale token passes exactly like a fresh one. The
//! backend remains the only party able to reject it.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const SESSION_COOKIE: &str = "access_token";

/// Session state of one request, built from its cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        let token = jar
            .get(SESSION_COOKIE)
            .map(Cookie::value)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        Self { token }
    }

    /// Presence-only check.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}

/// Cookie written after login: whole-site path, no expiry, readable by scripts.
#[must_use]
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token)).path("/").build()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
