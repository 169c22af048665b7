//! Request gating. Every navigation passes through here before routing.
//!
//! A path is public when it starts with one of [`PUBLIC_PREFIXES`]; those are
//! served without looking at cookies. Everything else needs an authenticated
//! [`Session`], otherwise the browser is sent to [`LOGIN_PATH`] on the same
//! origin. The decision is made per request; nothing is remembered.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use crate::services::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// Plain prefix match, so `/login/anything` is public too.
pub const PUBLIC_PREFIXES: [&str; 5] = [LOGIN_PATH, "/assets", "/favicon.ico", "/logo.svg", "/healthz"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    Public,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Redirect,
}

#[must_use]
pub fn classify(path: &str) -> PathClass {
    if PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        PathClass::Public
    } else {
        PathClass::Protected
    }
}

#[must_use]
pub fn decide(path: &str, session: &Session) -> Gate {
    match classify(path) {
        PathClass::Public => Gate::Allow,
        PathClass::Protected if session.is_authenticated() => Gate::Allow,
        PathClass::Protected => Gate::Redirect,
    }
}

/// Axum middleware applying [`decide`]. Redirects are `307 Temporary Redirect`
/// with a relative `Location`, which keeps the request's origin.
pub async fn require_session(session: Session, request: Request, next: Next) -> Response {
    match decide(request.uri().path(), &session) {
        Gate::Allow => next.run(request).await,
        Gate::Redirect => {
            debug!(path = %request.uri().path(), "no session cookie, redirecting to login");
            Redirect::temporary(LOGIN_PATH).into_response()
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
