use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::*;
use crate::routes::test_support::{location, request, send};
use crate::services::session::SESSION_COOKIE;

// The gate never talks to the backend; any unroutable base URL will do.
const NO_BACKEND: &str = "http://127.0.0.1:9";

fn anonymous() -> Session {
    Session::default()
}

fn with_token(token: &str) -> Session {
    Session::from_jar(&CookieJar::new().add(Cookie::new(SESSION_COOKIE, token.to_owned())))
}

// =============================================================================
// classify / decide
// =============================================================================

#[test]
fn public_prefixes_classify_as_public() {
    for prefix in PUBLIC_PREFIXES {
        assert_eq!(classify(prefix), PathClass::Public, "{prefix}");
    }
}

#[test]
fn public_match_is_a_plain_prefix_test() {
    assert_eq!(classify("/login/help"), PathClass::Public);
    assert_eq!(classify("/loginx"), PathClass::Public);
    assert_eq!(classify("/assets/app.css"), PathClass::Public);
    assert_eq!(classify("/logo.svg?v=2"), PathClass::Public);
}

#[test]
fn everything_else_is_protected() {
    for path in ["/", "/account/1", "/account/42/profile", "/admin", "/Login", "/x/login", ""] {
        assert_eq!(classify(path), PathClass::Protected, "{path:?}");
    }
}

#[test]
fn public_paths_allow_with_or_without_session() {
    for prefix in PUBLIC_PREFIXES {
        assert_eq!(decide(prefix, &anonymous()), Gate::Allow, "{prefix}");
        assert_eq!(decide(prefix, &with_token("t")), Gate::Allow, "{prefix}");
    }
}

#[test]
fn protected_path_without_session_redirects() {
    assert_eq!(decide("/account/42", &anonymous()), Gate::Redirect);
    assert_eq!(decide("/", &anonymous()), Gate::Redirect);
}

#[test]
fn protected_path_with_any_token_allows() {
    for token in ["abc", "garbage!", "eyJhbGciOiJub25lIn0.e30.", "0"] {
        assert_eq!(decide("/account/42", &with_token(token)), Gate::Allow, "{token}");
    }
}

#[test]
fn empty_token_counts_as_missing() {
    assert_eq!(decide("/", &with_token("")), Gate::Redirect);
}

// =============================================================================
// require_session through the router
// =============================================================================

#[tokio::test]
async fn anonymous_navigation_redirects_to_login() {
    for path in ["/", "/account/42", "/account/42/profile", "/budgets"] {
        let resp = send(NO_BACKEND, request("GET", path, None)).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&resp), Some(LOGIN_PATH), "{path}");
    }
}

#[tokio::test]
async fn anonymous_post_to_protected_route_redirects() {
    let resp = send(NO_BACKEND, request("POST", "/", None)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn public_routes_are_served_without_cookie() {
    assert_eq!(send(NO_BACKEND, request("GET", "/login", None)).await.status(), StatusCode::OK);
    assert_eq!(send(NO_BACKEND, request("GET", "/healthz", None)).await.status(), StatusCode::OK);
    assert_eq!(send(NO_BACKEND, request("GET", "/favicon.ico", None)).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(send(NO_BACKEND, request("GET", "/logo.svg", None)).await.status(), StatusCode::OK);
    assert_eq!(send(NO_BACKEND, request("GET", "/assets/app.css", None)).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_public_asset_is_not_redirected() {
    let resp = send(NO_BACKEND, request("GET", "/assets/nope.css", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn garbage_cookie_passes_the_gate() {
    let resp = send(NO_BACKEND, request("GET", "/", Some("garbage"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_with_session_is_not_found() {
    let resp = send(NO_BACKEND, request("GET", "/budgets", Some("tok"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
