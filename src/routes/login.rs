//! Login routes: render the form, exchange credentials for a session cookie.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::services::session::session_cookie;
use crate::state::AppState;
use crate::views::login::{LoginView, login_page};
use crate::views::render;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// `GET /login`: empty credential form.
pub async fn login_form() -> Html<String> {
    render(login_page(&LoginView::default()))
}

/// `POST /login`: call the token endpoint, set the cookie, go to the post-login page.
///
/// Every failure (blank field, rejected credentials, unreachable backend, bad
/// body) renders the same toast and sets no cookie.
pub async fn login_submit(State(state): State<AppState>, jar: CookieJar, Form(form): Form<LoginForm>) -> Response {
    if form.username.is_empty() || form.password.is_empty() {
        return rejected(&form.username);
    }

    match state.api.request_token(&form.username, &form.password).await {
        Ok(token) => {
            info!(destination = %state.config.post_login_path, "login succeeded");
            (jar.add(session_cookie(token)), Redirect::to(&state.config.post_login_path)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "login failed");
            rejected(&form.username)
        }
    }
}

fn rejected(username: &str) -> Response {
    let page = login_page(&LoginView { username, failed: true });
    (StatusCode::UNAUTHORIZED, render(page)).into_response()
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
