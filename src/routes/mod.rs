//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the three pages, static assets and a health probe.
//! The session gate wraps everything, including static files and the 404
//! fallback, so no path reaches a handler without being classified first.

pub mod account;
pub mod gate;
pub mod home;
pub mod login;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use maud::html;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::views::layout::page;
use crate::views::render;

pub fn app(state: AppState) -> Router {
    let assets_dir = state.config.assets_dir.clone();

    Router::new()
        .route("/", get(home::index).post(home::fetch_admin))
        .route("/login", get(login::login_form).post(login::login_submit))
        .route("/account/{account_id}", get(account::profile_page))
        .route("/account/{account_id}/profile", get(account::profile))
        .route("/healthz", get(healthz))
        .route("/favicon.ico", get(favicon))
        .route_service("/logo.svg", ServeFile::new(assets_dir.join("logo.svg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(not_found)
        .layer(middleware::from_fn(gate::require_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// No icon is shipped; answer without a body so browsers stop asking.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn not_found() -> impl IntoResponse {
    let content = html! {
        main style="padding: 2rem" {
            h1 { "404" }
            p { "This page could not be found." }
        }
    };
    (StatusCode::NOT_FOUND, render(page("Not Found", content)))
}

// =============================================================================
// TEST SUPPORT
// =============================================================================
