//! Account profile routes.

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use tracing::warn;

use crate::services::remote::Remote;
use crate::state::AppState;
use crate::views::account::{PROFILE_ERROR, account_page, profile_fragment};
use crate::views::render;

/// `GET /account/{account_id}`: page shell in the loading state.
pub async fn profile_page(uri: Uri) -> Html<String> {
    let fragment_url = format!("{}/profile", uri.path().trim_end_matches('/'));
    render(account_page(&fragment_url))
}

/// `GET /account/{account_id}/profile`: fetch and render the settled profile.
pub async fn profile(State(state): State<AppState>, Path(account_id): Path<String>) -> Response {
    let result = state.api.fetch_profile(&account_id).await;
    let profile = Remote::settle(result, |e| {
        warn!(%account_id, error = %e, "profile fetch failed");
        PROFILE_ERROR.to_string()
    });

    let status = match profile {
        Remote::Failed(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    (status, render(profile_fragment(&profile))).into_response()
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
