//! API test page routes.

use axum::extract::State;
use axum::response::Html;
use tracing::warn;

use crate::services::api::ApiError;
use crate::services::remote::Remote;
use crate::state::AppState;
use crate::views::home::home_page;
use crate::views::render;

/// `GET /`
pub async fn index() -> Html<String> {
    render(home_page(None))
}

/// `POST /`: fetch `/admin/` and pretty-print whatever came back.
pub async fn fetch_admin(State(state): State<AppState>) -> Html<String> {
    let pretty = state.api.fetch_admin().await.and_then(|value| {
        serde_json::to_string_pretty(&value).map_err(|e| ApiError::Decode(e.to_string()))
    });
    if let Err(e) = &pretty {
        warn!(error = %e, "admin fetch failed");
    }

    render(home_page(Some(&Remote::from_result(pretty))))
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
