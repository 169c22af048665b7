//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the resolved configuration and the backend API client. Nothing
//! in it is mutated after startup, so handlers never lock.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::services::api::ApiClient;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<WebConfig>,
    pub api: ApiClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        let api = ApiClient::new(config.api_base_url.clone(), config.auth_api_base_url.clone());
        Self { config: Arc::new(config), api }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
