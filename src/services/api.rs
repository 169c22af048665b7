//! SmartSpendAI backend client: token exchange, profile fetch, admin listing.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies each get their
//! own `ApiError` variant. Pages decide how much of that to show; nothing here
//! retries or times out.

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Account profile as returned by `GET /account/{account_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub account_id: i64,
    pub country: String,
    pub gender: i64,
    pub start_date: String,
}

impl Profile {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        Gender::from_code(self.gender)
    }
}

/// Display mapping for the numeric gender code.
///
/// The backend stores a small integer with no documented meaning beyond
/// `0`. Everything that is not `0` renders as `Female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        if code == 0 { Self::Male } else { Self::Female }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error {}", .0.as_u16())]
    Status(StatusCode),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid request url: {0}")]
    Url(String),
}

// =============================================================================
// CLIENT
// =============================================================================

/// Shared handle to the backend API. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
    auth_base: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(api_base: impl Into<String>, auth_base: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), api_base: api_base.into(), auth_base: auth_base.into() }
    }

    /// `POST /auth/token` with a form-encoded body. Returns the access token.
    pub async fn request_token(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(format!("{}/auth/token", self.auth_base))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let token: TokenResponse = read_json(resp).await?;
        if token.access_token.is_empty() {
            return Err(ApiError::Decode("empty access_token".into()));
        }
        Ok(token.access_token)
    }

    /// `GET /account/{account_id}`.
    pub async fn fetch_profile(&self, account_id: &str) -> Result<Profile, ApiError> {
        let url = self.account_url(account_id)?;
        let resp = self.http.get(url).send().await?;
        read_json(resp).await
    }

    /// `GET /admin/`: arbitrary JSON, returned untouched.
    pub async fn fetch_admin(&self) -> Result<serde_json::Value, ApiError> {
        let resp = self.http.get(format!("{}/admin/", self.auth_base)).send().await?;
        read_json(resp).await
    }

    /// The account id is pushed as a single percent-encoded path segment.
    fn account_url(&self, account_id: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.api_base).map_err(|e| ApiError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Url(self.api_base.clone()))?
            .pop_if_empty()
            .push("account")
            .push(account_id);
        Ok(url)
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
