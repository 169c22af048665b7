//! Service configuration parsed from environment variables.

use std::path::PathBuf;

use reqwest::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8008";
pub const DEFAULT_POST_LOGIN_PATH: &str = "/account/1";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid {var}: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("POST_LOGIN_PATH must start with '/': {0}")]
    InvalidPostLoginPath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub port: u16,
    /// Base URL of the account/profile API.
    pub api_base_url: String,
    /// Base URL of the token and admin endpoints.
    pub auth_api_base_url: String,
    /// Where a successful login lands.
    pub post_login_path: String,
    pub assets_dir: PathBuf,
}

impl WebConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://localhost:8008`
    /// - `AUTH_API_BASE_URL`: defaults to `API_BASE_URL`
    /// - `POST_LOGIN_PATH`: default `/account/1`
    /// - `ASSETS_DIR`: default `<crate>/assets`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WebConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = parse_base_url(
            "API_BASE_URL",
            lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        )?;
        let auth_api_base_url = match lookup("AUTH_API_BASE_URL") {
            Some(raw) => parse_base_url("AUTH_API_BASE_URL", raw)?,
            None => api_base_url.clone(),
        };

        let post_login_path = lookup("POST_LOGIN_PATH").unwrap_or_else(|| DEFAULT_POST_LOGIN_PATH.to_string());
        if !post_login_path.starts_with('/') {
            return Err(ConfigError::InvalidPostLoginPath(post_login_path));
        }

        let assets_dir = lookup("ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self { port, api_base_url, auth_api_base_url, post_login_path, assets_dir })
    }
}

fn parse_base_url(var: &'static str, raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    match Url::parse(&trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed),
        _ => Err(ConfigError::InvalidUrl { var, value: raw }),
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
