//! HTTP plumbing shared by the service endpoints.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::OnceLock;

static BASE_URL: OnceLock<String> = OnceLock::new();
static HTTP: OnceLock<reqwest::Client> = OnceLock::new();

/// Initialize the backend base URL. Call this once at startup.
pub fn init_base_url(url: String) {
    BASE_URL.set(url).ok();
}

/// The configured base URL; empty means same-origin relative paths.
pub fn base_url() -> &'static str {
    BASE_URL.get().map(String::as_str).unwrap_or("")
}

/// Base URL by build mode: the hosted backend while developing, relative
/// paths behind the site's reverse proxy in release.
pub fn default_base_url() -> String {
    if cfg!(debug_assertions) {
        "https://mutubackend.com".to_string()
    } else {
        String::new()
    }
}

fn http() -> &'static reqwest::Client {
    HTTP.get_or_init(reqwest::Client::new)
}

/// Error type for backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status; `reason` is the response body text when the
    /// server sent one, else the caller's fallback message.
    #[error("{reason}")]
    Rejected { status: u16, reason: String },

    /// Success status, but the body did not match the expected shape.
    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The human-readable reason for a rejected call: the response body when it
/// carries text, otherwise the per-endpoint fallback.
pub(crate) fn rejection_reason(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) async fn post_json<B, R>(path: &str, body: &B, fallback: &str) -> Result<R, ApiError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let url = format!("{}{}", base_url(), path);
    let response = http().post(&url).json(body).send().await?;
    decode(path, response, fallback).await
}

pub(crate) async fn get_json<R>(path: &str, fallback: &str) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    let url = format!("{}{}", base_url(), path);
    let response = http().get(&url).send().await?;
    decode(path, response, fallback).await
}

async fn decode<R>(path: &str, response: reqwest::Response, fallback: &str) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let reason = rejection_reason(&body, fallback);
        tracing::warn!(%path, status = status.as_u16(), %reason, "backend rejected request");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            reason,
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
