//! REST API helpers for the portfolio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since list pages only fetch
//! after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ApiError`] so callers can decide between
//! "render empty" (reads) and "show a toast" (contact form) without ever
//! panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactMessage, ExperienceRecord, ProjectRecord, SkillRecord};

pub const SKILLS_PATH: &str = "/api/skills";
pub const PROJECTS_PATH: &str = "/api/projects";
pub const EXPERIENCE_PATH: &str = "/api/experience";
pub const CONTACT_PATH: &str = "/api/contact";

/// Why a request did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The body could not be decoded into the expected type.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Trim a configured base URL; `None`/blank means same-origin.
fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_owned()
}

/// Base URL baked in at compile time from `PORTFOLIO_API_BASE_URL`.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("PORTFOLIO_API_BASE_URL"))
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Full URL for an API path under the configured base.
#[must_use]
pub fn api_url(path: &str) -> String {
    endpoint(&api_base_url(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn status_to_result(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_collection<T>(path: &str) -> Result<Vec<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    status_to_result(resp.status())?;
    resp.json::<Vec<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch every skill from `GET /api/skills`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status or a malformed body.
pub async fn fetch_skills() -> Result<Vec<SkillRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_collection(SKILLS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch every project from `GET /api/projects`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status or a malformed body.
pub async fn fetch_projects() -> Result<Vec<ProjectRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_collection(PROJECTS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the work history from `GET /api/experience`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status or a malformed body.
pub async fn fetch_experience() -> Result<Vec<ExperienceRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_collection(EXPERIENCE_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// Only the status is inspected; the echoed record is ignored.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the server responds with a non-2xx status.
pub async fn submit_contact(message: &ContactMessage) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url(CONTACT_PATH))
            .json(message)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        status_to_result(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
