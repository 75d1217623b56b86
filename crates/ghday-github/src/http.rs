//! Shared HTTP response helpers for GitHub endpoints.
//!
//! Centralizes status-code checks (rate limiting, 404, non-success →
//! [`GitHubError::Api`]) and body decoding so endpoint modules stay focused on
//! request construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::GitHubError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429**, or **403** with `x-ratelimit-remaining: 0` →
///   [`GitHubError::RateLimited`] with `Retry-After` parsing (falls back to
///   60 s if absent or unparseable).
/// - **404** → [`GitHubError::NotFound`] with the request path.
/// - **Non-success status** → [`GitHubError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GitHubError> {
    let status = resp.status();
    if status == 429 || (status == 403 && rate_limit_exhausted(&resp)) {
        return Err(GitHubError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == 404 {
        return Err(GitHubError::NotFound(resp.url().path().to_string()));
    }
    if !status.is_success() {
        return Err(GitHubError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as JSON.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, GitHubError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| GitHubError::Parse(e.to_string()))
}

fn rate_limit_exhausted(resp: &reqwest::Response) -> bool {
    resp.headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
