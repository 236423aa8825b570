//! HTTP plumbing shared by the preference and character clients.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are logged with status and body, then collapsed
//! into a fixed per-endpoint message (`Error::Transport`). Connection
//! failures get a single retry, matching the query layer's retry-once
//! default; non-success statuses are never retried.

pub mod characters;
pub mod preferences;
pub mod types;

use crate::error::Error;

/// Send a request, retrying once if it never reached the server.
pub(crate) async fn send_with_retry(
    builder: reqwest::RequestBuilder,
) -> Result<reqwest::Response, reqwest::Error> {
    let Some(retry) = builder.try_clone() else {
        return builder.send().await;
    };
    match builder.send().await {
        Ok(response) => Ok(response),
        Err(first) => {
            tracing::debug!(error = %first, "request failed, retrying once");
            retry.send().await
        }
    }
}

/// Pass a successful response through; log and collapse anything else.
pub(crate) async fn ensure_ok(
    response: reqwest::Response,
    message: &'static str,
) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::error!(status = %status, body = %body, "{message}");
    Err(Error::Transport { message })
}
