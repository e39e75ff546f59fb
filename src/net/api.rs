//! HTTP calls to the chat and support endpoints.
//!
//! Client-side (csr): real `fetch` calls via `gloo-net`, raced against a
//! `gloo-timers` timer; when the timer wins the request is aborted through
//! its [`CancelToken`].
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is folded into [`ApiError`]; the session turns it into
//! a transcript message or alert, so nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::cancel::CancelToken;
use super::types::{ChatRequest, ChatResponse, SupportRequest, SupportResponse};

/// Errors produced by widget HTTP calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent (network failure, CORS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {0}s")]
    TimedOut(u64),

    /// The request was cancelled before it settled.
    #[error("request cancelled")]
    Cancelled,

    /// Not running in a browser.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Ask the chat endpoint a question.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, malformed
/// body, timeout, or cancellation.
pub async fn post_chat(
    url: &str,
    request: &ChatRequest,
    timeout: Duration,
    token: &CancelToken,
) -> Result<ChatResponse, ApiError> {
    post_json(url, request, timeout, token).await
}

/// Submit a support escalation.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, malformed
/// body, timeout, or cancellation.
pub async fn post_support(
    url: &str,
    request: &SupportRequest,
    timeout: Duration,
    token: &CancelToken,
) -> Result<SupportResponse, ApiError> {
    post_json(url, request, timeout, token).await
}

async fn post_json<B, R>(url: &str, body: &B, timeout: Duration, token: &CancelToken) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    if token.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    #[cfg(feature = "csr")]
    {
        use futures::future::{Either, select};

        let fetch = async {
            let signal = token.signal();
            let resp = gloo_net::http::Request::post(url)
                .abort_signal(signal.as_ref())
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| send_error(token, &e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
        };
        let timer = gloo_timers::future::sleep(timeout);

        match select(Box::pin(fetch), Box::pin(timer)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                token.cancel();
                Err(ApiError::TimedOut(timeout.as_secs()))
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, body, timeout);
        Err(ApiError::Unavailable)
    }
}

/// Distinguish an abort we asked for from a genuine transport failure.
#[cfg(any(test, feature = "csr"))]
fn send_error(token: &CancelToken, message: &str) -> ApiError {
    if token.is_cancelled() { ApiError::Cancelled } else { ApiError::Request(message.to_owned()) }
}
