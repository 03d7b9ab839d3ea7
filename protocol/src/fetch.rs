//! Browser-side `POST /chat` exchange via `gloo-net`.
//!
//! Non-2xx statuses are reported as transport failures. The body is read as
//! text first so a non-JSON body is distinguishable from a failed read.

use crate::message::{ChatRequest, ExchangeError, parse_reply_body};

/// Post `request` to `endpoint` and classify the outcome.
///
/// # Errors
///
/// Returns the [`ExchangeError`] describing why no reply is available.
pub async fn post_chat(endpoint: &str, request: &ChatRequest) -> Result<String, ExchangeError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(request)
        .map_err(|e| ExchangeError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ExchangeError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(ExchangeError::Transport(format!("status {}", resp.status())));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| ExchangeError::Transport(e.to_string()))?;
    parse_reply_body(&body)
}

/// Post and log the failure, if any. The caller renders the outcome.
pub async fn send_to_server(endpoint: &str, request: &ChatRequest) -> Result<String, ExchangeError> {
    let outcome = post_chat(endpoint, request).await;
    if let Err(e) = &outcome {
        log::warn!("chat exchange failed: {e}");
    }
    outcome
}
