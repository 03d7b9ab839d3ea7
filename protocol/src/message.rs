//! `/chat` wire types and reply classification.
//!
//! ERROR HANDLING
//! ==============
//! Every way an exchange can fail maps onto one [`ExchangeError`] variant, and
//! every variant has a fixed fallback text. Callers never see a failure they
//! have to handle: [`reply_text`] always yields something to render.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

/// Rendered when the request could not be delivered or the server answered
/// with a non-success status.
pub const NETWORK_ERROR_TEXT: &str = "Network error. Try again later.";
/// Rendered when the response body is not JSON.
pub const INVALID_RESPONSE_TEXT: &str = "Invalid server response.";
/// Rendered when the response is JSON but carries no usable `reply`.
pub const NO_REPLY_TEXT: &str = "Sorry, no reply.";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class name used for the rendered entry.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single rendered transcript entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot }
    }
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Tenant slug; only sent when the surface was configured with one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl ChatRequest {
    /// Build a request, dropping an empty client identifier.
    #[must_use]
    pub fn new(message: impl Into<String>, client: Option<&str>) -> Self {
        let client = client
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToOwned::to_owned);
        Self { message: message.into(), client }
    }
}

/// Successful body of `POST /chat` as produced by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Why an exchange produced no reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// Network unreachable, request build failure, or non-2xx status.
    #[error("transport failed: {0}")]
    Transport(String),
    /// Body could not be parsed as JSON.
    #[error("response body is not JSON: {0}")]
    InvalidBody(String),
    /// Body parsed but had no non-empty string `reply`.
    #[error("response has no reply")]
    MissingReply,
}

impl ExchangeError {
    /// Fixed text rendered as the bot entry for this failure.
    #[must_use]
    pub fn fallback_text(&self) -> &'static str {
        match self {
            Self::Transport(_) => NETWORK_ERROR_TEXT,
            Self::InvalidBody(_) => INVALID_RESPONSE_TEXT,
            Self::MissingReply => NO_REPLY_TEXT,
        }
    }
}

/// Extract the reply from a raw response body.
///
/// # Errors
///
/// [`ExchangeError::InvalidBody`] when the body is not JSON,
/// [`ExchangeError::MissingReply`] when `reply` is absent, not a string, or
/// empty.
pub fn parse_reply_body(body: &str) -> Result<String, ExchangeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ExchangeError::InvalidBody(e.to_string()))?;
    value
        .get("reply")
        .and_then(serde_json::Value::as_str)
        .filter(|r| !r.is_empty())
        .map(ToOwned::to_owned)
        .ok_or(ExchangeError::MissingReply)
}

/// Render stage of an exchange: the reply, or the matching fallback text.
#[must_use]
pub fn reply_text(outcome: Result<String, ExchangeError>) -> String {
    match outcome {
        Ok(reply) => reply,
        Err(e) => e.fallback_text().to_owned(),
    }
}
