//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `protocol::fetch`.
//! Server-side (SSR): a stub returning a transport error since the endpoint
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A chat send always yields a `Result` the transcript can render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use protocol::{ChatRequest, ExchangeError};

/// Send one chat message to `POST /chat`.
///
/// # Errors
///
/// Returns the [`ExchangeError`] whose fallback text should be rendered.
pub async fn send_chat(request: ChatRequest) -> Result<String, ExchangeError> {
    #[cfg(feature = "hydrate")]
    {
        protocol::fetch::send_to_server(protocol::CHAT_ENDPOINT, &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ExchangeError::Transport("chat requests are only sent from the browser".to_owned()))
    }
}
