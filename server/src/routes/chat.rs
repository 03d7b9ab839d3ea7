//! `POST /chat`: the receptionist endpoint used by every chat surface.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use protocol::{ChatReply, ChatRequest};

use crate::services::reception::{self, ReceptionError};
use crate::state::AppState;

/// `POST /chat`: answer one message with `{ "reply": ... }`.
///
/// Every failure is a non-2xx status; chat surfaces render those as their
/// network fallback.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, StatusCode> {
    let client = reception::resolve_client(&state, request.client.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "client resolution failed");
            reception_error_to_status(&e)
        })?;

    // Keyed on the resolved tenant: unknown slugs share the default tenant's window.
    if let Err(e) = state.rate_limiter.check_and_record(&client.slug) {
        tracing::warn!(error = %e, client = %client.slug, "chat request rate limited");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    match reception::reply_for(&state, &client, &request.message).await {
        Ok(reply) => Ok(Json(ChatReply { reply })),
        Err(e) => {
            tracing::error!(error = %e, client = %client.slug, "chat reply failed");
            Err(reception_error_to_status(&e))
        }
    }
}

pub(crate) fn reception_error_to_status(err: &ReceptionError) -> StatusCode {
    match err {
        ReceptionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ReceptionError::NoDefaultClient(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
