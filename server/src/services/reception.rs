//! Receptionist reply logic behind `POST /chat`.
//!
//! Order of precedence for a message:
//! 1. a well-formed `book appointment: ...` command books and confirms;
//! 2. the first tenant FAQ whose keyword occurs in the message answers;
//! 3. otherwise the greeting.
//!
//! A malformed booking command is logged and falls through to 2 and 3.

use protocol::GREETING;
use tracing::{info, warn};

use super::booking::{self, BookingRequest};
use super::faq;
use super::store::{ClientRecord, NewAppointment, StoreError};
use crate::state::AppState;

#[cfg(test)]
#[path = "reception_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum ReceptionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("default client {0:?} does not exist")]
    NoDefaultClient(String),
}

/// Resolve the tenant a request speaks to: the requested slug when it exists,
/// else the configured default.
///
/// # Errors
///
/// Returns an error if the store fails or the default tenant is missing.
pub async fn resolve_client(state: &AppState, requested: Option<&str>) -> Result<ClientRecord, ReceptionError> {
    if let Some(slug) = requested.map(str::trim).filter(|s| !s.is_empty()) {
        if let Some(client) = state.store.find_client(slug).await? {
            return Ok(client);
        }
        warn!(client = %slug, "unknown client; using default");
    }

    state
        .store
        .find_client(&state.default_client)
        .await?
        .ok_or_else(|| ReceptionError::NoDefaultClient(state.default_client.to_string()))
}

/// Produce the reply text for one chat message to an already resolved tenant.
///
/// # Errors
///
/// Returns an error if the store fails.
pub async fn reply_for(state: &AppState, client: &ClientRecord, message: &str) -> Result<String, ReceptionError> {
    let message = message.trim();

    if booking::is_booking_request(message) {
        match booking::parse_booking(message) {
            Ok(parsed) => return book(state, client, parsed, message).await,
            Err(e) => warn!(error = %e, client = %client.slug, "booking command not understood"),
        }
    }

    let faqs = state.store.list_faqs(client.id).await?;
    if let Some(answer) = faq::find_answer(&faqs, message) {
        return Ok(answer.to_owned());
    }

    Ok(GREETING.to_owned())
}

async fn book(
    state: &AppState,
    client: &ClientRecord,
    parsed: BookingRequest,
    raw_message: &str,
) -> Result<String, ReceptionError> {
    let appointment = state
        .store
        .insert_appointment(NewAppointment {
            client_id: client.id,
            date: parsed.date_string(),
            time: parsed.time_string(),
            name: parsed.name,
            purpose: parsed.purpose,
            raw_message: raw_message.to_owned(),
        })
        .await?;

    info!(client = %client.slug, appointment_id = %appointment.id, "appointment booked");

    if let (Some(notifier), Some(admin)) = (state.notifier.clone(), client.admin_email.clone()) {
        let client = client.clone();
        let appointment = appointment.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.appointment_booked(&admin, &client, &appointment).await {
                warn!(error = %e, client = %client.slug, "booking notification failed");
            }
        });
    }

    Ok(booking::confirmation(&appointment.name, &appointment.date, &appointment.time))
}
