//! Appointment booking commands typed into the chat.
//!
//! Format: `book appointment: YYYY-MM-DD HH:MM, Name, purpose`. The trigger
//! phrase is matched case-insensitively anywhere in the message; details are
//! read from everything after the first `:`. Purpose may itself contain
//! commas and may be empty.

use time::PrimitiveDateTime;
use time::macros::format_description;

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;

pub const BOOKING_TRIGGER: &str = "book appointment";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("booking details must follow a ':'")]
    MissingDetails,
    #[error("invalid date/time {0:?}; expected YYYY-MM-DD HH:MM")]
    InvalidDateTime(String),
    #[error("booking is missing a name")]
    MissingName,
}

/// A parsed booking command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub at: PrimitiveDateTime,
    pub name: String,
    pub purpose: String,
}

impl BookingRequest {
    /// `YYYY-MM-DD`
    #[must_use]
    pub fn date_string(&self) -> String {
        let date = self.at.date();
        format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
    }

    /// `HH:MM`
    #[must_use]
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.at.hour(), self.at.minute())
    }
}

/// Whether `message` asks to book an appointment.
#[must_use]
pub fn is_booking_request(message: &str) -> bool {
    message.to_lowercase().contains(BOOKING_TRIGGER)
}

/// Parse the booking details of a message already known to be a booking.
///
/// # Errors
///
/// Returns a [`BookingError`] describing the first malformed part.
pub fn parse_booking(message: &str) -> Result<BookingRequest, BookingError> {
    let (_, rest) = message.split_once(':').ok_or(BookingError::MissingDetails)?;
    let parts: Vec<&str> = rest.split(',').map(str::trim).collect();

    let when = parts.first().copied().unwrap_or_default();
    // Zero padding is optional, so `2025-1-5 9:30` is accepted.
    let at = PrimitiveDateTime::parse(
        when,
        format_description!("[year]-[month padding:none]-[day padding:none] [hour padding:none]:[minute padding:none]"),
    )
    .map_err(|_| BookingError::InvalidDateTime(when.to_owned()))?;

    let name = parts
        .get(1)
        .copied()
        .filter(|n| !n.is_empty())
        .ok_or(BookingError::MissingName)?;
    let purpose = parts.get(2..).map(|rest| rest.join(", ")).unwrap_or_default();

    Ok(BookingRequest { at, name: name.to_owned(), purpose })
}

/// Reply confirming a stored booking.
#[must_use]
pub fn confirmation(name: &str, date: &str, time: &str) -> String {
    format!("Appointment booked for {name} on {date} at {time}!")
}
