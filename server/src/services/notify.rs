//! Booking notification email to the tenant admin.
//!
//! Delivery is best-effort: callers log failures and still confirm the
//! booking to the visitor.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::store::{Appointment, ClientRecord};
use crate::config::EmailConfig;

const APPOINTMENT_TEMPLATE: &str = include_str!("../../templates/appointment_email.html");

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email delivery failed: {0}")]
    EmailDelivery(String),
}

#[derive(Clone)]
pub struct Notifier {
    resend: Resend,
    from: String,
}

impl Notifier {
    #[must_use]
    pub fn new(config: &EmailConfig) -> Self {
        Self { resend: Resend::new(&config.resend_api_key), from: config.from.clone() }
    }

    /// Email `to` about a new appointment at `client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the email provider rejects the message.
    pub async fn appointment_booked(
        &self,
        to: &str,
        client: &ClientRecord,
        appointment: &Appointment,
    ) -> Result<(), NotifyError> {
        let subject = format!("New Appointment: {}", client.name);
        let html = render_appointment_email(client, appointment);
        let email = CreateEmailBaseOptions::new(&self.from, [to], subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| NotifyError::EmailDelivery(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn render_appointment_email(client: &ClientRecord, appointment: &Appointment) -> String {
    fill_template(
        APPOINTMENT_TEMPLATE,
        &[
            ("CLIENT", &client.name),
            ("NAME", &appointment.name),
            ("DATE", &appointment.date),
            ("TIME", &appointment.time),
            ("PURPOSE", &appointment.purpose),
        ],
    )
}

/// Replace every `{{KEY}}` in one pass with its HTML-escaped value.
/// Substituted text is never rescanned; unknown keys are kept verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(&escape_html(value)),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
