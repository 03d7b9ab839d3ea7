//! Tenant, FAQ and appointment storage.
//!
//! DESIGN
//! ======
//! Route handlers depend on the [`ChatStore`] trait so the chat flow runs the
//! same against Postgres ([`super::pg_store::PgStore`]) and the in-memory
//! [`MemoryStore`] used when no database is configured and in tests.

use std::collections::HashMap;

use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::DEFAULT_CLIENT_SLUG;
use protocol::widget::DEFAULT_ACCENT;

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

// =============================================================================
// RECORDS
// =============================================================================

/// A tenant of the chat backend. Mirrors the `clients` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub logo: Option<String>,
    pub color: String,
    /// Address notified when an appointment is booked.
    pub admin_email: Option<String>,
}

/// Keyword-matched canned answer. Mirrors the `faqs` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub client_id: Uuid,
    pub question: String,
    pub answer: String,
    /// Comma-separated keywords.
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub client_id: Uuid,
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub purpose: String,
    pub raw_message: String,
}

/// A stored appointment. Mirrors the `appointments` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub date: String,
    pub time: String,
    pub purpose: String,
    pub raw_message: String,
    pub created_at: OffsetDateTime,
}

// =============================================================================
// ERROR + TRAIT
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("client not found: {0}")]
    UnknownClient(Uuid),
}

#[async_trait::async_trait]
pub trait ChatStore: Send + Sync {
    /// Look up a tenant by slug.
    async fn find_client(&self, slug: &str) -> Result<Option<ClientRecord>, StoreError>;

    /// FAQs of a tenant in insertion order.
    async fn list_faqs(&self, client_id: Uuid) -> Result<Vec<Faq>, StoreError>;

    /// Persist a booked appointment.
    async fn insert_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    clients: HashMap<String, ClientRecord>,
    faqs: Vec<Faq>,
    appointments: Vec<Appointment>,
}

/// Demo FAQ seeds: `(question, answer, keywords)`.
pub const DEMO_FAQS: &[(&str, &str, &str)] = &[
    (
        "What are your opening hours?",
        "We are open Monday to Friday, 9:00 to 18:00, and Saturday 10:00 to 14:00.",
        "timing,timings,hours,open,opening,close",
    ),
    ("Where are you located?", "You can find us at 123 Main Street, Suite 4.", "location,address,where,directions"),
    ("How can I contact you?", "Call us at +1 555 0100 or email hello@example.com.", "contact,phone,email,call"),
    (
        "Which services do you offer?",
        "We offer consultations, follow-up visits and same-day appointments.",
        "service,services,offer,price,prices",
    ),
];

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo tenant and its FAQs, like a fresh database.
    #[must_use]
    pub fn seeded() -> Self {
        let demo = ClientRecord {
            id: Uuid::new_v4(),
            slug: DEFAULT_CLIENT_SLUG.to_owned(),
            name: "Demo Business".to_owned(),
            logo: None,
            color: DEFAULT_ACCENT.to_owned(),
            admin_email: None,
        };
        let faqs = DEMO_FAQS
            .iter()
            .map(|(question, answer, keywords)| Faq {
                client_id: demo.id,
                question: (*question).to_owned(),
                answer: (*answer).to_owned(),
                keywords: (*keywords).to_owned(),
            })
            .collect();
        let mut clients = HashMap::new();
        clients.insert(demo.slug.clone(), demo);
        Self { inner: RwLock::new(MemoryInner { clients, faqs, appointments: Vec::new() }) }
    }

    #[cfg(test)]
    pub async fn add_client(&self, client: ClientRecord) {
        let mut inner = self.inner.write().await;
        inner.clients.insert(client.slug.clone(), client);
    }

    #[cfg(test)]
    pub async fn add_faq(&self, faq: Faq) {
        self.inner.write().await.faqs.push(faq);
    }

    /// Snapshot of every stored appointment in booking order.
    #[cfg(test)]
    pub async fn appointments(&self) -> Vec<Appointment> {
        self.inner.read().await.appointments.clone()
    }
}

#[async_trait::async_trait]
impl ChatStore for MemoryStore {
    async fn find_client(&self, slug: &str) -> Result<Option<ClientRecord>, StoreError> {
        Ok(self.inner.read().await.clients.get(slug).cloned())
    }

    async fn list_faqs(&self, client_id: Uuid) -> Result<Vec<Faq>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .faqs
            .iter()
            .filter(|f| f.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn insert_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.clients.values().any(|c| c.id == new.client_id) {
            return Err(StoreError::UnknownClient(new.client_id));
        }
        let appointment = Appointment {
            id: Uuid::new_v4(),
            client_id: new.client_id,
            name: new.name,
            date: new.date,
            time: new.time,
            purpose: new.purpose,
            raw_message: new.raw_message,
            created_at: OffsetDateTime::now_utc(),
        };
        inner.appointments.push(appointment.clone());
        Ok(appointment)
    }
}
