//! Postgres-backed [`ChatStore`].

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::store::{Appointment, ChatStore, ClientRecord, Faq, NewAppointment, StoreError};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn client_from_row(row: &PgRow) -> ClientRecord {
    ClientRecord {
        id: row.get("id"),
        slug: row.get("slug"),
        name: row.get("name"),
        logo: row.get("logo"),
        color: row.get("color"),
        admin_email: row.get("admin_email"),
    }
}

#[async_trait::async_trait]
impl ChatStore for PgStore {
    async fn find_client(&self, slug: &str) -> Result<Option<ClientRecord>, StoreError> {
        let row = sqlx::query("SELECT id, slug, name, logo, color, admin_email FROM clients WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(client_from_row))
    }

    async fn list_faqs(&self, client_id: Uuid) -> Result<Vec<Faq>, StoreError> {
        let rows = sqlx::query(
            r"SELECT client_id, question, answer, keywords
              FROM faqs
              WHERE client_id = $1
              ORDER BY created_at, id",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| Faq {
                client_id: r.get("client_id"),
                question: r.get("question"),
                answer: r.get("answer"),
                keywords: r.get::<Option<String>, _>("keywords").unwrap_or_default(),
            })
            .collect())
    }

    async fn insert_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError> {
        let row = sqlx::query(
            r"INSERT INTO appointments (client_id, name, date, time, purpose, raw_message)
              VALUES ($1, $2, $3, $4, $5, $6)
              RETURNING id, created_at",
        )
        .bind(new.client_id)
        .bind(&new.name)
        .bind(&new.date)
        .bind(&new.time)
        .bind(&new.purpose)
        .bind(&new.raw_message)
        .fetch_one(&self.pool)
        .await?;

        Ok(Appointment {
            id: row.get("id"),
            client_id: new.client_id,
            name: new.name,
            date: new.date,
            time: new.time,
            purpose: new.purpose,
            raw_message: new.raw_message,
            created_at: row.get("created_at"),
        })
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "pg_store_test.rs"]
mod tests;
