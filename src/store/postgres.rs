use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CredentialStore, EventStore, StoreError};
use crate::models::{Event, EventFilter, Principal, PrincipalKind};

const PRINCIPAL_COLUMNS: &str = "id, name, email, password_hash, role";

const EVENT_COLUMNS: &str = "id, title, venue, start_date, end_date, start_time, end_time, \
     cost_type, description, image, organizer_id, organizer_name";

#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE email = $1",
            PRINCIPAL_COLUMNS,
            kind.table()
        );
        let principal = sqlx::query_as::<_, Principal>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(principal)
    }

    async fn find_by_id(
        &self,
        kind: PrincipalKind,
        id: Uuid,
    ) -> Result<Option<Principal>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            PRINCIPAL_COLUMNS,
            kind.table()
        );
        let principal = sqlx::query_as::<_, Principal>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(principal)
    }

    async fn insert(&self, kind: PrincipalKind, principal: &Principal) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, name, email, password_hash, role) VALUES ($1, $2, $3, $4, $5)",
            kind.table()
        );
        sqlx::query(&sql)
            .bind(principal.id)
            .bind(&principal.name)
            .bind(&principal.email)
            .bind(&principal.password_hash)
            .bind(&principal.role)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn insert(&self, event: &Event) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO events ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
            EVENT_COLUMNS
        );
        sqlx::query(&sql)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.venue)
            .bind(&event.start_date)
            .bind(&event.end_date)
            .bind(&event.start_time)
            .bind(&event.end_time)
            .bind(&event.cost_type)
            .bind(&event.description)
            .bind(&event.image)
            .bind(event.organizer_id)
            .bind(&event.organizer_name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>, StoreError> {
        let sql = format!(
            "SELECT {} FROM events WHERE organizer_id = $1",
            EVENT_COLUMNS
        );
        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(organizer_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    async fn find_by_filter(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError> {
        // Absent constraints collapse to TRUE; the empty filter scans the
        // whole table, matching the API contract.
        let sql = format!(
            "SELECT {} FROM events \
             WHERE ($1::text IS NULL OR cost_type = $1) \
               AND ($2::text IS NULL OR venue ILIKE '%' || $2 || '%') \
               AND ($3::text IS NULL OR start_date = $3)",
            EVENT_COLUMNS
        );
        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(filter.cost_type.as_deref())
            .bind(filter.venue.as_deref())
            .bind(filter.start_date.as_deref())
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }
}
