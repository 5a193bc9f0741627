pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Event, EventFilter, Principal, PrincipalKind};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read/insert access to the two principal tables, selected by kind. No
/// update or delete exists anywhere in the system.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, StoreError>;

    async fn find_by_id(
        &self,
        kind: PrincipalKind,
        id: Uuid,
    ) -> Result<Option<Principal>, StoreError>;

    async fn insert(&self, kind: PrincipalKind, principal: &Principal) -> Result<(), StoreError>;
}

/// Insert and query access to the event table. Queries return the entire
/// matching set: no pagination, sorting or result-size limit.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, event: &Event) -> Result<(), StoreError>;

    async fn find_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>, StoreError>;

    async fn find_by_filter(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError>;
}
