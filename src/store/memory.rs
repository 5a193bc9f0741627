//! In-memory stores. They back the handler tests, standing in for the
//! Postgres implementations behind the same traits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{CredentialStore, EventStore, StoreError};
use crate::models::{Event, EventFilter, Principal, PrincipalKind};

#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    admins: Arc<Mutex<HashMap<Uuid, Principal>>>,
    users: Arc<Mutex<HashMap<Uuid, Principal>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, kind: PrincipalKind) -> &Mutex<HashMap<Uuid, Principal>> {
        match kind {
            PrincipalKind::Admin => &self.admins,
            PrincipalKind::User => &self.users,
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<Principal>, StoreError> {
        let table = self.table(kind).lock().await;
        Ok(table.values().find(|p| p.email == email).cloned())
    }

    async fn find_by_id(
        &self,
        kind: PrincipalKind,
        id: Uuid,
    ) -> Result<Option<Principal>, StoreError> {
        let table = self.table(kind).lock().await;
        Ok(table.get(&id).cloned())
    }

    async fn insert(&self, kind: PrincipalKind, principal: &Principal) -> Result<(), StoreError> {
        let mut table = self.table(kind).lock().await;
        table.insert(principal.id, principal.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<Mutex<Vec<Event>>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, event: &Event) -> Result<(), StoreError> {
        let mut events = self.events.lock().await;
        events.push(event.clone());
        Ok(())
    }

    async fn find_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>, StoreError> {
        let events = self.events.lock().await;
        Ok(events
            .iter()
            .filter(|e| e.organizer_id == organizer_id)
            .cloned()
            .collect())
    }

    async fn find_by_filter(&self, filter: &EventFilter) -> Result<Vec<Event>, StoreError> {
        let events = self.events.lock().await;
        Ok(events.iter().filter(|e| filter.matches(e)).cloned().collect())
    }
}
