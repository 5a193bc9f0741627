use std::sync::Arc;

use crate::auth::token::TokenService;
use crate::generator::DescriptionGenerator;
use crate::services::accounts::AccountService;
use crate::store::{CredentialStore, EventStore};

/// Shared per-request context, built once at startup. Everything here is
/// immutable or safe for concurrent use; handlers own a cheap clone per
/// request. Stores and the generator are trait objects so tests can plug in
/// in-memory and scripted implementations.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub credentials: Arc<dyn CredentialStore>,
    pub events: Arc<dyn EventStore>,
    pub tokens: TokenService,
    pub generator: Arc<dyn DescriptionGenerator>,
}

impl AppState {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        events: Arc<dyn EventStore>,
        tokens: TokenService,
        generator: Arc<dyn DescriptionGenerator>,
    ) -> Self {
        Self {
            accounts: AccountService::new(Arc::clone(&credentials), tokens.clone()),
            credentials,
            events,
            tokens,
            generator,
        }
    }
}
