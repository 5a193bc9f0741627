pub mod password;
pub mod token;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use uuid::Uuid;

use crate::models::{Principal, PrincipalKind};
use crate::state::AppState;
use crate::utils::error::AppError;

/// Authorization gate shared by the admin-only handlers: bearer token →
/// verified claims → admin lookup by the token's id → role check. Token
/// failures are 401; a well-formed token that does not resolve to an admin
/// is 403.
pub async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<Principal, AppError> {
    let raw = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

    let claims = state
        .tokens
        .verify(token)
        .map_err(|e| AppError::AuthError(e.to_string()))?;

    // A claims id that cannot name a principal is an invalid token.
    let id = Uuid::parse_str(&claims.id)
        .map_err(|_| AppError::AuthError(token::TokenError::Invalid.to_string()))?;

    let principal = state.credentials.find_by_id(PrincipalKind::Admin, id).await?;

    match principal {
        Some(p) if p.role == PrincipalKind::Admin.role() => Ok(p),
        _ => Err(AppError::Forbidden("Unauthorized, admin only.".to_string())),
    }
}
