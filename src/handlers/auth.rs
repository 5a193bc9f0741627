use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::models::PrincipalKind;
use crate::services::accounts::{LoginRequest, RegisterRequest};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, ok};

pub async fn admin_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    register(state, PrincipalKind::Admin, request).await
}

pub async fn user_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    register(state, PrincipalKind::User, request).await
}

pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError> {
    login(state, PrincipalKind::Admin, request).await
}

pub async fn user_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError> {
    login(state, PrincipalKind::User, request).await
}

async fn register(
    state: AppState,
    kind: PrincipalKind,
    request: RegisterRequest,
) -> Result<Response, AppError> {
    let grant = state.accounts.register(kind, &request).await?;
    Ok(created(json!({
        "message": format!("{} registered successfully.", kind.label()),
        "token": grant.token,
    })))
}

async fn login(
    state: AppState,
    kind: PrincipalKind,
    request: LoginRequest,
) -> Result<Response, AppError> {
    let grant = state.accounts.login(kind, &request).await?;
    Ok(ok(json!({
        "token": grant.token,
        "role": grant.role,
    })))
}
