use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::generator::DescriptionInput;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ok;

pub async fn generate_description(
    State(state): State<AppState>,
    Json(input): Json<DescriptionInput>,
) -> Result<Response, AppError> {
    let description = state.generator.generate(&input).await?;
    Ok(ok(json!({ "description": description })))
}
