use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::require_admin;
use crate::models::{Event, EventFilter};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, ok};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateEventRequest {
    pub title: String,
    pub venue: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub cost_type: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CreateEventRequest {
    /// First missing required field, in the order the API reports them.
    fn missing_field(&self) -> Option<&'static str> {
        let required: [(&'static str, &str); 7] = [
            ("title", &self.title),
            ("venue", &self.venue),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
            ("start_time", &self.start_time),
            ("end_time", &self.end_time),
            ("cost_type", &self.cost_type),
        ];
        required
            .iter()
            .find(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
    }
}

pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateEventRequest>,
) -> Result<Response, AppError> {
    let organizer = require_admin(&state, &headers).await?;

    if let Some(field) = request.missing_field() {
        return Err(AppError::ValidationError(format!("{} is required.", field)));
    }
    if request.title.chars().count() > 50 {
        return Err(AppError::ValidationError(
            "Title exceeds 50 characters.".to_string(),
        ));
    }
    if request.venue.chars().count() > 150 {
        return Err(AppError::ValidationError(
            "Venue exceeds 150 characters.".to_string(),
        ));
    }

    let image = match request.image.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(validate_image(raw)?),
        None => None,
    };

    let event = Event {
        id: Uuid::new_v4(),
        title: request.title,
        venue: request.venue,
        start_date: request.start_date,
        end_date: request.end_date,
        start_time: request.start_time,
        end_time: request.end_time,
        cost_type: request.cost_type,
        description: request.description,
        image,
        organizer_id: organizer.id,
        organizer_name: organizer.name,
    };
    state.events.insert(&event).await?;

    Ok(created(json!({
        "message": "Event created successfully.",
        "event": event,
    })))
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let organizer = require_admin(&state, &headers).await?;
    let events = state.events.find_by_organizer(organizer.id).await?;
    Ok(ok(json!({ "events": events })))
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BrowseParams {
    #[serde(rename = "type")]
    pub cost_type: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
}

pub async fn browse_events(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Result<Response, AppError> {
    // Empty query values impose no constraint, same as absent ones.
    let filter = EventFilter {
        cost_type: params.cost_type.filter(|v| !v.is_empty()),
        venue: params.location.filter(|v| !v.is_empty()),
        start_date: params.date.filter(|v| !v.is_empty()),
    };
    let events = state.events.find_by_filter(&filter).await?;
    Ok(ok(json!({ "events": events })))
}

/// Strips any data-URI prefix and requires the remaining payload to decode
/// as base64. The stripped payload is what gets stored.
fn validate_image(raw: &str) -> Result<String, AppError> {
    let payload = if raw.starts_with("data:image") {
        raw.split_once(',').map(|(_, rest)| rest).unwrap_or(raw)
    } else {
        raw
    };
    BASE64
        .decode(payload)
        .map_err(|_| AppError::ValidationError("Invalid image format.".to_string()))?;
    Ok(payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reports_in_api_order() {
        let mut request = CreateEventRequest::default();
        assert_eq!(request.missing_field(), Some("title"));

        request.title = "Expo".to_string();
        assert_eq!(request.missing_field(), Some("venue"));

        request.venue = "City Hall".to_string();
        request.start_date = "2026-09-01".to_string();
        request.end_date = "2026-09-02".to_string();
        request.start_time = "10:00".to_string();
        request.end_time = "18:00".to_string();
        assert_eq!(request.missing_field(), Some("cost_type"));

        request.cost_type = "Free".to_string();
        assert_eq!(request.missing_field(), None);
    }

    #[test]
    fn image_data_uri_prefix_is_stripped() {
        let stored = validate_image("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(stored, "aGVsbG8=");
    }

    #[test]
    fn plain_base64_is_stored_as_is() {
        assert_eq!(validate_image("aGVsbG8=").unwrap(), "aGVsbG8=");
    }

    #[test]
    fn undecodable_image_is_rejected() {
        let err = validate_image("not-base64!!!").unwrap_err();
        match err {
            AppError::ValidationError(msg) => assert_eq!(msg, "Invalid image format."),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
