use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer};
use crate::handlers::{self, auth, describe, events};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/admin/register/", post(auth::admin_register))
        .route("/login/", post(auth::admin_login))
        .route("/admin/create-event/", post(events::create_event))
        .route("/admin/dashboard/", get(events::admin_dashboard))
        .route("/events/browse/", get(events::browse_events))
        .route(
            "/events/generate-description/",
            post(describe::generate_description),
        )
        .route("/user/register/", post(auth::user_register))
        .route("/user/login/", post(auth::user_login))
        .with_state(state);

    apply_security_headers(router).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer()),
    )
}
