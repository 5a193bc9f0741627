use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use eventhub_server::auth::token::TokenService;
use eventhub_server::config::Config;
use eventhub_server::generator::GeminiGenerator;
use eventhub_server::routes::create_routes;
use eventhub_server::state::AppState;
use eventhub_server::store::postgres::{PgCredentialStore, PgEventStore};

/// Request-level timeout for the generative-text call.
const PROVIDER_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client");

    let state = AppState::new(
        Arc::new(PgCredentialStore::new(pool.clone())),
        Arc::new(PgEventStore::new(pool)),
        TokenService::new(config.jwt_secret.clone()),
        Arc::new(GeminiGenerator::new(http, config.google_api_key.clone())),
    );

    let app = create_routes(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
