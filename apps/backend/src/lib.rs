pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use recall_core::ReviewSession;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub session: Arc<ReviewSession>,
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Card routes
        .route(
            "/api/users/:user_id/cards",
            get(routes::cards::list).post(routes::cards::create),
        )
        .route("/api/users/:user_id/cards/import", post(routes::cards::import))
        // Review routes
        .route("/api/users/:user_id/review", get(routes::review::next))
        .route("/api/users/:user_id/review/:card_id", put(routes::review::check))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let session = ReviewSession::from_config(config.scheduler.clone())?;
    tracing::info!(
        "Review engine ready (max attempts {}, minimum ease {})",
        session.max_attempts(),
        session.algorithm().minimum_ease
    );

    let state = AppState {
        db: Arc::new(db),
        session: Arc::new(session),
    };

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
