//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test data
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use recall_backend::db::Database;
use recall_backend::models::{DbCard, NewCard};
use recall_backend::{build_router, AppState};
use recall_core::{CardState, ReviewSession};

/// Test context containing database connection and test router.
///
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    pub session: Arc<ReviewSession>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let session = Arc::new(ReviewSession::default());

        let app = build_router(AppState {
            db: db.clone(),
            session: session.clone(),
        });

        Self { db, session, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Fresh learner identity; nothing is stored until cards are created.
    pub fn new_user(&self) -> Uuid {
        Uuid::new_v4()
    }

    /// Insert a card with the default initial state due at `now`.
    pub async fn create_card(&self, user_id: Uuid, original: &str, translated: &str) -> DbCard {
        self.create_card_due(user_id, original, translated, Utc::now())
            .await
    }

    /// Insert a card that becomes due at `review_date`.
    pub async fn create_card_due(
        &self,
        user_id: Uuid,
        original: &str,
        translated: &str,
        review_date: DateTime<Utc>,
    ) -> DbCard {
        let new_card = NewCard {
            deck_path: "test".to_string(),
            original_text: original.to_string(),
            translated_text: translated.to_string(),
        };
        let state = CardState::new(review_date);
        self.db
            .create_card(user_id, &new_card, &state)
            .await
            .expect("Failed to create test card")
    }

    /// Clean up test data for a learner.
    pub async fn cleanup_user(&self, user_id: Uuid) {
        let _ = sqlx::query("DELETE FROM cards WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
    }
}
