//! PostgreSQL database operations

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Card Repository ===

    /// Insert a card with its initial scheduling state
    pub async fn create_card(
        &self,
        user_id: Uuid,
        card: &NewCard,
        state: &CardState,
    ) -> Result<DbCard> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            INSERT INTO cards (user_id, deck_path, original_text, translated_text,
                               interval_days, repetition_count, ease_factor,
                               consecutive_attempts, review_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, deck_path, original_text, translated_text,
                      interval_days, repetition_count, ease_factor, consecutive_attempts,
                      review_date, last_quality, version, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&card.deck_path)
        .bind(&card.original_text)
        .bind(&card.translated_text)
        .bind(state.interval_days)
        .bind(state.repetition_count as i32)
        .bind(state.ease_factor)
        .bind(state.consecutive_attempts as i16)
        .bind(state.review_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Get a learner's card by ID
    pub async fn get_card(&self, user_id: Uuid, card_id: i64) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, user_id, deck_path, original_text, translated_text,
                   interval_days, repetition_count, ease_factor, consecutive_attempts,
                   review_date, last_quality, version, created_at, updated_at
            FROM cards
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(card_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Get all cards of a learner, optionally filtered by deck
    pub async fn list_cards(&self, user_id: Uuid, deck_path: Option<&str>) -> Result<Vec<DbCard>> {
        let cards = match deck_path {
            Some(path) => {
                sqlx::query_as::<_, DbCard>(
                    r#"
                    SELECT id, user_id, deck_path, original_text, translated_text,
                           interval_days, repetition_count, ease_factor, consecutive_attempts,
                           review_date, last_quality, version, created_at, updated_at
                    FROM cards
                    WHERE user_id = $1 AND deck_path = $2
                    ORDER BY id
                    "#,
                )
                .bind(user_id)
                .bind(path)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DbCard>(
                    r#"
                    SELECT id, user_id, deck_path, original_text, translated_text,
                           interval_days, repetition_count, ease_factor, consecutive_attempts,
                           review_date, last_quality, version, created_at, updated_at
                    FROM cards
                    WHERE user_id = $1
                    ORDER BY id
                    "#,
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(cards)
    }

    /// Pick a random card whose review date has passed
    pub async fn get_pending_card(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, user_id, deck_path, original_text, translated_text,
                   interval_days, repetition_count, ease_factor, consecutive_attempts,
                   review_date, last_quality, version, created_at, updated_at
            FROM cards
            WHERE user_id = $1 AND review_date <= $2
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Pick a random card last answered below the given quality
    pub async fn get_repeating_card(&self, user_id: Uuid, below: Quality) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, user_id, deck_path, original_text, translated_text,
                   interval_days, repetition_count, ease_factor, consecutive_attempts,
                   review_date, last_quality, version, created_at, updated_at
            FROM cards
            WHERE user_id = $1 AND last_quality < $2
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(below.value() as i16)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Count cards due for review
    pub async fn count_pending(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM cards
            WHERE user_id = $1 AND review_date <= $2
            "#,
        )
        .bind(user_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Persist a reviewed card state.
    ///
    /// Only applies when the stored version still equals `expected_version`,
    /// so two concurrent reviews of the same card cannot both win.
    pub async fn update_card_state(
        &self,
        card_id: i64,
        expected_version: i32,
        state: &CardState,
        quality: Quality,
    ) -> Result<DbCard> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            UPDATE cards SET
                interval_days = $3,
                repetition_count = $4,
                ease_factor = $5,
                consecutive_attempts = $6,
                review_date = $7,
                last_quality = $8,
                version = version + 1,
                updated_at = NOW()
            WHERE id = $1 AND version = $2
            RETURNING id, user_id, deck_path, original_text, translated_text,
                      interval_days, repetition_count, ease_factor, consecutive_attempts,
                      review_date, last_quality, version, created_at, updated_at
            "#,
        )
        .bind(card_id)
        .bind(expected_version)
        .bind(state.interval_days)
        .bind(state.repetition_count as i32)
        .bind(state.ease_factor)
        .bind(state.consecutive_attempts as i16)
        .bind(state.review_date)
        .bind(quality.value() as i16)
        .fetch_optional(&self.pool)
        .await?;

        card.ok_or_else(|| ApiError::Conflict(format!("card {} was updated concurrently", card_id)))
    }
}
