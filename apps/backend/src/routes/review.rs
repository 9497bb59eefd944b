//! Review endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// Cards last answered below this quality are repeated
const REPEAT_BELOW: u8 = 4;

fn repeat_threshold() -> Result<Quality> {
    Quality::new(REPEAT_BELOW)
        .ok_or_else(|| ApiError::Internal(format!("repeat threshold {} is not a quality", REPEAT_BELOW)))
}

/// GET /api/users/:user_id/review
pub async fn next(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<CardReviewResponse>> {
    let card = match query.mode {
        ReviewMode::Pending => state.db.get_pending_card(user_id, Utc::now()).await?,
        ReviewMode::Repeating => state.db.get_repeating_card(user_id, repeat_threshold()?).await?,
    }
    .ok_or_else(|| ApiError::NotFound("No cards to review".to_string()))?;

    Ok(Json(CardReviewResponse {
        card_review: card.to_card_review(),
    }))
}

/// PUT /api/users/:user_id/review/:card_id
pub async fn check(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(Uuid, i64)>,
    Json(payload): Json<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>> {
    let card = state
        .db
        .get_card(user_id, card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Card not found".to_string()))?;

    let outcome = state.session.review(
        &card.translated_text,
        &payload.translated_text,
        &card.to_core_state(),
        Utc::now(),
    )?;

    state
        .db
        .update_card_state(card.id, card.version, &outcome.state, outcome.verdict.quality)
        .await?;

    tracing::info!(
        card_id = card.id,
        passed = outcome.verdict.passed,
        distance = outcome.verdict.distance,
        attempts = outcome.state.consecutive_attempts,
        "Checked answer"
    );

    Ok(Json(CheckAnswerResponse::new(
        &outcome.verdict,
        &card.translated_text,
        &payload.translated_text,
        outcome.state.review_date,
    )))
}
