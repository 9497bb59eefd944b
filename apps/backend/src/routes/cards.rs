//! Card endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use recall_core::validate_card;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::services::importer;
use crate::AppState;

/// GET /api/users/:user_id/cards
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<CardsQuery>,
) -> Result<Json<CardsResponse>> {
    let cards = state
        .db
        .list_cards(user_id, query.deck_path.as_deref())
        .await?;
    let pending_count = state.db.count_pending(user_id, Utc::now()).await?;

    Ok(Json(CardsResponse {
        cards: cards.iter().map(DbCard::to_api_card).collect(),
        pending_count,
    }))
}

/// POST /api/users/:user_id/cards
pub async fn create(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<NewCard>,
) -> Result<(StatusCode, Json<CardResponse>)> {
    validate_card(
        &payload.original_text,
        &payload.translated_text,
        &payload.deck_path,
    )?;

    let initial = state.session.initial_state(Utc::now());
    let card = state.db.create_card(user_id, &payload, &initial).await?;

    tracing::debug!("Created card {} for user {}", card.id, user_id);

    Ok((
        StatusCode::CREATED,
        Json(CardResponse {
            card: card.to_api_card(),
        }),
    ))
}

/// POST /api/users/:user_id/cards/import
pub async fn import(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>> {
    let summary =
        importer::import_cards(&state.db, &state.session, user_id, &payload, Utc::now()).await?;
    Ok(Json(summary))
}
