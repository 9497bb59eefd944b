//! Batch import of card pairs.
//!
//! Cards are created one by one with the initial scheduling state. The first
//! invalid pair stops the import; cards created before it are kept.

use chrono::{DateTime, Utc};
use recall_core::{validate_card, ReviewSession, ValidationError};
use uuid::Uuid;

use crate::db::Database;
use crate::error::Result;
use crate::models::{ImportCard, ImportRequest, ImportResponse, ImportStatus, NewCard};

/// Normalize and validate one imported pair.
pub fn prepare_card(deck_path: &str, card: &ImportCard) -> std::result::Result<NewCard, ValidationError> {
    let original_text = card.original_text.trim().to_lowercase();
    let translated_text = card.translated_text.trim().to_lowercase();
    validate_card(&original_text, &translated_text, deck_path)?;

    Ok(NewCard {
        deck_path: deck_path.to_string(),
        original_text,
        translated_text,
    })
}

/// Build the summary reported back to the learner.
pub fn summarize(cards_count: usize, failure: Option<String>) -> ImportResponse {
    match failure {
        Some(message) => ImportResponse {
            status: ImportStatus::Error,
            message,
            cards_count,
        },
        None => ImportResponse {
            status: ImportStatus::Success,
            message: format!("{} cards were imported", cards_count),
            cards_count,
        },
    }
}

/// Import a batch of cards for one learner.
pub async fn import_cards(
    db: &Database,
    session: &ReviewSession,
    user_id: Uuid,
    request: &ImportRequest,
    now: DateTime<Utc>,
) -> Result<ImportResponse> {
    if request.cards.is_empty() {
        return Ok(summarize(0, Some("No cards to import".to_string())));
    }

    let mut created = 0;
    for (index, card) in request.cards.iter().enumerate() {
        let new_card = match prepare_card(&request.deck_path, card) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Import for user {} stopped at card {}: {}", user_id, index, e);
                return Ok(summarize(
                    created,
                    Some(format!("One or more cards couldn't be saved: card {}: {}", index + 1, e)),
                ));
            }
        };

        db.create_card(user_id, &new_card, &session.initial_state(now))
            .await?;
        created += 1;
    }

    tracing::info!("Imported {} cards for user {}", created, user_id);
    Ok(summarize(created, None))
}
