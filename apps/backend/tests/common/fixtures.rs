//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Create a card creation request body.
pub fn create_card_request(deck_path: &str, original: &str, translated: &str) -> serde_json::Value {
    json!({
        "deck_path": deck_path,
        "original_text": original,
        "translated_text": translated
    })
}

/// Create a check answer request body.
pub fn check_request(translated: &str) -> serde_json::Value {
    json!({ "translated_text": translated })
}

/// Create an import request body from (original, translated) pairs.
pub fn import_request(deck_path: &str, pairs: &[(&str, &str)]) -> serde_json::Value {
    let cards: Vec<serde_json::Value> = pairs
        .iter()
        .map(|(o, t)| json!({ "original_text": o, "translated_text": t }))
        .collect();
    json!({ "deck_path": deck_path, "cards": cards })
}

/// Generate a unique test deck path to avoid collisions.
pub fn unique_deck_path(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// URL of a learner's cards collection.
pub fn cards_url(user_id: Uuid) -> String {
    format!("/api/users/{}/cards", user_id)
}

/// URL for fetching the next review card.
pub fn review_url(user_id: Uuid) -> String {
    format!("/api/users/{}/review", user_id)
}

/// URL for checking an answer to a card.
pub fn check_url(user_id: Uuid, card_id: i64) -> String {
    format!("/api/users/{}/review/{}", user_id, card_id)
}
