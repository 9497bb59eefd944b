//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from recall-core
pub use recall_core::{CardState, Quality, Verdict, VerdictKind};

// === Database Entity Types ===

/// Card stored in PostgreSQL, scheduling state included
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCard {
    pub id: i64,
    pub user_id: uuid::Uuid,
    pub deck_path: String,
    pub original_text: String,
    pub translated_text: String,
    pub interval_days: f64,
    pub repetition_count: i32,
    pub ease_factor: f64,
    pub consecutive_attempts: i16,
    pub review_date: DateTime<Utc>,
    pub last_quality: Option<i16>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbCard {
    /// Convert to recall-core CardState
    pub fn to_core_state(&self) -> CardState {
        CardState {
            interval_days: self.interval_days.max(0.0),
            repetition_count: self.repetition_count.max(0) as u32,
            ease_factor: self.ease_factor,
            consecutive_attempts: self.consecutive_attempts.clamp(1, u8::MAX as i16) as u8,
            review_date: self.review_date,
        }
    }

    /// Convert to API card type
    pub fn to_api_card(&self) -> Card {
        Card {
            id: self.id,
            deck_path: self.deck_path.clone(),
            original_text: self.original_text.clone(),
            translated_text: self.translated_text.clone(),
            review_date: self.review_date,
        }
    }

    /// Convert to the question-only view shown during review
    pub fn to_card_review(&self) -> CardReview {
        CardReview {
            id: self.id,
            original_text: self.original_text.clone(),
        }
    }
}

/// Card fields supplied by the creator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCard {
    pub deck_path: String,
    pub original_text: String,
    pub translated_text: String,
}

// === API Request/Response Types ===

/// Card as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub deck_path: String,
    pub original_text: String,
    pub translated_text: String,
    pub review_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardResponse {
    pub card: Card,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<Card>,
    pub pending_count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardsQuery {
    pub deck_path: Option<String>,
}

/// Which set of cards to draw the next review from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    /// Cards whose review date has passed
    #[default]
    Pending,
    /// Cards last answered with less than perfect recall
    Repeating,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewQuery {
    #[serde(default)]
    pub mode: ReviewMode,
}

/// Question side of a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardReview {
    pub id: i64,
    pub original_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardReviewResponse {
    pub card_review: CardReview,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub translated_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckAnswerResponse {
    pub passed: bool,
    pub distance: usize,
    pub quality: Quality,
    pub result: VerdictKind,
    pub message: String,
    pub review_date: DateTime<Utc>,
}

impl CheckAnswerResponse {
    pub fn new(
        verdict: &Verdict,
        expected: &str,
        submitted: &str,
        review_date: DateTime<Utc>,
    ) -> Self {
        Self {
            passed: verdict.passed,
            distance: verdict.distance,
            quality: verdict.quality,
            result: verdict.kind,
            message: verdict_message(verdict.kind, expected, submitted),
            review_date,
        }
    }
}

/// User-facing message for a graded answer
pub fn verdict_message(kind: VerdictKind, expected: &str, submitted: &str) -> String {
    match kind {
        VerdictKind::Correct => "Correct!".to_string(),
        VerdictKind::Typo => format!(
            "Correct, but you made a typo. You typed \"{}\", the answer is \"{}\".",
            submitted, expected
        ),
        VerdictKind::Incorrect => format!("Incorrect. The answer is \"{}\".", expected),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCard {
    pub original_text: String,
    pub translated_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportRequest {
    pub deck_path: String,
    pub cards: Vec<ImportCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub status: ImportStatus,
    pub message: String,
    pub cards_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn db_card() -> DbCard {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();
        DbCard {
            id: 7,
            user_id: uuid::Uuid::nil(),
            deck_path: "spanish".to_string(),
            original_text: "house".to_string(),
            translated_text: "casa".to_string(),
            interval_days: 6.0,
            repetition_count: 2,
            ease_factor: 2.36,
            consecutive_attempts: 1,
            review_date: at,
            last_quality: Some(4),
            version: 3,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_to_core_state() {
        let card = db_card();
        let state = card.to_core_state();
        assert_eq!(state.interval_days, 6.0);
        assert_eq!(state.repetition_count, 2);
        assert_eq!(state.ease_factor, 2.36);
        assert_eq!(state.consecutive_attempts, 1);
        assert_eq!(state.review_date, card.review_date);
    }

    #[test]
    fn test_to_core_state_clamps_corrupt_rows() {
        let card = DbCard {
            repetition_count: -1,
            consecutive_attempts: 0,
            ..db_card()
        };
        let state = card.to_core_state();
        assert_eq!(state.repetition_count, 0);
        assert_eq!(state.consecutive_attempts, 1);
    }

    #[test]
    fn test_card_review_hides_answer() {
        let json = serde_json::to_value(db_card().to_card_review()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "original_text": "house" }));
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(verdict_message(VerdictKind::Correct, "casa", "casa"), "Correct!");
        assert!(verdict_message(VerdictKind::Typo, "casa", "caza").contains("typo"));
        assert_eq!(
            verdict_message(VerdictKind::Incorrect, "casa", "perro"),
            "Incorrect. The answer is \"casa\"."
        );
    }

    #[test]
    fn test_check_answer_response_shape() {
        let verdict = Verdict {
            passed: true,
            distance: 1,
            quality: Quality::new(4).unwrap(),
            kind: VerdictKind::Typo,
        };
        let due = Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap();
        let response = CheckAnswerResponse::new(&verdict, "casa", "caza", due);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["passed"], true);
        assert_eq!(json["distance"], 1);
        assert_eq!(json["quality"], 4);
        assert_eq!(json["result"], "typo");
        assert_eq!(json["review_date"], "2024-02-02T10:00:00Z");
        assert!(json.get("next_state").is_none());
    }

    #[test]
    fn test_review_query_defaults_to_pending() {
        let query: ReviewQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.mode, ReviewMode::Pending);
    }
}
