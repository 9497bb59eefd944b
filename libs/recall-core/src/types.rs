//! Core types for the review engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default ease factor of a card that has never been reviewed.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Pedagogical recall quality on the SM-2 scale (0-5).
///
/// - 0: complete blackout
/// - 1-2: wrong answer, decreasingly far off
/// - 3: correct with serious difficulty
/// - 4: correct with a typo
/// - 5: perfect recall
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MAX: Quality = Quality(5);
    pub const MIN: Quality = Quality(0);

    /// Lowest quality that still counts as successful recall.
    pub const PASSING: Quality = Quality(3);

    /// Create from a numeric value, `None` when outside 0-5.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 5).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_passing(self) -> bool {
        self >= Self::PASSING
    }
}

impl TryFrom<u8> for Quality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("quality must be between 0 and 5, got {}", value))
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> Self {
        q.0
    }
}

/// Scheduling state of one card for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// Days until the next scheduled review, always whole.
    pub interval_days: f64,
    /// Successful reviews in a row since the last failure.
    pub repetition_count: u32,
    pub ease_factor: f64,
    /// Attempts in the current review cycle, 1 to the configured cap.
    pub consecutive_attempts: u8,
    /// Moment the card becomes eligible for review.
    pub review_date: DateTime<Utc>,
}

impl CardState {
    /// Initial state for a card that becomes due at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            interval_days: 0.0,
            repetition_count: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
            consecutive_attempts: 1,
            review_date: now,
        }
    }

    /// Whether the card is eligible for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.review_date <= now
    }
}
