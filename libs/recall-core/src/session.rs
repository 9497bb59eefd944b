//! Review session: grades an answer and produces the next card state.
//!
//! The pipeline is always grade, classify, schedule. The session also owns
//! the attempt counter: a pass resets it to 1, a failure bumps it up to the
//! configured cap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithm::{sm2::Sm2, SchedulingAlgorithm};
use crate::config::{SchedulerConfig, DEFAULT_MAX_ATTEMPTS};
use crate::error::{Result, ReviewError, ValidationError};
use crate::matching::{grade, normalize};
use crate::quality::classify;
use crate::types::{CardState, Quality};

/// How an answer should be reported to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Correct,
    Typo,
    Incorrect,
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub distance: usize,
    pub quality: Quality,
    pub kind: VerdictKind,
}

/// New card state together with the verdict that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub state: CardState,
    pub verdict: Verdict,
}

/// Entry point of the review engine.
#[derive(Debug, Clone)]
pub struct ReviewSession<A = Sm2> {
    algorithm: A,
    max_attempts: u8,
}

impl Default for ReviewSession<Sm2> {
    fn default() -> Self {
        Self::new(Sm2::default(), DEFAULT_MAX_ATTEMPTS)
    }
}

impl ReviewSession<Sm2> {
    /// Build an SM-2 session from validated configuration.
    pub fn from_config(config: SchedulerConfig) -> std::result::Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self::new(config.sm2, config.max_attempts))
    }
}

impl<A: SchedulingAlgorithm> ReviewSession<A> {
    pub fn new(algorithm: A, max_attempts: u8) -> Self {
        Self {
            algorithm,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// State for a card that first becomes due at `now`.
    pub fn initial_state(&self, now: DateTime<Utc>) -> CardState {
        self.algorithm.initial_state(now)
    }

    /// Grade `submitted` against `expected` and schedule the card.
    ///
    /// `state` is never modified. On error the caller's state stays
    /// authoritative.
    pub fn review(
        &self,
        expected: &str,
        submitted: &str,
        state: &CardState,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        if normalize(expected).trim().is_empty() {
            return Err(ReviewError::InvalidInput("expected text is empty".into()));
        }

        let distance = grade(expected, submitted);
        let classification = classify(distance);
        let mut next = self.algorithm.schedule(state, classification.quality, now);

        next.consecutive_attempts = if classification.passed {
            1
        } else {
            state
                .consecutive_attempts
                .saturating_add(1)
                .min(self.max_attempts)
        };

        let kind = match distance {
            0 => VerdictKind::Correct,
            _ if classification.passed => VerdictKind::Typo,
            _ => VerdictKind::Incorrect,
        };

        Ok(ReviewOutcome {
            state: next,
            verdict: Verdict {
                passed: classification.passed,
                distance,
                quality: classification.quality,
                kind,
            },
        })
    }

    /// Same as [`review`](Self::review) for raw bytes of unknown encoding.
    pub fn review_utf8(
        &self,
        expected: &[u8],
        submitted: &[u8],
        state: &CardState,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        let expected = std::str::from_utf8(expected)
            .map_err(|e| ReviewError::InvalidInput(format!("expected text is not valid UTF-8: {}", e)))?;
        let submitted = std::str::from_utf8(submitted)
            .map_err(|e| ReviewError::InvalidInput(format!("submitted text is not valid UTF-8: {}", e)))?;
        self.review(expected, submitted, state, now)
    }
}
