//! Spaced repetition scheduling.

pub mod sm2;

use crate::types::{CardState, Quality};
use chrono::{DateTime, Utc};

/// Trait for spaced repetition algorithms.
pub trait SchedulingAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next scheduling state after a graded review.
    ///
    /// Must be total for every quality and must not touch
    /// `consecutive_attempts`, which belongs to the review session.
    fn schedule(&self, state: &CardState, quality: Quality, now: DateTime<Utc>) -> CardState;

    /// Initial state for a new card due at `now`.
    fn initial_state(&self, now: DateTime<Utc>) -> CardState;
}
