//! SM-2 spaced repetition algorithm.
//!
//! Based on SuperMemo 2 with configurable parameters:
//!
//! ```text
//! EF' = max(minimum_ease, EF + (ease_bonus - (5 - q) * (linear_penalty + (5 - q) * quadratic_penalty)))
//! ```
//!
//! On a pass the interval becomes 1 day, then 6 days, then `interval * EF'`
//! rounded to whole days and capped at `maximum_interval`. On a failure the
//! repetition count resets and the interval and review date stay where they
//! were.

use super::SchedulingAlgorithm;
use crate::error::ValidationError;
use crate::types::{CardState, Quality, DEFAULT_EASE_FACTOR};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub ease_bonus: f64,
    pub linear_penalty: f64,
    pub quadratic_penalty: f64,
    pub first_interval: f64,
    pub second_interval: f64,
    pub maximum_interval: f64,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: DEFAULT_EASE_FACTOR,
            minimum_ease: 1.3,
            ease_bonus: 0.1,
            linear_penalty: 0.08,
            quadratic_penalty: 0.02,
            first_interval: 1.0,
            second_interval: 6.0,
            maximum_interval: 36500.0,
        }
    }
}

impl SchedulingAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self, now: DateTime<Utc>) -> CardState {
        CardState {
            ease_factor: self.initial_ease,
            ..CardState::new(now)
        }
    }

    fn schedule(&self, state: &CardState, quality: Quality, now: DateTime<Utc>) -> CardState {
        let ease_factor = self.next_ease(state.ease_factor, quality);

        if !quality.is_passing() {
            return CardState {
                repetition_count: 0,
                ease_factor,
                ..state.clone()
            };
        }

        let repetition_count = state.repetition_count.saturating_add(1);
        let interval_days = match repetition_count {
            1 => self.first_interval,
            2 => self.second_interval,
            _ => (state.interval_days * ease_factor).round(),
        }
        .max(1.0)
        .min(self.maximum_interval);

        CardState {
            interval_days,
            repetition_count,
            ease_factor,
            review_date: due_after(now, interval_days),
            ..state.clone()
        }
    }
}

/// `now` plus whole days, saturating at the latest representable instant.
fn due_after(now: DateTime<Utc>, interval_days: f64) -> DateTime<Utc> {
    Duration::try_days(interval_days as i64)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl Sm2 {
    /// Apply the SM-2 ease adjustment, floored at `minimum_ease`.
    pub fn next_ease(&self, ease_factor: f64, quality: Quality) -> f64 {
        let miss = f64::from(Quality::MAX.value() - quality.value());
        let delta = self.ease_bonus - miss * (self.linear_penalty + miss * self.quadratic_penalty);
        (ease_factor + delta).max(self.minimum_ease)
    }

    /// Reject parameter sets that would break the scheduling invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let finite = [
            self.initial_ease,
            self.minimum_ease,
            self.ease_bonus,
            self.linear_penalty,
            self.quadratic_penalty,
            self.first_interval,
            self.second_interval,
            self.maximum_interval,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !finite {
            return Err(ValidationError::InvalidConfig("parameters must be finite".into()));
        }
        if self.minimum_ease < 1.0 {
            return Err(ValidationError::InvalidConfig(format!(
                "minimum_ease must be at least 1.0, got {}",
                self.minimum_ease
            )));
        }
        if self.initial_ease < self.minimum_ease {
            return Err(ValidationError::InvalidConfig(format!(
                "initial_ease {} is below minimum_ease {}",
                self.initial_ease, self.minimum_ease
            )));
        }
        if self.first_interval < 1.0 || self.second_interval < self.first_interval {
            return Err(ValidationError::InvalidConfig(format!(
                "intervals must satisfy 1 <= first ({}) <= second ({})",
                self.first_interval, self.second_interval
            )));
        }
        if self.maximum_interval < self.second_interval {
            return Err(ValidationError::InvalidConfig(format!(
                "maximum_interval {} is below second_interval {}",
                self.maximum_interval, self.second_interval
            )));
        }
        Ok(())
    }
}
