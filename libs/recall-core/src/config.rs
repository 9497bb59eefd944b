//! Tunable scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::algorithm::sm2::Sm2;
use crate::error::ValidationError;

/// Default cap on attempts within one review cycle.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 5;

/// Parameters of the review engine.
///
/// Every field has a default, so a partial JSON document such as
/// `{"sm2": {"minimum_ease": 1.5}}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub sm2: Sm2,
    pub max_attempts: u8,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            sm2: Sm2::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_attempts == 0 {
            return Err(ValidationError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        self.sm2.validate()
    }
}
