//! Mapping from answer edit distance to SM-2 quality.

use serde::{Deserialize, Serialize};

use crate::types::Quality;

/// Largest edit distance still accepted as a correct answer.
pub const PASS_DISTANCE_THRESHOLD: usize = 1;

/// Pass/fail verdict and quality derived from an edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub passed: bool,
    pub quality: Quality,
}

/// Classify an edit distance.
///
/// Quality never increases as the distance grows. Passes always land on a
/// passing quality (3 or more), failures always below it.
pub fn classify(distance: usize) -> Classification {
    let passed = distance <= PASS_DISTANCE_THRESHOLD;
    let value = match distance {
        0 => 5,
        1 => 4,
        2 => 2,
        3 => 1,
        _ => 0,
    };

    Classification {
        passed,
        quality: Quality::new(value).unwrap_or(Quality::MIN),
    }
}
