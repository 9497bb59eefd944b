//! Review scheduling engine shared by the backend and its collaborators.
//!
//! Provides:
//! - Answer grading by normalized Levenshtein distance
//! - Mapping of edit distance to an SM-2 quality score
//! - SM-2 spaced repetition scheduling with configurable parameters
//! - A review session that ties the above together
//! - Card text validation used when cards are created or imported

pub mod algorithm;
pub mod config;
pub mod error;
pub mod matching;
pub mod quality;
pub mod session;
pub mod types;
pub mod validation;

pub use algorithm::{sm2::Sm2, SchedulingAlgorithm};
pub use config::SchedulerConfig;
pub use error::{Result, ReviewError, ValidationError};
pub use matching::{grade, grade_utf8, levenshtein_distance, normalize};
pub use quality::{classify, Classification, PASS_DISTANCE_THRESHOLD};
pub use session::{ReviewOutcome, ReviewSession, Verdict, VerdictKind};
pub use types::{CardState, Quality};
pub use validation::validate_card;
