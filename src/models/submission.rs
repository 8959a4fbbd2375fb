//! Record of a single quiz attempt.

use super::{Explanation, NetworkSpec, ValidationError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One answer submitted to a quiz session. Never modified after it is recorded.
#[derive(Serialize, Debug, Clone)]
pub struct Submission {
    /// 1-based attempt number within the session.
    pub attempt: u32,
    /// Text exactly as the user typed it.
    pub raw: String,
    /// Canonical dotted decimal form, `None` when the input did not validate.
    pub normalized: Option<String>,
    /// Question in effect when the answer was given.
    pub network: NetworkSpec,
    pub is_correct: bool,
    /// Session score after this attempt.
    pub score: u32,
    /// Success text, validation error text or the mismatch narrative.
    pub message: String,
    pub error: Option<ValidationError>,
    pub explanation: Option<Explanation>,
    pub submitted_at: DateTime<Utc>,
}
