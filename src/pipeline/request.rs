//! Wire payload for the stdin/stdout protocol.

use serde::{Deserialize, Serialize};

/// A scoring request: the submission's text plus candidate texts.
///
/// Both keys are required; a missing key fails deserialization. The
/// response is a bare JSON array of numbers, one per entry of `others`,
/// in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Plain text of the document under test.
    pub submission: String,
    /// Plain text of each candidate document, in reporting order.
    pub others: Vec<String>,
}
