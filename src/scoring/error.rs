use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid candidate dimension at index {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
