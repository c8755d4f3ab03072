use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::extract::ExtractionError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    /// The encoder broke the one-vector-per-input invariant.
    #[error("encoder returned {actual} vectors for {expected} inputs")]
    EncodingMismatch { expected: usize, actual: usize },
}
