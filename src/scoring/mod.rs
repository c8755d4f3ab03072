//! Cosine-similarity scoring of candidate embeddings against a target.
//!
//! Given the submission's embedding and the candidates' embeddings,
//! [`SimilarityScorer`] produces one raw cosine score per candidate, in
//! candidate order. Scores are not clamped; downstream consumers interpret
//! the raw [-1, 1] value.
//!
//! # Degenerate vectors
//!
//! Cosine similarity is undefined for a zero-norm vector. The policy here
//! is score substitution: any pair involving a zero-norm vector scores
//! `0.0` (with a warning) instead of propagating a division-by-zero NaN.

pub mod error;
pub mod scorer;


pub use error::ScoringError;
pub use scorer::{SimilarityScorer, cosine_similarity};
