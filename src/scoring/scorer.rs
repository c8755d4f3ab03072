use tracing::{debug, warn};

use super::error::ScoringError;

/// Scores candidate embeddings against a target embedding.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Computes one cosine score per candidate, in candidate order.
    ///
    /// Candidates must share the target's dimensionality; a zero-norm
    /// target or candidate scores `0.0` for that pair.
    pub fn score(
        &self,
        target: &[f32],
        candidates: &[Vec<f32>],
    ) -> Result<Vec<f32>, ScoringError> {
        debug!(
            dim = target.len(),
            num_candidates = candidates.len(),
            "Scoring candidates against target"
        );

        if l2_norm(target) == 0.0 && !candidates.is_empty() {
            warn!("target embedding has zero norm, all scores default to 0.0");
        }

        let mut scores = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            if candidate.len() != target.len() {
                return Err(ScoringError::DimensionMismatch {
                    index,
                    expected: target.len(),
                    actual: candidate.len(),
                });
            }

            if l2_norm(candidate) == 0.0 {
                warn!(index, "candidate embedding has zero norm, scoring 0.0");
            }

            scores.push(cosine_similarity(target, candidate));
        }

        Ok(scores)
    }
}

/// Cosine similarity between two vectors.
///
/// Returns `0.0` when either vector has zero norm, or on a length
/// mismatch / empty input, rather than producing NaN.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[inline]
fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
