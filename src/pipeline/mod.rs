//! Scoring pipeline (composition root).
//!
//! Orchestrates extract → encode → score: resolve every input to plain
//! text (submission first, candidates in order), encode the whole set in
//! ONE batched call, then score each candidate vector against the
//! submission's vector. Output position `i` corresponds to input
//! candidate `i`.
//!
//! The embedder is injected by the caller; the binary loads it once per
//! process and the tests substitute the stub backend.

pub mod error;
pub mod request;


pub use error::PipelineError;
pub use request::ScoreRequest;

use tracing::debug;

use crate::embedding::MiniLmEmbedder;
use crate::extract::DocumentSource;
use crate::scoring::SimilarityScorer;

/// End-to-end similarity scoring: documents in, ordered scores out.
#[derive(Debug)]
pub struct ScoringPipeline {
    embedder: MiniLmEmbedder,
    scorer: SimilarityScorer,
}

impl ScoringPipeline {
    pub fn new(embedder: MiniLmEmbedder) -> Self {
        Self {
            embedder,
            scorer: SimilarityScorer::new(),
        }
    }

    /// Returns the injected embedder.
    pub fn embedder(&self) -> &MiniLmEmbedder {
        &self.embedder
    }

    /// Runs a wire-format request (pre-extracted texts).
    pub fn run_request(&self, request: &ScoreRequest) -> Result<Vec<f32>, PipelineError> {
        let others: Vec<&str> = request.others.iter().map(String::as_str).collect();
        self.run_texts(&request.submission, &others)
    }

    /// Resolves document sources to text, then scores. Extraction failures
    /// abort the whole run; no partial results.
    pub fn run_documents(
        &self,
        submission: &DocumentSource,
        others: &[DocumentSource],
    ) -> Result<Vec<f32>, PipelineError> {
        let submission_text = submission.resolve()?;
        let other_texts = others
            .iter()
            .map(|source| source.resolve())
            .collect::<Result<Vec<_>, _>>()?;

        let other_refs: Vec<&str> = other_texts.iter().map(String::as_str).collect();
        self.run_texts(&submission_text, &other_refs)
    }

    /// Scores each of `others` against `submission`, in `others` order.
    ///
    /// An empty `others` yields an empty score list, never an error.
    pub fn run_texts(&self, submission: &str, others: &[&str]) -> Result<Vec<f32>, PipelineError> {
        // One batch, submission first: index 0 is always the target.
        let mut texts = Vec::with_capacity(others.len() + 1);
        texts.push(submission);
        texts.extend_from_slice(others);

        let vectors = self.embedder.embed_batch(&texts)?;
        if vectors.len() != texts.len() {
            return Err(PipelineError::EncodingMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }

        let target = &vectors[0];
        let candidates = &vectors[1..];
        let scores = self.scorer.score(target, candidates)?;

        debug!(
            num_candidates = others.len(),
            "Pipeline run complete"
        );

        Ok(scores)
    }
}
