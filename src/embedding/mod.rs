//! Embedding + model utilities.
//!
//! - [`minilm`] provides sentence-embedding generation.
//! - [`device`] selects the compute device (CPU / Metal / CUDA).

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// MiniLM sentence embedder.
pub mod minilm;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;

pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
