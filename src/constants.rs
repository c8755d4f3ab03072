//! Cross-cutting, shared constants.
//!
//! The embedding dimension and sequence length are properties of the
//! all-MiniLM-L6-v2 model family; modules that need them should derive from
//! these rather than restating the numbers.

/// Embedding dimension produced by the MiniLM sentence-embedding model.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Maximum input length (in tokens) the model was trained with.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;
