//! Errors raised when the grammar engine or tokenizer breaks its contract.

use thiserror::Error;

/// A structural invariant violation. None of these are recoverable: they mean
/// the derivation tree or the token stream handed over is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("token {index} is matched by more than one leaf")]
    DuplicateToken { index: usize },

    #[error("leaf refers to token {index}, but the sentence has {len} tokens")]
    TokenOutOfRange { index: usize, len: usize },

    #[error("no candidate name left for person token '{text}'")]
    NoPersonCandidate { text: String },

    #[error("simplification produced no root node")]
    MissingRoot,

    #[error("simplification produced {count} root nodes")]
    MultipleRoots { count: usize },

    #[error("unbalanced traversal: {0}")]
    Unbalanced(String),
}
