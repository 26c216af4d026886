//! Error types for article processing.

use std::path::PathBuf;

use canopy_forest::ForestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error(transparent)]
    Forest(#[from] ForestError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot load configuration from '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}
