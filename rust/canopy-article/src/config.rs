//! Article processing configuration, read from JSON.
//!
//! Every field has a default, so `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "index": {
//!     "categories": ["kk", "kvk", "hk", "person_kk", "person_kvk", "entity", "lo", "so"],
//!     "excluded": [{ "stem": "vera", "category": "so" }]
//!   },
//!   "register": { "all_names": false }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArticleError;
use crate::words::IndexPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub index: IndexPolicy,
    pub register: RegisterConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Register names even when no title is known.
    pub all_names: bool,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ArticleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArticleError> {
        let path = path.as_ref();
        let failed = |reason: String| ArticleError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let json = std::fs::read_to_string(path).map_err(|error| failed(error.to_string()))?;
        let config = serde_json::from_str(&json).map_err(|error| failed(error.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
