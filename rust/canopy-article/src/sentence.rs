//! Sentences as they come back from the grammar engine, grouped into paragraphs.

use canopy_forest::{DerivationNode, Token};
use serde::{Deserialize, Serialize};

use crate::error::ArticleError;

/// What the grammar engine made of a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Parsed {
        tree: DerivationNode,
        /// Number of derivations seen before reduction to a single tree.
        #[serde(default = "single")]
        combinations: u64,
    },
    Failed {
        /// Where analysis broke down; the last token when unknown.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error_index: Option<usize>,
    },
}

fn single() -> u64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub outcome: Outcome,
}

impl Sentence {
    pub fn parsed(tokens: Vec<Token>, tree: DerivationNode) -> Self {
        Self {
            tokens,
            outcome: Outcome::Parsed {
                tree,
                combinations: 1,
            },
        }
    }

    pub fn failed(tokens: Vec<Token>, error_index: Option<usize>) -> Self {
        Self {
            tokens,
            outcome: Outcome::Failed { error_index },
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self.outcome, Outcome::Parsed { .. })
    }

    pub fn tree(&self) -> Option<&DerivationNode> {
        match &self.outcome {
            Outcome::Parsed { tree, .. } => Some(tree),
            Outcome::Failed { .. } => None,
        }
    }

    /// The token to flag for a failed sentence, `None` for parsed ones.
    pub fn error_index(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Parsed { .. } => None,
            Outcome::Failed { error_index } => error_index.or_else(|| self.len().checked_sub(1)),
        }
    }

    /// Derivation count of a parsed sentence, 0 for failures.
    pub fn combinations(&self) -> u64 {
        match self.outcome {
            Outcome::Parsed { combinations, .. } => combinations,
            Outcome::Failed { .. } => 0,
        }
    }
}

/// An article: paragraphs of sentences, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub paragraphs: Vec<Vec<Sentence>>,
}

impl Document {
    pub fn new(paragraphs: Vec<Vec<Sentence>>) -> Self {
        Self { paragraphs }
    }

    pub fn from_json(json: &str) -> Result<Self, ArticleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs.iter().flatten()
    }
}
