//! Token annotation: which terminal (and meaning) each token matched.

use std::collections::BTreeMap;

use crate::derivation::{DerivationNode, Step};
use crate::error::ForestError;
use crate::meaning::{Meaning, MeaningResolver};
use crate::terminal::Terminal;
use crate::token::Token;

/// The terminal a token matched, and the meaning resolved for the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub terminal: &'a Terminal,
    pub meaning: Option<Meaning>,
}

/// Token position to match. Positions absent from the map were never reached.
pub type TerminalMap<'a> = BTreeMap<usize, Match<'a>>;

/// Map every token leaf of `tree` to its terminal and meaning.
///
/// An absent tree (failed parse) yields an empty map. A token reached twice
/// means the tree is not a single derivation and fails with
/// [`ForestError::DuplicateToken`].
pub fn annotate<'a, R>(
    tokens: &[Token],
    tree: Option<&'a DerivationNode>,
    resolver: &R,
) -> Result<TerminalMap<'a>, ForestError>
where
    R: MeaningResolver + ?Sized,
{
    let mut map = TerminalMap::new();
    let Some(tree) = tree else {
        return Ok(map);
    };

    for step in tree.walk() {
        let leaf = match step {
            Step::Leaf(leaf) => leaf,
            Step::Enter(_) | Step::Exit(_) => continue,
        };
        let token = tokens.get(leaf.token).ok_or(ForestError::TokenOutOfRange {
            index: leaf.token,
            len: tokens.len(),
        })?;
        if map.contains_key(&leaf.token) {
            return Err(ForestError::DuplicateToken { index: leaf.token });
        }
        let meaning = resolver.resolve(token, &leaf.terminal).into_meaning();
        map.insert(
            leaf.token,
            Match {
                terminal: &leaf.terminal,
                meaning,
            },
        );
    }

    tracing::debug!(matched = map.len(), tokens = tokens.len(), "annotated sentence");
    Ok(map)
}
