//! Which counted word stems go into the search index.
//!
//! Closed word classes and non-distinctive constructs are not indexed; only
//! nouns (by gender), person names, entities, adjectives and verbs are.

use std::collections::BTreeSet;

use canopy_forest::{WordCounts, WordTuple};
use serde::{Deserialize, Serialize};

pub const INDEXED_CATEGORIES: [&str; 8] = [
    "kk",
    "kvk",
    "hk",
    "person_kk",
    "person_kvk",
    "entity",
    "lo",
    "so",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexPolicy {
    /// Categories worth indexing.
    pub categories: BTreeSet<String>,
    /// Individual `(stem, category)` pairs never indexed, such as `vera/so`.
    pub excluded: BTreeSet<WordTuple>,
}

impl Default for IndexPolicy {
    fn default() -> Self {
        Self {
            categories: INDEXED_CATEGORIES.iter().map(|c| (*c).to_owned()).collect(),
            excluded: BTreeSet::new(),
        }
    }
}

impl IndexPolicy {
    pub fn exclude(mut self, word: WordTuple) -> Self {
        self.excluded.insert(word);
        self
    }

    pub fn indexes(&self, word: &WordTuple) -> bool {
        self.categories.contains(&word.category) && !self.excluded.contains(word)
    }

    /// The indexable tuples of `counts`, most frequent first, ties by stem.
    pub fn indexable<'a>(&self, counts: &'a WordCounts) -> Vec<(&'a WordTuple, u32)> {
        let mut words: Vec<_> = counts.iter().filter(|(word, _)| self.indexes(word)).collect();
        words.sort_by(|(a, a_count), (b, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| a.stem.cmp(&b.stem))
                .then_with(|| a.category.cmp(&b.category))
        });
        words
    }
}
