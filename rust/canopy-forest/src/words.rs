//! Word stems collected for frequency indexing.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(stem, category)` pair, e.g. `("hestur", "kk")` or `("Jón Jónsson", "person_kk")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordTuple {
    pub stem: String,
    pub category: String,
}

impl WordTuple {
    pub fn new(stem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for WordTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.stem, self.category)
    }
}

/// Occurrence counts of word tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<WordTuple, u32>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: WordTuple) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get(&self, word: &WordTuple) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct tuples.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WordTuple, u32)> {
        self.counts.iter().map(|(word, count)| (word, *count))
    }

    /// Add all counts of `other` to these.
    pub fn merge(&mut self, other: WordCounts) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }
}

impl Extend<WordTuple> for WordCounts {
    fn extend<T: IntoIterator<Item = WordTuple>>(&mut self, iter: T) {
        for word in iter {
            self.add(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_merge() {
        let mut counts = WordCounts::new();
        counts.extend([
            WordTuple::new("hestur", "kk"),
            WordTuple::new("hestur", "kk"),
            WordTuple::new("fara", "so"),
        ]);
        let mut more = WordCounts::new();
        more.add(WordTuple::new("fara", "so"));
        counts.merge(more);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(&WordTuple::new("hestur", "kk")), 2);
        assert_eq!(counts.get(&WordTuple::new("fara", "so")), 2);
        assert_eq!(counts.get(&WordTuple::new("fara", "kk")), 0);
    }
}
