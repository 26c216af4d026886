//! Parse statistics over an article.
//!
//! Ambiguity is the per-token geometric mean of the derivation counts,
//! weighted by sentence length:
//!
//! ```text
//! ambiguity = Σ combinations^(1/len) · len / Σ len      (parsed sentences only)
//! ```
//!
//! A sentence counts as parsed only when it has at least one derivation.
//!
//! An article without parsed tokens has ambiguity 1.0.

use serde::{Deserialize, Serialize};

use crate::sentence::Sentence;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    pub num_tokens: usize,
    pub num_sentences: usize,
    pub num_parsed: usize,
    pub ambiguity: f64,
}

impl Default for ParseStats {
    fn default() -> Self {
        StatsCollector::default().finish()
    }
}

/// Accumulates [`ParseStats`] one sentence at a time.
#[derive(Debug, Clone, Default)]
pub struct StatsCollector {
    num_tokens: usize,
    num_sentences: usize,
    num_parsed: usize,
    parsed_tokens: usize,
    weighted_ambiguity: f64,
}

impl StatsCollector {
    pub fn add(&mut self, sentence: &Sentence) {
        let len = sentence.len();
        self.num_sentences += 1;
        self.num_tokens += len;
        if sentence.is_parsed() && sentence.combinations() > 0 {
            self.num_parsed += 1;
            if len > 0 {
                let factor = (sentence.combinations() as f64).powf(1.0 / len as f64);
                self.weighted_ambiguity += factor * len as f64;
                self.parsed_tokens += len;
            }
        }
    }

    pub fn finish(&self) -> ParseStats {
        let ambiguity = if self.parsed_tokens > 0 {
            self.weighted_ambiguity / self.parsed_tokens as f64
        } else {
            1.0
        };
        ParseStats {
            num_tokens: self.num_tokens,
            num_sentences: self.num_sentences,
            num_parsed: self.num_parsed,
            ambiguity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Outcome;
    use canopy_forest::{DerivationNode, Token};

    fn parsed(len: usize, combinations: u64) -> Sentence {
        Sentence {
            tokens: (0..len).map(|i| Token::word(format!("w{i}"))).collect(),
            outcome: Outcome::Parsed {
                tree: DerivationNode::leaf(0, "x"),
                combinations,
            },
        }
    }

    #[test]
    fn test_no_parsed_tokens() {
        let mut collector = StatsCollector::default();
        collector.add(&Sentence::failed(vec![Token::word("a"), Token::word("b")], None));
        let stats = collector.finish();
        assert_eq!(stats.num_tokens, 2);
        assert_eq!(stats.num_sentences, 1);
        assert_eq!(stats.num_parsed, 0);
        assert_eq!(stats.ambiguity, 1.0);
        assert_eq!(ParseStats::default().ambiguity, 1.0);
    }

    #[test]
    fn test_weighted_ambiguity() {
        let mut collector = StatsCollector::default();
        // 4 tokens, 16 combinations: factor 2
        collector.add(&parsed(4, 16));
        // 2 tokens, 1 combination: factor 1
        collector.add(&parsed(2, 1));
        collector.add(&Sentence::failed(vec![Token::word("x")], None));

        let stats = collector.finish();
        assert_eq!(stats.num_tokens, 7);
        assert_eq!(stats.num_sentences, 3);
        assert_eq!(stats.num_parsed, 2);
        assert!((stats.ambiguity - 10.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_tree_without_derivations_is_not_parsed() {
        let mut collector = StatsCollector::default();
        collector.add(&parsed(2, 4));
        collector.add(&parsed(2, 0));

        let stats = collector.finish();
        assert_eq!(stats.num_tokens, 4);
        assert_eq!(stats.num_sentences, 2);
        assert_eq!(stats.num_parsed, 1);
        assert!((stats.ambiguity - 2.0).abs() < 1e-9);
    }
}
