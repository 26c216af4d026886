//! Sentence-by-sentence processing of a parsed article.
//!
//! [`process`] runs a transform over every sentence, keeping the paragraph
//! structure, and collects parse statistics on the way. [`tag`] and [`parse`]
//! are the two standard transforms; [`Article::analyze`] builds the stored
//! form of an article in one pass.

use canopy_forest::{
    Descriptor, ForestError, MeaningResolver, SimplifiedNode, WordCounts, dump_tokens, simplify,
};
use serde::Serialize;

use crate::dump::TokenDump;
use crate::error::ArticleError;
use crate::register::{NameRegister, TitleLookup};
use crate::sentence::{Document, Outcome, Sentence};
use crate::stats::{ParseStats, StatsCollector};

/// Run `transform` over every sentence of `document`.
pub fn process<R, T, F>(
    document: &Document,
    resolver: &R,
    mut transform: F,
) -> Result<(Vec<Vec<T>>, ParseStats), ArticleError>
where
    R: MeaningResolver + ?Sized,
    F: FnMut(&Sentence, &R) -> Result<T, ForestError>,
{
    let mut stats = StatsCollector::default();
    let mut paragraphs = Vec::with_capacity(document.paragraphs.len());
    for (paragraph_index, paragraph) in document.paragraphs.iter().enumerate() {
        let mut sentences = Vec::with_capacity(paragraph.len());
        for (sentence_index, sentence) in paragraph.iter().enumerate() {
            tracing::debug!(
                paragraph = paragraph_index,
                sentence = sentence_index,
                tokens = sentence.len(),
                parsed = sentence.is_parsed(),
                "processing sentence"
            );
            stats.add(sentence);
            sentences.push(transform(sentence, resolver)?);
        }
        paragraphs.push(sentences);
    }
    Ok((paragraphs, stats.finish()))
}

/// The descriptors of a sentence, with the error flag on failures.
pub fn tag<R>(sentence: &Sentence, resolver: &R) -> Result<Vec<Descriptor>, ForestError>
where
    R: MeaningResolver + ?Sized,
{
    dump_tokens(
        &sentence.tokens,
        sentence.tree(),
        resolver,
        sentence.error_index(),
        None,
    )
}

/// A simplified tree for a parsed sentence, flagged descriptors otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedSentence {
    Tree(SimplifiedNode),
    Failed(Vec<Descriptor>),
}

pub fn parse<R>(sentence: &Sentence, resolver: &R) -> Result<ParsedSentence, ForestError>
where
    R: MeaningResolver + ?Sized,
{
    match sentence.tree() {
        Some(tree) => simplify(&sentence.tokens, Some(tree), resolver)?
            .map(ParsedSentence::Tree)
            .ok_or(ForestError::MissingRoot),
        None => tag(sentence, resolver).map(ParsedSentence::Failed),
    }
}

/// An analyzed article, in the form it is stored in.
#[derive(Debug, Clone)]
pub struct Article {
    pub tokens: TokenDump,
    /// Word stems of successfully parsed sentences.
    pub words: WordCounts,
    /// `S{n}` and the tree dump (or `E{index}` on failure) per sentence, numbered from 1.
    pub trees: String,
    pub stats: ParseStats,
}

impl Article {
    pub fn analyze<R>(document: &Document, resolver: &R) -> Result<Self, ArticleError>
    where
        R: MeaningResolver + ?Sized,
    {
        let mut words = WordCounts::new();
        let mut trees = String::new();
        let mut number = 0usize;

        let (paragraphs, stats) = process(document, resolver, |sentence, resolver| {
            number += 1;
            match &sentence.outcome {
                Outcome::Parsed { tree, .. } => {
                    trees.push_str(&format!("S{number}\n{}\n", tree.to_string().trim_end()));
                    dump_tokens(&sentence.tokens, Some(tree), resolver, None, Some(&mut words))
                }
                Outcome::Failed { .. } => {
                    let error_index = sentence.error_index();
                    let failed_at = error_index.map(|index| index.to_string()).unwrap_or_default();
                    trees.push_str(&format!("S{number}\nE{failed_at}\n"));
                    dump_tokens(&sentence.tokens, None, resolver, error_index, None)
                }
            }
        })?;

        tracing::info!(
            sentences = stats.num_sentences,
            parsed = stats.num_parsed,
            ambiguity = stats.ambiguity,
            "analyzed article"
        );
        Ok(Self {
            tokens: TokenDump::new(paragraphs),
            words,
            trees,
            stats,
        })
    }

    /// The people and entities mentioned in the article.
    pub fn register<L>(&self, lookup: &L, all_names: bool) -> NameRegister
    where
        L: TitleLookup + ?Sized,
    {
        NameRegister::build(
            self.tokens.person_names(),
            self.tokens.entity_names(),
            lookup,
            all_names,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_forest::{DerivationNode, Lexicon, Meaning, Token, WordTuple};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn document() -> Document {
        let parsed = Sentence::parsed(
            vec![Token::word("Hestur"), Token::word("hleypur"), Token::punctuation(".")],
            DerivationNode::internal(
                "S0",
                vec![
                    DerivationNode::internal(
                        "Setning",
                        vec![
                            DerivationNode::internal("Nl", vec![DerivationNode::leaf(0, "no_et_nf_kk")]),
                            DerivationNode::leaf(1, "so_0_et_p3"),
                        ],
                    ),
                    DerivationNode::leaf(2, "grm"),
                ],
            ),
        );
        let failed = Sentence::failed(vec![Token::word("og"), Token::word("svo")], None);
        Document::new(vec![vec![parsed], vec![failed]])
    }

    fn lexicon() -> Lexicon {
        Lexicon::new()
            .with("hestur", Meaning::new("hestur", "kk", "alm", "NFET"))
            .with("hleypur", Meaning::new("hlaupa", "so", "alm", "GM-FH-NT-3P-ET"))
    }

    #[test]
    fn test_tag_keeps_paragraph_structure() -> TestResult {
        let (paragraphs, stats) = process(&document(), &lexicon(), tag)?;
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0][0].len(), 3);
        assert!(paragraphs[1][0][1].error);
        assert_eq!(stats.num_sentences, 2);
        assert_eq!(stats.num_parsed, 1);
        assert_eq!(stats.num_tokens, 5);
        Ok(())
    }

    #[test]
    fn test_parse_yields_tree_or_flagged_dump() -> TestResult {
        let (paragraphs, _) = process(&document(), &lexicon(), parse)?;
        assert!(matches!(paragraphs[0][0], ParsedSentence::Tree(_)));
        let ParsedSentence::Failed(dump) = &paragraphs[1][0] else {
            panic!("expected a flagged dump for the failed sentence");
        };
        assert_eq!(dump.iter().filter(|descriptor| descriptor.error).count(), 1);
        Ok(())
    }

    #[test_log::test]
    fn test_analyze() -> TestResult {
        let article = Article::analyze(&document(), &lexicon())?;
        assert_eq!(
            article.trees,
            "S1\nS0\n  Setning\n    Nl\n      no_et_nf_kk @0\n    so_0_et_p3 @1\n  grm @2\nS2\nE1\n"
        );
        assert_eq!(article.words.get(&WordTuple::new("hestur", "kk")), 1);
        assert_eq!(article.words.get(&WordTuple::new("hlaupa", "so")), 1);
        assert_eq!(article.words.len(), 2);
        assert_eq!(
            article.tokens.to_json()?,
            concat!(
                r#"[[[{"x":"Hestur","t":"no_et_nf_kk","m":["hestur","kk","alm","NFET"]},"#,
                r#"{"x":"hleypur","t":"so_0_et_p3","m":["hlaupa","so","alm","GM-FH-NT-3P-ET"]},"#,
                r#"{"x":".","k":1}]],[[{"x":"og"},{"x":"svo","err":1}]]]"#
            )
        );
        Ok(())
    }
}
