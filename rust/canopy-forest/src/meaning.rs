//! Morphological meanings and the resolver seam to the lexicon.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::terminal::Terminal;
use crate::token::Token;

/// A lexicon entry for a token/terminal pairing.
///
/// Serialized as a `[lemma, word_class, subclass, inflection]` tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String, String, String)", into = "(String, String, String, String)")]
pub struct Meaning {
    pub lemma: String,
    pub word_class: String,
    pub subclass: String,
    pub inflection: String,
}

impl Meaning {
    pub fn new(
        lemma: impl Into<String>,
        word_class: impl Into<String>,
        subclass: impl Into<String>,
        inflection: impl Into<String>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            word_class: word_class.into(),
            subclass: subclass.into(),
            inflection: inflection.into(),
        }
    }
}

impl From<(String, String, String, String)> for Meaning {
    fn from((lemma, word_class, subclass, inflection): (String, String, String, String)) -> Self {
        Self {
            lemma,
            word_class,
            subclass,
            inflection,
        }
    }
}

impl From<Meaning> for (String, String, String, String) {
    fn from(meaning: Meaning) -> Self {
        (
            meaning.lemma,
            meaning.word_class,
            meaning.subclass,
            meaning.inflection,
        )
    }
}

/// What a [`MeaningResolver`] found for a token/terminal pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A distinguishing meaning.
    Meaning(Meaning),
    /// The token matched, but there is no distinguishing meaning to record.
    Matched(bool),
    /// Nothing found.
    None,
}

impl Resolution {
    /// Normalize to an optional meaning; a bare match carries none.
    pub fn into_meaning(self) -> Option<Meaning> {
        match self {
            Resolution::Meaning(meaning) => Some(meaning),
            Resolution::Matched(_) | Resolution::None => None,
        }
    }
}

impl From<Option<Meaning>> for Resolution {
    fn from(meaning: Option<Meaning>) -> Self {
        meaning.map_or(Resolution::None, Resolution::Meaning)
    }
}

/// Supplies the meaning of a token matched against a terminal.
pub trait MeaningResolver {
    fn resolve(&self, token: &Token, terminal: &Terminal) -> Resolution;
}

impl<F> MeaningResolver for F
where
    F: Fn(&Token, &Terminal) -> Resolution,
{
    fn resolve(&self, token: &Token, terminal: &Terminal) -> Resolution {
        self(token, terminal)
    }
}

/// An in-memory lexicon keyed by lower-cased word form.
///
/// A form resolves to its first meaning whose word class fits the terminal
/// category; noun genders (`kk`, `kvk`, `hk`) fit the `no` category. A known
/// form without a fitting meaning resolves to a bare match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    forms: HashMap<String, Vec<Meaning>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, form: &str, meaning: Meaning) {
        self.forms.entry(form.to_lowercase()).or_default().push(meaning);
    }

    pub fn with(mut self, form: &str, meaning: Meaning) -> Self {
        self.insert(form, meaning);
        self
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

fn fits(word_class: &str, category: &str) -> bool {
    word_class == category || (category == "no" && matches!(word_class, "kk" | "kvk" | "hk"))
}

impl MeaningResolver for Lexicon {
    fn resolve(&self, token: &Token, terminal: &Terminal) -> Resolution {
        let Some(meanings) = self.forms.get(&token.text.to_lowercase()) else {
            return Resolution::None;
        };
        meanings
            .iter()
            .find(|meaning| fits(&meaning.word_class, terminal.category()))
            .cloned()
            .map_or(Resolution::Matched(true), Resolution::Meaning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lexicon() -> Lexicon {
        Lexicon::new()
            .with("hestur", Meaning::new("hestur", "kk", "alm", "NFET"))
            .with("fór", Meaning::new("fara", "so", "alm", "GM-FH-ÞT-1P-ET"))
            .with("til", Meaning::new("til", "fs", "alm", "-"))
    }

    #[test]
    fn test_resolves_fitting_word_class() {
        let resolution = lexicon().resolve(&Token::word("Hestur"), &Terminal::new("no_et_nf_kk"));
        assert_eq!(
            resolution,
            Resolution::Meaning(Meaning::new("hestur", "kk", "alm", "NFET"))
        );
    }

    #[test]
    fn test_known_form_without_fitting_class_is_a_bare_match() {
        let resolution = lexicon().resolve(&Token::word("fór"), &Terminal::new("no_et_nf_kk"));
        assert_eq!(resolution, Resolution::Matched(true));
        assert_eq!(resolution.into_meaning(), None);
    }

    #[test]
    fn test_unknown_form() {
        let resolution = lexicon().resolve(&Token::word("Spánar"), &Terminal::new("sérnafn_ef"));
        assert_eq!(resolution, Resolution::None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |_: &Token, _: &Terminal| Resolution::Matched(false);
        assert_eq!(
            resolver.resolve(&Token::word("x"), &Terminal::new("x")).into_meaning(),
            None
        );
    }

    #[test]
    fn test_meaning_serializes_as_tuple() {
        let meaning = Meaning::new("fara", "so", "alm", "GM-FH-ÞT-1P-ET");
        let json = serde_json::to_string(&meaning).unwrap();
        assert_eq!(json, r#"["fara","so","alm","GM-FH-ÞT-1P-ET"]"#);
        assert_eq!(serde_json::from_str::<Meaning>(&json).unwrap(), meaning);
    }
}
