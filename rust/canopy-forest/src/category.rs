//! The reduced category set of simplified trees.
//!
//! Grammar nonterminals are many and fine grained; display consumers get a
//! handful of coarse phrase categories instead. Nonterminals without a
//! category are transparent: their children attach to the enclosing phrase.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "P")]
    Paragraph,
    #[serde(rename = "S")]
    Sentence,
    #[serde(rename = "S-COND")]
    Condition,
    #[serde(rename = "S-CONS")]
    Consequence,
    #[serde(rename = "VP")]
    VerbPhrase,
    #[serde(rename = "NP")]
    NounPhrase,
    #[serde(rename = "NP-POSS")]
    Possessive,
    #[serde(rename = "PP")]
    Prepositional,
    #[serde(rename = "ADVP")]
    Adverbial,
}

impl Category {
    /// Reduce a nonterminal (without variants, e.g. `Nl`) to its category.
    pub fn reduce(nonterminal: &str) -> Option<Self> {
        let category = match nonterminal {
            "S0" => Category::Paragraph,
            "HreinYfirsetning" | "Setning" | "SetningLo" | "SetningÁnF" | "SetningAukafall"
            | "SetningSkilyrði" => Category::Sentence,
            "SetningSo" | "SagnRuna" | "NhLiðir" | "SagnliðurÁnF" => Category::VerbPhrase,
            "Skilyrði" => Category::Condition,
            "Afleiðing" => Category::Consequence,
            "Nl" => Category::NounPhrase,
            "EfLiður" | "EfLiðurForskeyti" => Category::Possessive,
            "FsMeðFallstjórn" => Category::Prepositional,
            "SagnInnskot" | "FsAtv" | "AtvFs" => Category::Adverbial,
            _ => return None,
        };
        Some(category)
    }

    /// The internal tag, e.g. `NP-POSS`.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Paragraph => "P",
            Category::Sentence => "S",
            Category::Condition => "S-COND",
            Category::Consequence => "S-CONS",
            Category::VerbPhrase => "VP",
            Category::NounPhrase => "NP",
            Category::Possessive => "NP-POSS",
            Category::Prepositional => "PP",
            Category::Adverbial => "ADVP",
        }
    }

    /// The name shown to readers.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Paragraph => "Málsgrein",
            Category::Sentence => "Setning",
            Category::Condition => "Forsenda",
            Category::Consequence => "Afleiðing",
            Category::VerbPhrase => "Sagnliður",
            Category::NounPhrase => "Nafnliður",
            Category::Possessive => "Eignarfallsliður",
            Category::Prepositional => "Forsetningarliður",
            Category::Adverbial => "Atviksliður",
        }
    }

    /// A phrase of this category is not opened directly inside the returned one.
    pub fn subject_to(self) -> Option<Category> {
        match self {
            Category::Sentence => Some(Category::Sentence),
            Category::Adverbial => Some(Category::Adverbial),
            _ => None,
        }
    }

    /// The category this one structurally subsumes.
    pub fn overrides(self) -> Option<Category> {
        match self {
            Category::Condition | Category::Consequence => Some(Category::Sentence),
            Category::Possessive => Some(Category::NounPhrase),
            Category::Prepositional => Some(Category::Adverbial),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce() {
        assert_eq!(Category::reduce("S0"), Some(Category::Paragraph));
        assert_eq!(Category::reduce("SetningSo"), Some(Category::VerbPhrase));
        assert_eq!(Category::reduce("EfLiðurForskeyti"), Some(Category::Possessive));
        assert_eq!(Category::reduce("FsAtv"), Some(Category::Adverbial));
        assert_eq!(Category::reduce("Nl_et_nf_kk"), None);
        assert_eq!(Category::reduce("Fornafn"), None);
    }

    #[test]
    fn test_tag_matches_serialized_form() {
        for category in [
            Category::Paragraph,
            Category::Sentence,
            Category::Condition,
            Category::Consequence,
            Category::VerbPhrase,
            Category::NounPhrase,
            Category::Possessive,
            Category::Prepositional,
            Category::Adverbial,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.tag()));
        }
    }

    #[test]
    fn test_scoping_relations() {
        assert_eq!(Category::Sentence.subject_to(), Some(Category::Sentence));
        assert_eq!(Category::NounPhrase.subject_to(), None);
        assert_eq!(Category::Possessive.overrides(), Some(Category::NounPhrase));
        assert_eq!(Category::Prepositional.overrides(), Some(Category::Adverbial));
        assert_eq!(Category::Paragraph.overrides(), None);
    }
}
