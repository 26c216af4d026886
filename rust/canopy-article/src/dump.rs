//! The stored token dump of an article: paragraphs of sentences of descriptors.
//!
//! The dump is stored as one compact JSON string and only parsed again when
//! something asks for its contents.

use std::cell::OnceCell;

use canopy_forest::{Descriptor, TokenKind, TokenValue};
use serde::{Deserialize, Serialize};

use crate::error::ArticleError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDump {
    paragraphs: Vec<Vec<Vec<Descriptor>>>,
}

impl TokenDump {
    pub fn new(paragraphs: Vec<Vec<Vec<Descriptor>>>) -> Self {
        Self { paragraphs }
    }

    pub fn paragraphs(&self) -> &[Vec<Vec<Descriptor>>] {
        &self.paragraphs
    }

    /// Compact JSON without whitespace; non-ASCII text is kept as is.
    pub fn to_json(&self) -> Result<String, ArticleError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ArticleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.paragraphs.iter().flatten().flatten()
    }

    /// Nominative names of all person tokens, in order of mention.
    pub fn person_names(&self) -> impl Iterator<Item = &str> {
        self.descriptors().filter_map(|descriptor| match (&descriptor.kind, &descriptor.value) {
            (Some(TokenKind::Person), Some(TokenValue::Text(name))) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.descriptors()
            .filter(|descriptor| descriptor.kind == Some(TokenKind::Entity))
            .map(|descriptor| descriptor.text.as_str())
    }
}

/// A token dump in its stored JSON form, parsed on first access.
#[derive(Debug, Clone)]
pub struct StoredTokens {
    json: String,
    parsed: OnceCell<TokenDump>,
}

impl StoredTokens {
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            parsed: OnceCell::new(),
        }
    }

    pub fn store(dump: TokenDump) -> Result<Self, ArticleError> {
        let json = dump.to_json()?;
        Ok(Self {
            json,
            parsed: OnceCell::from(dump),
        })
    }

    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn dump(&self) -> Result<&TokenDump, ArticleError> {
        if let Some(dump) = self.parsed.get() {
            return Ok(dump);
        }
        let dump = TokenDump::from_json(&self.json)?;
        Ok(self.parsed.get_or_init(|| dump))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    const STORED: &str = r#"[[[{"x":"Jón Jónsson","k":14,"t":"person_nf_kk","v":"Jón Jónsson"},{"x":"fór","t":"so_0_et_p3","m":["fara","so","alm","GM-FH-ÞT-3P-ET"]},{"x":".","k":1}]],[[{"x":"Alþingi","k":16,"t":"sérnafn_nf"},{"x":"og","err":1}]]]"#;

    #[test]
    fn test_round_trip_is_compact() -> TestResult {
        let dump = TokenDump::from_json(STORED)?;
        assert_eq!(dump.paragraphs().len(), 2);
        assert_eq!(dump.descriptors().count(), 5);
        assert_eq!(dump.to_json()?, STORED);
        Ok(())
    }

    #[test]
    fn test_numbers_round_trip_unchanged() -> TestResult {
        let stored = r#"[[[{"x":"Árið","t":"no_et_nf_hk","m":["ár","hk","alm","NFETgr"]},{"x":"2016","k":4,"t":"ártal","v":2016},{"x":"3,5","k":5,"t":"tala","v":3.5},{"x":".","k":1}]]]"#;
        let dump = TokenDump::from_json(stored)?;
        assert_eq!(dump.to_json()?, stored);
        Ok(())
    }

    #[test]
    fn test_names_are_read_lazily() -> TestResult {
        let stored = StoredTokens::new(STORED);
        let dump = stored.dump()?;
        assert_eq!(dump.person_names().collect::<Vec<_>>(), ["Jón Jónsson"]);
        assert_eq!(dump.entity_names().collect::<Vec<_>>(), ["Alþingi"]);
        assert!(std::ptr::eq(dump, stored.dump()?));
        Ok(())
    }

    #[test]
    fn test_malformed_dump() {
        let stored = StoredTokens::new("[[[{\"k\":1}]]]");
        assert!(matches!(stored.dump(), Err(ArticleError::Json(_))));
    }
}
