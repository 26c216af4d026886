//! Grammar terminals matched against tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grammar terminal, e.g. `fs_þgf` or `person_nf_kk`.
///
/// The name is made of underscore separated components: the first one is the
/// category, the rest are grammatical variants. A quoted literal terminal such
/// as `'að:nhm'_x` keeps its whole literal (which may itself contain
/// underscores) as the category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Terminal {
    name: String,
    category: String,
    variants: Vec<String>,
}

impl Terminal {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let (category, rest) = split_category(&name);
        let variants = rest
            .split('_')
            .filter(|variant| !variant.is_empty())
            .map(str::to_owned)
            .collect();
        Self {
            category: category.to_owned(),
            variants,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn num_variants(&self) -> usize {
        self.variants.len()
    }

    /// The variant at `index`; negative indices count from the end.
    pub fn variant(&self, index: isize) -> Option<&str> {
        let index = if index < 0 {
            self.variants.len().checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        self.variants.get(index).map(String::as_str)
    }

    /// Returns `true` if this is a quoted literal terminal.
    pub fn is_literal(&self) -> bool {
        self.name.starts_with(['\'', '"'])
    }
}

fn split_category(name: &str) -> (&str, &str) {
    if let Some(quote) = name.chars().next().filter(|c| *c == '\'' || *c == '"') {
        if let Some(end) = name.rfind(quote).filter(|end| *end > 0) {
            return name.split_at(end + quote.len_utf8());
        }
    }
    match name.split_once('_') {
        Some((category, rest)) => (category, rest),
        None => (name, ""),
    }
}

impl From<String> for Terminal {
    fn from(name: String) -> Self {
        Terminal::new(name)
    }
}

impl From<&str> for Terminal {
    fn from(name: &str) -> Self {
        Terminal::new(name)
    }
}

impl From<Terminal> for String {
    fn from(terminal: Terminal) -> Self {
        terminal.name
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_variants() {
        let terminal = Terminal::new("person_nf_kk");
        assert_eq!(terminal.category(), "person");
        assert_eq!(terminal.variants(), ["nf", "kk"]);
        assert_eq!(terminal.variant(0), Some("nf"));
        assert_eq!(terminal.variant(-1), Some("kk"));
        assert_eq!(terminal.variant(-2), Some("nf"));
        assert_eq!(terminal.variant(-3), None);
        assert_eq!(terminal.variant(2), None);
    }

    #[test]
    fn test_bare_category() {
        let terminal = Terminal::new("em");
        assert_eq!(terminal.category(), "em");
        assert_eq!(terminal.num_variants(), 0);
        assert_eq!(terminal.variant(-1), None);
    }

    #[test]
    fn test_literal_terminal() {
        let terminal = Terminal::new("'að_vera:so'_nh");
        assert!(terminal.is_literal());
        assert_eq!(terminal.category(), "'að_vera:so'");
        assert_eq!(terminal.variants(), ["nh"]);
    }

    #[test]
    fn test_serializes_as_name() {
        let terminal: Terminal = serde_json::from_str("\"fs_þgf\"").unwrap();
        assert_eq!(terminal.category(), "fs");
        assert_eq!(serde_json::to_string(&terminal).unwrap(), "\"fs_þgf\"");
    }
}
