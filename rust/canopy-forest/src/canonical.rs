//! The verbose token form handed to display consumers.
//!
//! Canonicalization only renames and reshapes a [`Descriptor`]; it never
//! disambiguates further.

use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;
use crate::meaning::Meaning;
use crate::token::{TokenKind, TokenValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalToken {
    #[serde(rename = "k")]
    pub kind: TokenKind,
    #[serde(rename = "x")]
    pub text: String,
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    /// Stem (lemma).
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
    /// Word class.
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "f", default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<String>,
    /// Inflection.
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none")]
    pub inflection: Option<String>,
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
    #[serde(rename = "g", default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub err: bool,
}

pub fn canonicalize(descriptor: &Descriptor) -> CanonicalToken {
    let meaning = descriptor.meaning.as_ref();
    CanonicalToken {
        kind: descriptor.kind(),
        text: descriptor.text.clone(),
        terminal: descriptor
            .terminal
            .as_deref()
            .map(|terminal| canonical_terminal(terminal, meaning)),
        stem: meaning.map(|m| m.lemma.clone()),
        category: meaning.map(|m| m.word_class.clone()),
        subclass: meaning.map(|m| m.subclass.clone()),
        inflection: meaning.map(|m| m.inflection.clone()),
        value: descriptor.value.clone(),
        gender: descriptor.gender.clone(),
        err: descriptor.error,
    }
}

/// Replace the quoted literal of a literal terminal with a word category.
///
/// `'að:nhm'_x` becomes `nhm_x`; without a `:cat` suffix the meaning's word
/// class is used, and noun genders become `no_kk` and the like.
fn canonical_terminal(terminal: &str, meaning: Option<&Meaning>) -> String {
    let Some(quote) = terminal.chars().next().filter(|c| *c == '\'' || *c == '"') else {
        return terminal.to_owned();
    };
    let Some(end) = terminal.rfind(quote).filter(|end| *end > 0) else {
        return terminal.to_owned();
    };
    let literal = &terminal[..end];
    let rest = &terminal[end + quote.len_utf8()..];
    let first = match (literal.rsplit_once(':'), meaning) {
        (Some((_, category)), _) => category,
        (None, Some(meaning)) => meaning.word_class.as_str(),
        (None, None) => &terminal[..end + quote.len_utf8()],
    };
    if matches!(first, "kk" | "kvk" | "hk") {
        format!("no_{first}{rest}")
    } else {
        format!("{first}{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_terminal_is_kept() {
        assert_eq!(canonical_terminal("no_et_nf_kk", None), "no_et_nf_kk");
    }

    #[test]
    fn test_literal_terminals() {
        assert_eq!(canonical_terminal("'að:nhm'_x", None), "nhm_x");
        let noun = Meaning::new("ár", "hk", "alm", "NFET");
        assert_eq!(canonical_terminal("'ár'_et_nf", Some(&noun)), "no_hk_et_nf");
        assert_eq!(canonical_terminal("\"og\"", None), "\"og\"");
    }

    #[test]
    fn test_meaning_is_flattened() {
        let mut descriptor = Descriptor::new("fór");
        descriptor.terminal = Some("so_0_et_p1".into());
        descriptor.meaning = Some(Meaning::new("fara", "so", "alm", "GM-FH-ÞT-1P-ET"));

        let token = canonicalize(&descriptor);
        assert_eq!(token.kind, TokenKind::Word);
        assert_eq!(token.stem.as_deref(), Some("fara"));
        assert_eq!(token.category.as_deref(), Some("so"));
        assert_eq!(token.subclass.as_deref(), Some("alm"));
        assert_eq!(token.inflection.as_deref(), Some("GM-FH-ÞT-1P-ET"));
        assert_eq!(
            serde_json::to_string(&token).unwrap(),
            r#"{"k":"WORD","x":"fór","t":"so_0_et_p1","s":"fara","c":"so","f":"alm","b":"GM-FH-ÞT-1P-ET"}"#
        );
    }

    #[test]
    fn test_error_and_kind_carry_over() {
        let mut descriptor = Descriptor::new(".");
        descriptor.kind = Some(TokenKind::Punctuation);
        descriptor.mark_error();
        let token = canonicalize(&descriptor);
        assert_eq!(
            serde_json::to_string(&token).unwrap(),
            r#"{"k":"PUNCTUATION","x":".","err":true}"#
        );
    }
}
