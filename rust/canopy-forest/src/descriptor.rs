//! Compact per-token descriptors.
//!
//! A [`Descriptor`] records what the parse found out about one token, with
//! short field names and only the fields that carry information:
//!
//! | key   | field | present when |
//! |-------|-------|--------------|
//! | `x`   | text | always |
//! | `k`   | kind code | the token is not a plain word |
//! | `t`   | terminal name | the token matched a terminal and is not punctuation |
//! | `m`   | meaning tuple | a meaning was resolved |
//! | `v`   | value | the token carries a payload (persons: the nominative name) |
//! | `g`   | gender | a person token matched no terminal |
//! | `err` | `1` | the parse failed at this token |

use serde::{Deserialize, Serialize};

use crate::annotate::annotate;
use crate::derivation::DerivationNode;
use crate::error::ForestError;
use crate::meaning::{Meaning, MeaningResolver};
use crate::terminal::Terminal;
use crate::token::{CASES, NOMINATIVE, PersonName, Token, TokenKind, TokenValue};
use crate::words::{WordCounts, WordTuple};

pub const EM_DASH: &str = "—";
pub const EN_DASH: &str = "–";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(rename = "x")]
    pub text: String,
    /// `None` for plain words.
    #[serde(rename = "k", default, skip_serializing_if = "Option::is_none", with = "kind_code")]
    pub kind: Option<TokenKind>,
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(rename = "m", default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<Meaning>,
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
    #[serde(rename = "g", default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "err", default, skip_serializing_if = "is_unset", with = "flag")]
    pub error: bool,
}

impl Descriptor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
            terminal: None,
            meaning: None,
            value: None,
            gender: None,
            error: false,
        }
    }

    /// The token kind, with the implicit default of a plain word.
    pub fn kind(&self) -> TokenKind {
        self.kind.unwrap_or(TokenKind::Word)
    }

    /// Flag this token as the one where the parse broke down.
    pub fn mark_error(&mut self) {
        self.error = true;
    }
}

fn is_unset(flag: &bool) -> bool {
    !*flag
}

mod kind_code {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::token::TokenKind;

    pub fn serialize<S: Serializer>(kind: &Option<TokenKind>, serializer: S) -> Result<S::Ok, S::Error> {
        match kind {
            Some(kind) => serializer.serialize_u8(kind.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<TokenKind>, D::Error> {
        Option::<u8>::deserialize(deserializer)?
            .map(|code| {
                TokenKind::from_code(code).ok_or_else(|| D::Error::custom(format!("unknown token kind code {code}")))
            })
            .transpose()
    }
}

mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*flag))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

/// Describe `token`, which matched `terminal` (if any) with `meaning` (if any).
///
/// Returns the descriptor and, for tokens worth indexing, the word tuple to count.
pub fn describe(
    token: &Token,
    terminal: Option<&Terminal>,
    meaning: Option<&Meaning>,
) -> Result<(Descriptor, Option<WordTuple>), ForestError> {
    let mut descriptor = Descriptor::new(&token.text);
    let mut word = None;

    if let Some(terminal) = terminal {
        if token.kind == TokenKind::Punctuation {
            if token.text == "-" {
                match terminal.category() {
                    "em" => descriptor.text = EM_DASH.to_owned(),
                    "en" => descriptor.text = EN_DASH.to_owned(),
                    _ => {}
                }
            }
        } else {
            descriptor.terminal = Some(terminal.name().to_owned());
            if let Some(meaning) = meaning {
                let meaning = if terminal.category() == "fs" {
                    // Prepositions come from a closed list, not the lexicon
                    Meaning::new(
                        &token.text,
                        "fs",
                        "alm",
                        terminal.variant(-1).unwrap_or_default().to_uppercase(),
                    )
                } else {
                    meaning.clone()
                };
                word = Some(WordTuple::new(meaning.lemma.replace('-', ""), &meaning.word_class));
                descriptor.meaning = Some(meaning);
            } else if token.kind == TokenKind::Entity {
                word = Some(WordTuple::new(&token.text, "entity"));
            }
        }
    }

    if token.kind != TokenKind::Word {
        descriptor.kind = Some(token.kind);
    }

    if let Some(value) = &token.value {
        match (token.kind, value) {
            (TokenKind::Word | TokenKind::Entity | TokenKind::Punctuation, _) => {}
            (TokenKind::Person, TokenValue::Persons(candidates)) => {
                word = Some(describe_person(token, candidates, terminal, &mut descriptor)?);
            }
            _ => descriptor.value = Some(value.clone()),
        }
    }

    Ok((descriptor, word))
}

/// Gender and case filters carried by the trailing variants of a person terminal.
fn person_filters(terminal: &Terminal) -> (Option<&str>, Option<&str>) {
    let mut gender = terminal.variant(-1);
    let mut case = None;
    if let Some(last) = gender {
        if CASES.contains(&last) {
            case = Some(last);
            gender = None;
        }
    }
    if terminal.num_variants() >= 2 {
        case = terminal.variant(-2);
    }
    (gender, case)
}

fn describe_person(
    token: &Token,
    candidates: &[PersonName],
    terminal: Option<&Terminal>,
    descriptor: &mut Descriptor,
) -> Result<WordTuple, ForestError> {
    let (gender, case) = terminal.map(person_filters).unwrap_or_default();
    let remaining: Vec<&PersonName> = candidates
        .iter()
        .filter(|candidate| gender.is_none_or(|gender| candidate.gender == gender))
        .filter(|candidate| case.is_none_or(|case| candidate.case == case))
        .collect();

    // Nominative first; otherwise the first candidate in tokenizer order
    let person = remaining
        .iter()
        .find(|candidate| candidate.case == NOMINATIVE)
        .or_else(|| remaining.first())
        .ok_or_else(|| ForestError::NoPersonCandidate {
            text: token.text.clone(),
        })?;

    descriptor.value = Some(TokenValue::Text(person.name.clone()));

    let gender = gender.unwrap_or(&person.gender);
    match terminal {
        Some(terminal) => {
            // Downstream consumers read the gender off the terminal name
            if !terminal.name().ends_with(&format!("_{gender}")) {
                descriptor.terminal = Some(format!("{}_{gender}", terminal.name()));
            }
        }
        None => descriptor.gender = Some(gender.to_owned()),
    }

    Ok(WordTuple::new(&person.name, format!("person_{gender}")))
}

/// Describe every token of a sentence, in token order.
///
/// Matched terminals come from `tree` (absent when the parse failed). The token
/// at `error_index`, if any, is flagged; an index past the end flags the last
/// token. Word tuples are added to `words` when given.
pub fn dump_tokens<R>(
    tokens: &[Token],
    tree: Option<&DerivationNode>,
    resolver: &R,
    error_index: Option<usize>,
    mut words: Option<&mut WordCounts>,
) -> Result<Vec<Descriptor>, ForestError>
where
    R: MeaningResolver + ?Sized,
{
    let map = annotate(tokens, tree, resolver)?;
    let error_index = error_index.map(|index| {
        let last = tokens.len().saturating_sub(1);
        if index > last {
            tracing::warn!(index, tokens = tokens.len(), "error index out of range, flagging the last token");
        }
        index.min(last)
    });
    let mut dump = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let matched = map.get(&index);
        let (mut descriptor, word) = describe(
            token,
            matched.map(|m| m.terminal),
            matched.and_then(|m| m.meaning.as_ref()),
        )?;
        if error_index == Some(index) {
            descriptor.mark_error();
        }
        if let (Some(words), Some(word)) = (words.as_deref_mut(), word) {
            words.add(word);
        }
        dump.push(descriptor);
    }
    Ok(dump)
}
