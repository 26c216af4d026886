//! Tokens handed over by the tokenizer, one sentence at a time.
//!
//! The token kinds form a closed set. Each kind has a stable numeric code,
//! used in the compact stored dump, and a descriptive name, used in the
//! canonical display form.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The grammatical cases a person name candidate (or a terminal variant) can carry.
pub const CASES: [&str; 4] = ["nf", "þf", "þgf", "ef"];

/// The nominative case, preferred when several person name candidates remain.
pub const NOMINATIVE: &str = "nf";

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Punctuation,
    Time,
    Date,
    Year,
    Number,
    Word,
    Telno,
    Percent,
    Url,
    Ordinal,
    Timestamp,
    Currency,
    Amount,
    Person,
    Email,
    Entity,
    Unknown,
}

impl TokenKind {
    const ALL: [TokenKind; 17] = [
        TokenKind::Punctuation,
        TokenKind::Time,
        TokenKind::Date,
        TokenKind::Year,
        TokenKind::Number,
        TokenKind::Word,
        TokenKind::Telno,
        TokenKind::Percent,
        TokenKind::Url,
        TokenKind::Ordinal,
        TokenKind::Timestamp,
        TokenKind::Currency,
        TokenKind::Amount,
        TokenKind::Person,
        TokenKind::Email,
        TokenKind::Entity,
        TokenKind::Unknown,
    ];

    /// The numeric code of this kind in the compact dump (1-based).
    pub fn code(self) -> u8 {
        match self {
            TokenKind::Punctuation => 1,
            TokenKind::Time => 2,
            TokenKind::Date => 3,
            TokenKind::Year => 4,
            TokenKind::Number => 5,
            TokenKind::Word => 6,
            TokenKind::Telno => 7,
            TokenKind::Percent => 8,
            TokenKind::Url => 9,
            TokenKind::Ordinal => 10,
            TokenKind::Timestamp => 11,
            TokenKind::Currency => 12,
            TokenKind::Amount => 13,
            TokenKind::Person => 14,
            TokenKind::Email => 15,
            TokenKind::Entity => 16,
            TokenKind::Unknown => 17,
        }
    }

    /// Look up a kind by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// The descriptive name of this kind, as shown to display consumers.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Time => "TIME",
            TokenKind::Date => "DATE",
            TokenKind::Year => "YEAR",
            TokenKind::Number => "NUMBER",
            TokenKind::Word => "WORD",
            TokenKind::Telno => "TELNO",
            TokenKind::Percent => "PERCENT",
            TokenKind::Url => "URL",
            TokenKind::Ordinal => "ORDINAL",
            TokenKind::Timestamp => "TIMESTAMP",
            TokenKind::Currency => "CURRENCY",
            TokenKind::Amount => "AMOUNT",
            TokenKind::Person => "PERSON",
            TokenKind::Email => "EMAIL",
            TokenKind::Entity => "ENTITY",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One candidate reading of a person name token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// The full name, in the inflected form of this candidate's case.
    pub name: String,
    /// Grammatical gender: `kk`, `kvk` or `hk`.
    pub gender: String,
    /// Grammatical case: one of [`CASES`].
    pub case: String,
}

impl PersonName {
    pub fn new(name: impl Into<String>, gender: impl Into<String>, case: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            case: case.into(),
        }
    }
}

/// The kind-specific payload of a token.
///
/// Serialized untagged; the token kind tells consumers how to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Candidate readings of a person name.
    Persons(Vec<PersonName>),
    /// Numbers, percentages, years and ordinals, kept exactly as written.
    Number(Number),
    Timestamp {
        #[serde(rename = "y")]
        year: i32,
        #[serde(rename = "mo")]
        month: u32,
        #[serde(rename = "d")]
        day: u32,
        #[serde(rename = "h")]
        hour: u32,
        #[serde(rename = "m")]
        minute: u32,
        #[serde(rename = "s")]
        second: u32,
    },
    Date {
        #[serde(rename = "y")]
        year: i32,
        #[serde(rename = "mo")]
        month: u32,
        #[serde(rename = "d")]
        day: u32,
    },
    Time {
        #[serde(rename = "h")]
        hour: u32,
        #[serde(rename = "m")]
        minute: u32,
        #[serde(rename = "s")]
        second: u32,
    },
    Amount { amount: Number, currency: String },
    /// Currency codes and resolved (nominative) person names.
    Text(String),
}

/// A single token of a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The original surface text.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, value: Option<TokenValue>) -> Self {
        Self {
            kind,
            text: text.into(),
            value,
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Word, text, None)
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Punctuation, text, None)
    }

    pub fn entity(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Entity, text, None)
    }

    pub fn person(text: impl Into<String>, candidates: Vec<PersonName>) -> Self {
        Self::new(TokenKind::Person, text, Some(TokenValue::Persons(candidates)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_codes_are_stable_and_unique() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TokenKind::Punctuation.code(), 1);
        assert_eq!(TokenKind::Person.code(), 14);
        assert_eq!(TokenKind::from_code(0), None);
        assert_eq!(TokenKind::from_code(18), None);
    }

    #[test]
    fn test_kind_serializes_by_name() {
        let json = serde_json::to_string(&TokenKind::Telno).unwrap();
        assert_eq!(json, "\"TELNO\"");
        assert_eq!(TokenKind::Telno.to_string(), "TELNO");
    }

    #[test]
    fn test_token_deserializes_with_payloads() {
        let token: Token = serde_json::from_str(
            r#"{"kind":"PERSON","text":"Jóni","value":[{"name":"Jón","gender":"kk","case":"þgf"}]}"#,
        )
        .unwrap();
        assert_eq!(token, Token::person("Jóni", vec![PersonName::new("Jón", "kk", "þgf")]));

        let date: Token =
            serde_json::from_str(r#"{"kind":"DATE","text":"3. mars 2016","value":{"y":2016,"mo":3,"d":3}}"#)
                .unwrap();
        assert_eq!(
            date.value,
            Some(TokenValue::Date {
                year: 2016,
                month: 3,
                day: 3
            })
        );

        let time: Token =
            serde_json::from_str(r#"{"kind":"TIME","text":"kl. 14:30","value":{"h":14,"m":30,"s":0}}"#).unwrap();
        assert_eq!(
            time.value,
            Some(TokenValue::Time {
                hour: 14,
                minute: 30,
                second: 0
            })
        );

        let word: Token = serde_json::from_str(r#"{"kind":"WORD","text":"hestur"}"#).unwrap();
        assert_eq!(word, Token::word("hestur"));
    }
}
