//! # canopy-forest
//!
//! Annotation and simplification of the derivation trees a grammar engine
//! produces for tokenized sentences.
//!
//! The engine hands over a token list and, when parsing succeeded, the
//! [`DerivationNode`] tree of the best parse. This crate turns the pair into
//! the forms display and indexing consumers need:
//!
//! - [`annotate`] maps every token position to the terminal it matched and,
//!   through a [`MeaningResolver`], to a [`Meaning`].
//! - [`dump_tokens`] builds compact per-token [`Descriptor`]s and counts
//!   indexable word stems in [`WordCounts`].
//! - [`simplify`] folds the tree into a small constituency tree over the
//!   [`Category`] set, with [`CanonicalToken`] leaves.
//!
//! ## Tree shape
//!
//! ```text
//! S0
//!   Setning
//!     Nl_et_nf_kk
//!       no_et_nf_kk @0
//!     SagnRuna
//!       so_0_et_p3 @1
//!   grm @2
//! ```
//!
//! simplifies to `(P (S (NP hesturinn) (VP hleypur)) .)`.
//!
//! ## Example
//!
//! ```
//! use canopy_forest::{DerivationNode, Lexicon, Meaning, Token, simplify};
//!
//! let tokens = vec![Token::word("hesturinn"), Token::word("hleypur"), Token::punctuation(".")];
//! let tree = DerivationNode::internal(
//!     "S0",
//!     vec![
//!         DerivationNode::internal(
//!             "Setning",
//!             vec![
//!                 DerivationNode::internal("Nl_et_nf_kk", vec![DerivationNode::leaf(0, "no_et_nf_kk")]),
//!                 DerivationNode::internal("SagnRuna", vec![DerivationNode::leaf(1, "so_0_et_p3")]),
//!             ],
//!         ),
//!         DerivationNode::leaf(2, "grm"),
//!     ],
//! );
//! let lexicon = Lexicon::new().with("hleypur", Meaning::new("hlaupa", "so", "alm", "GM-FH-NT-3P-ET"));
//!
//! let root = simplify(&tokens, Some(&tree), &lexicon).unwrap().unwrap();
//! let texts: Vec<_> = root.terminals().iter().map(|token| token.text.as_str()).collect();
//! assert_eq!(texts, ["hesturinn", "hleypur", "."]);
//! ```

pub mod annotate;
pub mod canonical;
pub mod category;
pub mod derivation;
pub mod descriptor;
pub mod error;
pub mod meaning;
pub mod simplify;
pub mod terminal;
pub mod token;
pub mod words;

pub use annotate::{Match, TerminalMap, annotate};
pub use canonical::{CanonicalToken, canonicalize};
pub use category::Category;
pub use derivation::{DerivationNode, Internal, Leaf, Step};
pub use descriptor::{Descriptor, describe, dump_tokens};
pub use error::ForestError;
pub use meaning::{Lexicon, Meaning, MeaningResolver, Resolution};
pub use simplify::{Phrase, SimplifiedNode, Simplifier, simplify};
pub use terminal::Terminal;
pub use token::{PersonName, Token, TokenKind, TokenValue};
pub use words::{WordCounts, WordTuple};
