//! # canopy-article
//!
//! Processing of whole articles whose sentences the grammar engine has
//! already parsed.
//!
//! An article arrives as a [`Document`]: paragraphs of [`Sentence`]s, each
//! with its tokens and either a derivation tree or the index of the token
//! where parsing failed. From there:
//!
//! - [`process`] maps every sentence through a transform such as [`tag`] or
//!   [`parse`] and collects [`ParseStats`].
//! - [`Article::analyze`] produces the stored form: the compact
//!   [`TokenDump`], the word stem counts, a text dump of every tree and the
//!   statistics.
//! - [`IndexPolicy`] decides which word stems are worth indexing.
//! - [`NameRegister`] lists the people and entities an article mentions,
//!   with titles from a [`TitleLookup`].
//!
//! ## Architecture
//!
//! ```text
//! Document → process(tag | parse) → paragraphs + ParseStats
//!          → Article::analyze → TokenDump → NameRegister
//!                             → WordCounts → IndexPolicy::indexable
//! ```

pub mod config;
pub mod dump;
pub mod error;
pub mod process;
pub mod register;
pub mod sentence;
pub mod stats;
pub mod words;

pub use config::{Config, RegisterConfig};
pub use dump::{StoredTokens, TokenDump};
pub use error::ArticleError;
pub use process::{Article, ParsedSentence, parse, process, tag};
pub use register::{NameRegister, RegisterEntry, StaticTitles, TitleLookup};
pub use sentence::{Document, Outcome, Sentence};
pub use stats::{ParseStats, StatsCollector};
pub use words::{INDEXED_CATEGORIES, IndexPolicy};
