#![warn(missing_docs)]

//! # Canopy CLI
//!
//! Command line access to the annotation and simplification engine. Input
//! is an article the grammar engine has already parsed, as JSON: paragraphs
//! of sentences, each with its tokens and either a derivation tree or the
//! index of the token where parsing failed.
//!
//! ## Usage
//!
//! ```bash
//! canopy --lexicon lexicon.json tag article.json
//! canopy --lexicon lexicon.json parse article.json
//! canopy --config canopy.json words article.json
//! canopy register --titles titles.json --all-names article.json
//! ```
//!
//! Output is pretty-printed JSON on stdout. Logging goes to stderr and is
//! controlled with the `CANOPY_LOG` environment variable (default `warn`).

mod cli;
pub use cli::*;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use canopy_article::{Article, Config, Document, StaticTitles, parse, process, tag};
use canopy_forest::Lexicon;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("malformed {what} in {}", path.display()))
}

fn to_output<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

/// Run a parsed command line and return what it prints.
pub fn run(cli: &CanopyCli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let lexicon: Lexicon = match &cli.lexicon {
        Some(path) => read_json(path, "lexicon")?,
        None => Lexicon::new(),
    };
    tracing::debug!(forms = lexicon.len(), "lexicon ready");

    match &cli.command {
        Command::Tag { input } => {
            let document: Document = read_json(input, "article")?;
            let (paragraphs, stats) = process(&document, &lexicon, tag)?;
            to_output(&json!({ "paragraphs": paragraphs, "stats": stats }))
        }
        Command::Parse { input } => {
            let document: Document = read_json(input, "article")?;
            let (paragraphs, stats) = process(&document, &lexicon, parse)?;
            to_output(&json!({ "paragraphs": paragraphs, "stats": stats }))
        }
        Command::Words { input } => {
            let document: Document = read_json(input, "article")?;
            let article = Article::analyze(&document, &lexicon)?;
            let words: Vec<_> = config
                .index
                .indexable(&article.words)
                .into_iter()
                .map(|(word, count)| json!({ "stem": word.stem, "category": word.category, "count": count }))
                .collect();
            to_output(&words)
        }
        Command::Register {
            input,
            titles,
            all_names,
        } => {
            let document: Document = read_json(input, "article")?;
            let titles: StaticTitles = match titles {
                Some(path) => read_json(path, "titles")?,
                None => StaticTitles::new(),
            };
            let article = Article::analyze(&document, &lexicon)?;
            let register = article.register(&titles, *all_names || config.register.all_names);
            to_output(&register)
        }
    }
}
