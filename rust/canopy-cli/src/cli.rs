use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line arguments of the `canopy` binary.
#[derive(Debug, Parser)]
#[command(name = "canopy")]
#[command(bin_name = "canopy")]
#[command(about = "Annotate and simplify articles parsed by the grammar engine", long_about = None)]
pub struct CanopyCli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON lexicon: word form to a list of `[lemma, class, subclass, inflection]`
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// What to do with the article
    #[command(subcommand)]
    pub command: Command,
}

/// The `canopy` subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token descriptors of every sentence
    Tag {
        /// Parsed article JSON
        input: PathBuf,
    },

    /// Print simplified trees, or flagged descriptors for failed sentences
    Parse {
        /// Parsed article JSON
        input: PathBuf,
    },

    /// Print indexable word stems with their counts
    Words {
        /// Parsed article JSON
        input: PathBuf,
    },

    /// Print the people and entities the article mentions
    Register {
        /// Parsed article JSON
        input: PathBuf,

        /// JSON file with `persons` and `entities` title maps
        #[arg(short, long)]
        titles: Option<PathBuf>,

        /// Include names without a known title
        #[arg(short, long)]
        all_names: bool,
    },
}
