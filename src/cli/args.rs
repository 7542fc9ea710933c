//! Command line argument parsing for the lexiko CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// lexiko - Morphological lexicon extraction for Modern Greek
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiko")]
#[command(about = "Derive a Modern Greek morphological lexicon from a CoNLL-U treebank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexikoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexikoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the full pipeline: normalize, aggregate, infer, emit
    Extract(ExtractArgs),

    /// Normalize a corpus into the cleaned 5-column intermediate
    Normalize(NormalizeArgs),

    /// Build and persist the inflection table
    Inflections(InflectionsArgs),

    /// Derive the lexicon from a persisted inflection table
    Lexicon(LexiconArgs),

    /// Splice lexicon entries into a lexc source file
    #[command(name = "lexc-expand")]
    LexcExpand(LexcExpandArgs),
}

/// Arguments for the full extraction pipeline
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Path to the CoNLL-U corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus_path: PathBuf,

    /// Inflection table output path (default: <corpus>.inflections.json)
    #[arg(long, value_name = "FILE")]
    pub inflections: Option<PathBuf>,

    /// Lexicon output path (default: <corpus>.lexicon.txt)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Arguments for corpus normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Path to the CoNLL-U corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus_path: PathBuf,

    /// Cleaned output path (default: <corpus>.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for inflection table construction
#[derive(Parser, Debug, Clone)]
pub struct InflectionsArgs {
    /// Path to the CoNLL-U corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus_path: PathBuf,

    /// Table output path (default: <corpus>.inflections.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for lexicon derivation
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Path to a persisted inflection table (JSON)
    #[arg(value_name = "INFLECTIONS")]
    pub inflections_path: PathBuf,

    /// Lexicon output path (default: <inflections>.lexicon.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Lexc categories with continuation-class mappings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexcCategory {
    /// Nouns
    Noun,
    /// Adjectives
    Adj,
    /// Verbs
    Verb,
}

impl LexcCategory {
    /// The `LEXICON <Category>` marker name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LexcCategory::Noun => "Noun",
            LexcCategory::Adj => "Adj",
            LexcCategory::Verb => "Verb",
        }
    }
}

/// Arguments for lexc splicing
#[derive(Parser, Debug, Clone)]
pub struct LexcExpandArgs {
    /// Path to the lexicon text file
    #[arg(value_name = "LEXICON")]
    pub lexicon_path: PathBuf,

    /// Path to the lexc source file to expand in place
    #[arg(value_name = "LEXC_FILE")]
    pub lexc_path: PathBuf,

    /// Category section to expand
    #[arg(short, long)]
    pub category: LexcCategory,
}
