//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexikoArgs, OutputFormat};
use crate::error::Result;

/// Result structure for corpus normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub path: String,
    pub lines_read: usize,
    pub records_kept: usize,
}

/// Result structure for inflection table construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct InflectionsResult {
    pub path: String,
    pub entries: usize,
}

/// Result structure for lexicon derivation.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconResult {
    pub path: String,
    pub rows: usize,
}

/// Result structure for lexc splicing.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexcExpandResult {
    pub path: String,
    pub category: String,
    pub entries_added: usize,
}

/// Print a command result in the requested format.
pub fn output_result<T: Serialize>(message: &str, data: &T, args: &LexikoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
