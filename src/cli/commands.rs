//! Command implementations for the lexiko CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::normalizer::ConlluNormalizer;
use crate::error::Result;
use crate::lexicon::lexc;
use crate::lexicon::row::LexiconRow;
use crate::pipeline::LexiconPipeline;
use crate::storage;

/// Execute a CLI command.
pub fn execute_command(args: LexikoArgs) -> Result<()> {
    match &args.command {
        Command::Extract(extract_args) => extract(extract_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize(normalize_args.clone(), &args),
        Command::Inflections(inflections_args) => inflections(inflections_args.clone(), &args),
        Command::Lexicon(lexicon_args) => lexicon(lexicon_args.clone(), &args),
        Command::LexcExpand(expand_args) => lexc_expand(expand_args.clone(), &args),
    }
}

/// Run the full extraction pipeline.
fn extract(args: ExtractArgs, cli_args: &LexikoArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Extracting lexicon from: {}", args.corpus_path.display());
    }

    let inflections_path = args
        .inflections
        .unwrap_or_else(|| LexiconPipeline::derive_output(&args.corpus_path, "inflections.json"));
    let lexicon_path = args
        .lexicon
        .unwrap_or_else(|| LexiconPipeline::derive_output(&args.corpus_path, "lexicon.txt"));

    let pipeline = LexiconPipeline::new();
    let summary = pipeline.run(&args.corpus_path, &inflections_path, &lexicon_path)?;

    output_result(
        &format!(
            "Lexicon saved to: {} ({} rows from {} entries)",
            summary.lexicon_path, summary.rows, summary.entries
        ),
        &summary,
        cli_args,
    )
}

/// Normalize a corpus into the cleaned intermediate.
fn normalize(args: NormalizeArgs, cli_args: &LexikoArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| LexiconPipeline::derive_output(&args.corpus_path, "txt"));

    let lines = storage::read_lines(&args.corpus_path)?;
    let normalizer = ConlluNormalizer::new();
    let records = normalizer.normalize(lines.iter().map(String::as_str));
    storage::write_cleaned(&output, &records)?;

    output_result(
        &format!("Corpus processed and saved to: {}", output.display()),
        &NormalizeResult {
            path: output.display().to_string(),
            lines_read: lines.len(),
            records_kept: records.len(),
        },
        cli_args,
    )
}

/// Build and persist the inflection table.
fn inflections(args: InflectionsArgs, cli_args: &LexikoArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| LexiconPipeline::derive_output(&args.corpus_path, "inflections.json"));

    let pipeline = LexiconPipeline::new();
    let records = pipeline.normalize_file(&args.corpus_path)?;
    let table = pipeline.aggregate(&records);
    storage::write_inflections(&output, &table)?;

    output_result(
        &format!("Inflections saved to: {}", output.display()),
        &InflectionsResult {
            path: output.display().to_string(),
            entries: table.len(),
        },
        cli_args,
    )
}

/// Derive the lexicon from a persisted inflection table.
fn lexicon(args: LexiconArgs, cli_args: &LexikoArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| LexiconPipeline::derive_output(&args.inflections_path, "lexicon.txt"));

    let pipeline = LexiconPipeline::new();
    let table = storage::read_inflections(&args.inflections_path)?;
    let rows = pipeline.infer(&table);
    let content = pipeline.render(&rows);
    storage::write_lexicon(&output, &content)?;

    output_result(
        &format!("Lexicon saved to: {}", output.display()),
        &LexiconResult {
            path: output.display().to_string(),
            rows: rows.len(),
        },
        cli_args,
    )
}

/// Splice lexicon entries into a lexc source file, in place.
fn lexc_expand(args: LexcExpandArgs, cli_args: &LexikoArgs) -> Result<()> {
    let category = args.category.as_str();

    let lexicon_lines = storage::read_lines(&args.lexicon_path)?;
    let rows: Vec<LexiconRow> = lexicon_lines
        .iter()
        .filter_map(|line| LexiconRow::parse(line))
        .collect();

    let entries = lexc::entries_for_category(&rows, category)?;
    let lexc_lines = storage::read_lines(&args.lexc_path)?;
    let updated = lexc::splice(&lexc_lines, category, &entries)?;
    storage::write_lines(&args.lexc_path, &updated)?;

    output_result(
        &format!(
            "Updated lexc file written with [LEXICON {}] to {}",
            category,
            args.lexc_path.display()
        ),
        &LexcExpandResult {
            path: args.lexc_path.display().to_string(),
            category: category.to_string(),
            entries_added: entries.len(),
        },
        cli_args,
    )
}
