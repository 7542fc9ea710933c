//! File persistence for pipeline artifacts.
//!
//! The pipeline touches four kinds of file: the raw CoNLL-U corpus, the
//! cleaned 5-column intermediate, the JSON inflection table and the final
//! lexicon text. All helpers here are thin, synchronous and one-shot;
//! failure semantics (fatal vs. logged) are decided by the callers.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::corpus::record::CorpusRecord;
use crate::error::Result;
use crate::inflection::entry::InflectionTable;

/// Read a text file as lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Write lines to a text file, newline-terminated.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Persist cleaned records as the 5-column tab-separated intermediate.
pub fn write_cleaned(path: &Path, records: &[CorpusRecord]) -> Result<()> {
    let lines: Vec<String> = records.iter().map(CorpusRecord::to_tsv_line).collect();
    write_lines(path, &lines)
}

/// Read cleaned records back from the 5-column intermediate.
/// Lines with the wrong field count are skipped.
pub fn read_cleaned(path: &Path) -> Result<Vec<CorpusRecord>> {
    let lines = read_lines(path)?;
    Ok(lines
        .iter()
        .filter_map(|line| CorpusRecord::parse_tsv(line))
        .collect())
}

/// Persist the inflection table as a nested JSON document.
pub fn write_inflections(path: &Path, table: &InflectionTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load an inflection table persisted by [`write_inflections`].
pub fn read_inflections(path: &Path) -> Result<InflectionTable> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write the rendered lexicon text.
pub fn write_lexicon(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
