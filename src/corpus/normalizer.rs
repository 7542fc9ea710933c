//! CoNLL-U corpus normalizer.
//!
//! Turns raw treebank lines into cleaned [`CorpusRecord`]s:
//!
//! ```text
//! 2	Μάντσεστερ	Μάντσεστερ	X	X	Foreign=Yes	4	nsubj	_	_   -> dropped
//! 3	ηττήθηκε	ηττώμαι	VERB	VERB	Aspect=Perf|...	0	root	_	_  -> kept
//! ```
//!
//! Comment lines, blank sentence separators, punctuation, symbols, foreign
//! words, abbreviations, unresolved-category tokens and forms containing
//! digits are all excluded. The surviving lines keep five fields: lowercased
//! surface form, lemma, UPOS, XPOS and the feature string.

use lazy_static::lazy_static;
use regex::Regex;

use crate::corpus::record::CorpusRecord;

/// Annotation markers whose presence excludes a token line.
///
/// `PUNCT`, `SYM` and `X` match POS columns; `Foreign=Yes` and `Abbr=Yes`
/// match the feature column, alone or as one `|`-component among several.
pub const IGNORE_MARKERS: [&str; 5] = ["PUNCT", "SYM", "X", "Foreign=Yes", "Abbr=Yes"];

lazy_static! {
    static ref DIGIT_RE: Regex = Regex::new(r"\d").unwrap();
}

/// Normalizer for CoNLL-U token lines.
///
/// A pure transform: no I/O, no state beyond the fixed ignore set. Records
/// come out in corpus order; sentence boundaries are not preserved.
#[derive(Debug, Clone, Default)]
pub struct ConlluNormalizer;

impl ConlluNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        ConlluNormalizer
    }

    /// Normalize a single raw corpus line.
    ///
    /// Returns `None` for comments, blank lines, excluded tokens and
    /// malformed lines (fewer than five annotation fields after the ID
    /// column). Malformed input is skipped, never fatal.
    pub fn normalize_line(&self, line: &str) -> Option<CorpusRecord> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        // Split off the ID column; the remainder is the annotation tail.
        let (_, tail) = line.split_once('\t')?;
        let fields: Vec<&str> = tail.split('\t').collect();
        if fields.len() < 5 {
            return None;
        }

        if fields.iter().any(|field| Self::is_ignored(field)) {
            return None;
        }

        // Forms containing digits are numerals or codes, not lexicon material.
        if DIGIT_RE.is_match(fields[0]) {
            return None;
        }

        Some(CorpusRecord::new(
            fields[0].to_lowercase(),
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            fields[4].to_string(),
        ))
    }

    /// Normalize a full corpus, keeping line order.
    pub fn normalize<'a, I>(&self, lines: I) -> Vec<CorpusRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.normalize_line(line))
            .collect()
    }

    /// A field matches an ignore marker if it equals the marker or carries
    /// it as one of its `|`-separated components.
    fn is_ignored(field: &str) -> bool {
        IGNORE_MARKERS
            .iter()
            .any(|marker| field == *marker || field.split('|').any(|part| part == *marker))
    }
}
