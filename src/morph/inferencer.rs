//! Stem and inflectional-class inference.
//!
//! Walks the aggregated lemma table and derives one [`LexiconRow`] per
//! entry. Only the explicitly predictable categories get suffix analysis;
//! everything else keeps its key as stem and its lowercased POS as tag.

use crate::inflection::entry::{InflectionEntry, InflectionTable};
use crate::lexicon::row::LexiconRow;
use crate::morph::classes::MorphClasses;
use crate::morph::stem::compute_stem;

/// UPOS tags whose entries get stem and class analysis.
pub const STEMMABLE_POS: [&str; 5] = ["ADJ", "NOUN", "VERB", "PRON", "PROPN"];

/// Derives stems and class tags from an inflection table.
///
/// Holds the immutable suffix-class configuration; construct once and reuse.
#[derive(Debug, Clone)]
pub struct StemInferencer {
    classes: MorphClasses,
}

impl StemInferencer {
    /// Create an inferencer with the given class configuration.
    pub fn new(classes: MorphClasses) -> Self {
        StemInferencer { classes }
    }

    /// The class configuration in use.
    pub fn classes(&self) -> &MorphClasses {
        &self.classes
    }

    /// Derive one lexicon row per table entry, in key order.
    pub fn infer(&self, table: &InflectionTable) -> Vec<LexiconRow> {
        table
            .iter()
            .map(|(key, entry)| self.infer_entry(key, entry))
            .collect()
    }

    /// Derive the row for a single entry.
    pub fn infer_entry(&self, key: &str, entry: &InflectionEntry) -> LexiconRow {
        match entry {
            InflectionEntry::Inflected { pos, inflections }
                if STEMMABLE_POS.contains(&pos.as_str()) =>
            {
                let forms: Vec<&String> = inflections.keys().collect();
                self.analyze(key, pos, &forms)
            }
            // Invariant words, contractions and non-stemmable categories:
            // the key is its own stem.
            _ => LexiconRow::new(
                key.to_string(),
                key.to_string(),
                entry.pos().to_lowercase(),
            ),
        }
    }

    /// Stem and classify an inflecting lemma.
    ///
    /// The class match runs on the raw accented lemma; accent placement is
    /// what separates e.g. `adj-ός` from `adj-ος`. VERB keeps an empty
    /// subtag when nothing matches; any other unmatched POS falls back to
    /// the raw lemma as stem and the bare lowercased POS as tag.
    fn analyze(&self, lemma: &str, pos: &str, forms: &[&String]) -> LexiconRow {
        let stem = compute_stem(lemma, forms, self.classes.lemma_suffixes());

        let subtag = match self.classes.table_for(pos) {
            Some(table) => match table.classify(lemma) {
                Some(tag) => Some(tag),
                None if pos == "VERB" => Some(""),
                None => None,
            },
            None => None,
        };

        match subtag {
            Some(subtag) => LexiconRow::new(
                lemma.to_string(),
                stem,
                format!("{}-{}", pos.to_lowercase(), subtag),
            ),
            None => LexiconRow::new(
                lemma.to_string(),
                lemma.to_string(),
                pos.to_lowercase(),
            ),
        }
    }
}

impl Default for StemInferencer {
    fn default() -> Self {
        StemInferencer::new(MorphClasses::modern_greek())
    }
}
