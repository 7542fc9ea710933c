//! Single-pass inflection aggregation.
//!
//! Consumes the cleaned record stream in corpus order and builds the lemma
//! table. The only lookahead is contraction resolution, which peeks at (but
//! does not consume) up to the two records following a multiword-token line.

use crate::corpus::record::CorpusRecord;
use crate::inflection::entry::InflectionTable;

/// UPOS tags whose words inflect and are therefore grouped under their lemma.
pub const INFLECTED_POS: [&str; 9] = [
    "ADJ", "DET", "NOUN", "NUM", "PRON", "VERB", "PROPN", "ADV", "AUX",
];

/// Aggregates cleaned corpus records into an [`InflectionTable`].
#[derive(Debug, Clone, Default)]
pub struct InflectionAggregator;

impl InflectionAggregator {
    /// Create a new aggregator.
    pub fn new() -> Self {
        InflectionAggregator
    }

    /// Build the lemma table from a cleaned record stream.
    ///
    /// One sequential pass; after it returns no entry is revisited.
    pub fn aggregate(&self, records: &[CorpusRecord]) -> InflectionTable {
        let mut table = InflectionTable::new();

        for (index, record) in records.iter().enumerate() {
            if record.is_contraction_marker() {
                let (pos, feats) = self.resolve_contraction(records, index);
                table.store_contraction(&record.form, &pos, split_annotations(&feats));
                continue;
            }

            if INFLECTED_POS.contains(&record.upos.as_str()) {
                let lemma = if record.lemma.is_empty() {
                    record.form.as_str()
                } else {
                    record.lemma.as_str()
                };
                table.store_inflected(
                    lemma,
                    &record.form,
                    &record.upos,
                    split_annotations(&record.feats),
                );
            } else {
                table.store_invariant(&record.form, &record.upos);
            }
        }

        table
    }

    /// Recover POS and features for a multiword token from its component
    /// records (the up-to-2 records that follow it). POS values join with
    /// `+`, non-empty feature strings with `|`. The components themselves
    /// are still processed as ordinary records by the main loop.
    fn resolve_contraction(&self, records: &[CorpusRecord], index: usize) -> (String, String) {
        let mut pos = Vec::new();
        let mut annotations = Vec::new();

        for component in records.iter().skip(index + 1).take(2) {
            pos.push(component.upos.clone());
            if component.feats != "_" {
                annotations.push(component.feats.clone());
            }
        }

        (pos.join("+"), annotations.join("|"))
    }
}

/// Split a feature string on `|`. An empty or `_` string still yields one
/// element, matching the historical table layout.
fn split_annotations(feats: &str) -> Vec<String> {
    feats.split('|').map(str::to_string).collect()
}
