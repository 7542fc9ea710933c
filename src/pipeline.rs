//! End-to-end extraction pipeline.
//!
//! Wires the four stages over real files:
//! corpus → cleaned records → inflection table → lexicon rows → lexicon file.
//! Single-threaded and deterministic; one whole corpus per invocation.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::corpus::normalizer::ConlluNormalizer;
use crate::corpus::record::CorpusRecord;
use crate::error::Result;
use crate::inflection::aggregator::InflectionAggregator;
use crate::inflection::entry::InflectionTable;
use crate::lexicon::emitter::LexiconEmitter;
use crate::lexicon::row::LexiconRow;
use crate::morph::classes::MorphClasses;
use crate::morph::inferencer::StemInferencer;
use crate::storage;

/// Counters reported after a full extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Cleaned records that survived normalization.
    pub records: usize,
    /// Entries in the aggregated inflection table.
    pub entries: usize,
    /// Rows written to the lexicon.
    pub rows: usize,
    /// Path the lexicon was written to.
    pub lexicon_path: String,
}

/// The full extraction pipeline.
///
/// Holds one instance of each stage; the suffix-class configuration is
/// injected at construction.
#[derive(Debug, Clone)]
pub struct LexiconPipeline {
    normalizer: ConlluNormalizer,
    aggregator: InflectionAggregator,
    inferencer: StemInferencer,
    emitter: LexiconEmitter,
}

impl LexiconPipeline {
    /// Create a pipeline with the standard Modern Greek classes.
    pub fn new() -> Self {
        Self::with_classes(MorphClasses::modern_greek())
    }

    /// Create a pipeline with an explicit class configuration.
    pub fn with_classes(classes: MorphClasses) -> Self {
        LexiconPipeline {
            normalizer: ConlluNormalizer::new(),
            aggregator: InflectionAggregator::new(),
            inferencer: StemInferencer::new(classes),
            emitter: LexiconEmitter::new(),
        }
    }

    /// Derive a sibling output path from the corpus path:
    /// `corpus.conllu` becomes `corpus.<extension>`.
    pub fn derive_output(corpus_path: &Path, extension: &str) -> PathBuf {
        corpus_path.with_extension(extension)
    }

    /// Read and normalize a corpus file.
    pub fn normalize_file(&self, corpus_path: &Path) -> Result<Vec<CorpusRecord>> {
        let lines = storage::read_lines(corpus_path)?;
        let records = self
            .normalizer
            .normalize(lines.iter().map(String::as_str));
        info!(
            "normalized {}: {} lines, {} records kept",
            corpus_path.display(),
            lines.len(),
            records.len()
        );
        Ok(records)
    }

    /// Aggregate cleaned records into the lemma table.
    pub fn aggregate(&self, records: &[CorpusRecord]) -> InflectionTable {
        let table = self.aggregator.aggregate(records);
        info!("aggregated {} table entries", table.len());
        table
    }

    /// Derive lexicon rows from a lemma table.
    pub fn infer(&self, table: &InflectionTable) -> Vec<LexiconRow> {
        self.inferencer.infer(table)
    }

    /// Render rows as the sorted lexicon text.
    pub fn render(&self, rows: &[LexiconRow]) -> String {
        self.emitter.render(rows)
    }

    /// Run the whole pipeline.
    ///
    /// The inflection table is persisted as a side artifact; a failure
    /// there is reported and the run continues. A lexicon write failure is
    /// fatal.
    pub fn run(
        &self,
        corpus_path: &Path,
        inflections_path: &Path,
        lexicon_path: &Path,
    ) -> Result<PipelineSummary> {
        let records = self.normalize_file(corpus_path)?;
        let table = self.aggregate(&records);

        if let Err(e) = storage::write_inflections(inflections_path, &table) {
            warn!(
                "could not save inflections to {}: {}",
                inflections_path.display(),
                e
            );
        } else {
            info!("inflections saved to {}", inflections_path.display());
        }

        let rows = self.infer(&table);
        let content = self.render(&rows);
        storage::write_lexicon(lexicon_path, &content)?;
        info!("lexicon saved to {}", lexicon_path.display());

        Ok(PipelineSummary {
            records: records.len(),
            entries: table.len(),
            rows: rows.len(),
            lexicon_path: lexicon_path.display().to_string(),
        })
    }
}

impl Default for LexiconPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output() {
        let path = Path::new("data/el_gdt-ud-train.conllu");
        assert_eq!(
            LexiconPipeline::derive_output(path, "lexicon.txt"),
            PathBuf::from("data/el_gdt-ud-train.lexicon.txt")
        );
        assert_eq!(
            LexiconPipeline::derive_output(path, "inflections.json"),
            PathBuf::from("data/el_gdt-ud-train.inflections.json")
        );
    }
}
