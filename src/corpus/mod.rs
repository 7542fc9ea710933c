//! Corpus normalization: raw CoNLL-U lines to cleaned token records.

pub mod normalizer;
pub mod record;

// Re-export commonly used types
pub use normalizer::{ConlluNormalizer, IGNORE_MARKERS};
pub use record::CorpusRecord;
