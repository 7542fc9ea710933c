//! Cleaned corpus record type.

/// A single cleaned corpus token.
///
/// Produced by the normalizer from one CoNLL-U token line, keeping exactly
/// five fields: surface form (lowercased), lemma, coarse POS, fine POS and
/// the morphological feature string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    /// Surface form as it appeared in text, lowercased.
    pub form: String,
    /// Base form of the word, `_` for multiword-token lines.
    pub lemma: String,
    /// Universal POS tag, `_` for multiword-token lines.
    pub upos: String,
    /// Language-specific POS tag.
    pub xpos: String,
    /// `|`-separated morphological features, `_` when absent.
    pub feats: String,
}

impl CorpusRecord {
    /// Create a record from owned field values.
    pub fn new(form: String, lemma: String, upos: String, xpos: String, feats: String) -> Self {
        CorpusRecord {
            form,
            lemma,
            upos,
            xpos,
            feats,
        }
    }

    /// True for multiword-token lines, whose lemma and POS are unresolved
    /// (`_`) and must be recovered from the following component lines.
    pub fn is_contraction_marker(&self) -> bool {
        self.lemma == "_" || self.upos == "_"
    }

    /// Render the record as one line of the cleaned 5-column intermediate.
    pub fn to_tsv_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.form, self.lemma, self.upos, self.xpos, self.feats
        )
    }

    /// Parse a line of the cleaned 5-column intermediate.
    ///
    /// Returns `None` for lines that do not carry exactly five fields, so
    /// malformed input is skipped rather than aborting the run.
    pub fn parse_tsv(line: &str) -> Option<CorpusRecord> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if fields.len() != 5 {
            return None;
        }
        Some(CorpusRecord::new(
            fields[0].to_string(),
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            fields[4].to_string(),
        ))
    }
}
