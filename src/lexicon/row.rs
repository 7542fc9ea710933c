//! Lexicon row type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One derived lexicon entry: lemma, stem and inflectional-class tag.
///
/// Read-only once built; rendered as three tab-separated fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LexiconRow {
    /// Dictionary form.
    pub lemma: String,
    /// Common root shared by the lemma's recorded forms.
    pub stem: String,
    /// Inflectional-class tag, e.g. `noun-masc-ος`, or the lowercased POS
    /// when no class generalizes.
    pub class_tag: String,
}

impl LexiconRow {
    /// Create a new row.
    pub fn new<S: Into<String>>(lemma: S, stem: S, class_tag: S) -> Self {
        LexiconRow {
            lemma: lemma.into(),
            stem: stem.into(),
            class_tag: class_tag.into(),
        }
    }

    /// Parse a rendered row back from its tab-separated form.
    pub fn parse(line: &str) -> Option<LexiconRow> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if fields.len() != 3 {
            return None;
        }
        Some(LexiconRow::new(fields[0], fields[1], fields[2]))
    }
}

impl fmt::Display for LexiconRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.lemma, self.stem, self.class_tag)
    }
}
