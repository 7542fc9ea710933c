//! Lexicon emission: formatting and ordering.
//!
//! No business logic beyond rendering rows and fixing the output order.
//! Rows sort lexicographically by their full rendered string (byte order),
//! which makes repeated runs over identical input byte-identical.

use crate::lexicon::row::LexiconRow;

/// Formats and sorts lexicon rows for writing.
#[derive(Debug, Clone, Default)]
pub struct LexiconEmitter;

impl LexiconEmitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        LexiconEmitter
    }

    /// Render rows as sorted `lemma<TAB>stem<TAB>class_tag` lines.
    pub fn emit(&self, rows: &[LexiconRow]) -> Vec<String> {
        let mut lines: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
        lines.sort();
        lines
    }

    /// Render the whole lexicon as one newline-terminated string.
    pub fn render(&self, rows: &[LexiconRow]) -> String {
        let lines = self.emit(rows);
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}
