//! Lexc source-file splicing.
//!
//! One-shot utility that extends a finite-state lexicon description: rows
//! whose class tag maps to a lexc continuation class are rendered as
//! `lemma:stem Class ;` entries and inserted into the `.lexc` source
//! immediately after the matching `LEXICON <Category>` marker line.

use crate::error::{LexikoError, Result};
use crate::lexicon::row::LexiconRow;

/// Class-tag to continuation-class mappings for nouns.
const NOUN_CLASSES: [(&str, &str); 8] = [
    ("noun-masc-ος", "NounMascOs"),
    ("noun-masc-ας", "NounMascAs"),
    ("noun-masc-ης", "NounMascIs"),
    ("noun-neut-ι", "NounNeutI"),
    ("noun-neut-μα", "NounNeutMa"),
    ("noun-neut-ο", "NounNeutO"),
    ("noun-fem-α", "NounFemA"),
    ("noun-fem-η", "NounFemI"),
];

/// Class-tag to continuation-class mappings for adjectives.
const ADJ_CLASSES: [(&str, &str); 5] = [
    ("adj-ός", "AdjOs1"),
    ("adj-ος", "AdjOs2"),
    ("adj-ής", "AdjIs"),
    ("adj-ης", "AdjIs2"),
    ("adj-ύς", "AdjUs"),
];

/// Class-tag to continuation-class mappings for verbs.
const VERB_CLASSES: [(&str, &str); 2] = [("verb-a", "VerbA"), ("verb-παθ", "VerbPath")];

/// The continuation-class mapping for a lexc category.
pub fn continuation_classes(category: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match category {
        "Noun" => Some(&NOUN_CLASSES),
        "Adj" => Some(&ADJ_CLASSES),
        "Verb" => Some(&VERB_CLASSES),
        _ => None,
    }
}

/// Render the lexc entries for one category from lexicon rows.
///
/// Rows whose class tag has no continuation class in the category are
/// skipped. Errors when the category itself is unknown.
pub fn entries_for_category(rows: &[LexiconRow], category: &str) -> Result<Vec<String>> {
    let classes = continuation_classes(category)
        .ok_or_else(|| LexikoError::lexc(format!("unknown lexc category: {category}")))?;

    Ok(rows
        .iter()
        .filter_map(|row| {
            classes
                .iter()
                .find(|entry| entry.0 == row.class_tag)
                .map(|entry| format!("{}:{} {} ;", row.lemma, row.stem, entry.1))
        })
        .collect())
}

/// Insert entries into lexc source lines, immediately after the
/// `LEXICON <Category>` marker.
///
/// A missing marker is unrecoverable for this stage and aborts it.
pub fn splice(lines: &[String], category: &str, entries: &[String]) -> Result<Vec<String>> {
    let marker = format!("LEXICON {category}");
    let position = lines
        .iter()
        .position(|line| line.trim() == marker)
        .ok_or_else(|| {
            LexikoError::lexc(format!("LEXICON {category} section not found in the lexc file"))
        })?;

    let mut updated = Vec::with_capacity(lines.len() + entries.len());
    updated.extend_from_slice(&lines[..=position]);
    updated.extend(entries.iter().cloned());
    updated.extend_from_slice(&lines[position + 1..]);
    Ok(updated)
}
