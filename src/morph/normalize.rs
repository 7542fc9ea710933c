//! Diacritic stripping for Greek word forms.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Remove the τόνος (and any other combining mark) from a word and
/// lowercase it.
///
/// Decomposes to NFD, drops combining marks, then lowercases, so that
/// `καλή` and `καλη` compare equal structurally.
pub fn strip_tonos(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
