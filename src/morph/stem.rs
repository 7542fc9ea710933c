//! Stem computation.
//!
//! The stem of a lemma is the longest prefix shared by the lemma and all of
//! its recorded surface forms, compared τόνος-less and lowercased. When the
//! evidence is too thin (a prefix shorter than 4 characters, or fewer than 2
//! recorded forms) the shared prefix is unreliable and the stem falls back
//! to suffix-stripping the normalized lemma instead.

use crate::morph::normalize::strip_tonos;

/// Compute the stem for a lemma and its recorded surface forms.
///
/// `lemma_suffixes` is the fallback ending list, tried in declaration order
/// with the first match stripped; when none matches the normalized lemma is
/// returned unchanged.
pub fn compute_stem<S: AsRef<str>>(lemma: &str, forms: &[S], lemma_suffixes: &[String]) -> String {
    let lemma_normalized = strip_tonos(lemma);

    let mut stem = lemma_normalized.clone();
    for form in forms {
        let form_normalized = strip_tonos(form.as_ref());
        let shared = common_prefix(&stem, &form_normalized);
        stem.truncate(shared);
    }

    if stem.chars().count() < 4 || forms.len() < 2 {
        for suffix in lemma_suffixes {
            if let Some(stripped) = lemma_normalized.strip_suffix(suffix.as_str()) {
                return stripped.to_string();
            }
        }
        return lemma_normalized;
    }

    stem
}

/// Byte length of the longest common prefix of two strings, on char
/// boundaries.
fn common_prefix(a: &str, b: &str) -> usize {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::classes::MorphClasses;

    fn suffixes() -> Vec<String> {
        MorphClasses::modern_greek().lemma_suffixes().to_vec()
    }

    #[test]
    fn test_common_prefix_of_forms() {
        // Three forms sharing a 4+ character normalized prefix: the prefix
        // is the stem, accents notwithstanding.
        let stem = compute_stem("άνθρωπος", &["άνθρωπος", "ανθρώπου", "ανθρώπους"], &suffixes());
        assert_eq!(stem, "ανθρωπο");
    }

    #[test]
    fn test_short_prefix_falls_back_to_suffix_strip() {
        // καλός/καλή/καλό share only καλ (3 chars): too short, so the
        // fallback strips -ος from the normalized lemma instead.
        let stem = compute_stem("καλός", &["καλός", "καλή", "καλό"], &suffixes());
        assert_eq!(stem, "καλ");
    }

    #[test]
    fn test_single_form_falls_back_to_suffix_strip() {
        let stem = compute_stem("γράφω", &["γράφει"], &suffixes());
        assert_eq!(stem, "γραφ");
    }

    #[test]
    fn test_suffix_order_first_match_wins() {
        // ηττώμαι: ωμαι is declared before ομαι and matches first.
        let stem = compute_stem("ηττώμαι", &["ηττήθηκε"], &suffixes());
        assert_eq!(stem, "ηττ");
    }

    #[test]
    fn test_no_suffix_match_keeps_normalized_lemma() {
        let stem = compute_stem("πρέπει", &["πρέπει"], &suffixes());
        assert_eq!(stem, "πρεπει");
    }

    #[test]
    fn test_prefix_wins_over_suffix_strip_when_long_enough() {
        let stem = compute_stem("πρόβλημα", &["πρόβλημα", "προβλήματα"], &suffixes());
        assert_eq!(stem, "προβλημα");
    }
}
