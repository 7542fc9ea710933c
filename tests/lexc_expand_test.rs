#[cfg(test)]
mod tests {
    use lexiko::error::LexikoError;
    use lexiko::lexicon::lexc;
    use lexiko::lexicon::row::LexiconRow;
    use lexiko::storage;
    use std::fs;
    use tempfile::TempDir;

    fn sample_lexc() -> String {
        [
            "LEXICON Root",
            "Noun ;",
            "Adj ;",
            "Verb ;",
            "",
            "LEXICON Noun",
            "",
            "LEXICON Adj",
            "",
            "LEXICON NounMascOs",
            "+N+Masc+Sg+Nom:ος #;",
        ]
        .join("\n")
    }

    fn sample_lexicon() -> String {
        [
            "άνθρωπος\tανθρωπο\tnoun-masc-ος",
            "καλός\tκαλ\tadj-ός",
            "με\tμε\tadp",
            "ψυχή\tψυχ\tnoun-fem-η",
        ]
        .join("\n")
    }

    #[test]
    fn test_expand_inserts_entries_after_marker() {
        let dir = TempDir::new().unwrap();
        let lexicon_path = dir.path().join("el.lexicon.txt");
        let lexc_path = dir.path().join("el.lexc");
        fs::write(&lexicon_path, sample_lexicon()).unwrap();
        fs::write(&lexc_path, sample_lexc()).unwrap();

        let lines = storage::read_lines(&lexicon_path).unwrap();
        let rows: Vec<LexiconRow> = lines
            .iter()
            .filter_map(|line| LexiconRow::parse(line))
            .collect();

        let entries = lexc::entries_for_category(&rows, "Noun").unwrap();
        assert_eq!(entries.len(), 2);

        let lexc_lines = storage::read_lines(&lexc_path).unwrap();
        let updated = lexc::splice(&lexc_lines, "Noun", &entries).unwrap();
        storage::write_lines(&lexc_path, &updated).unwrap();

        let written = fs::read_to_string(&lexc_path).unwrap();
        let written_lines: Vec<&str> = written.lines().collect();
        let marker = written_lines
            .iter()
            .position(|l| *l == "LEXICON Noun")
            .unwrap();

        assert_eq!(written_lines[marker + 1], "άνθρωπος:ανθρωπο NounMascOs ;");
        assert_eq!(written_lines[marker + 2], "ψυχή:ψυχ NounFemI ;");
        // The adjective section is untouched by a Noun expansion.
        assert!(!written.contains("καλός:καλ"));
    }

    #[test]
    fn test_missing_section_aborts() {
        let rows = vec![LexiconRow::new("γράφω", "γραφ", "verb-a")];
        let entries = lexc::entries_for_category(&rows, "Verb").unwrap();

        let lexc_lines: Vec<String> = sample_lexc().lines().map(str::to_string).collect();
        let result = lexc::splice(&lexc_lines, "Verb", &entries);

        assert!(matches!(result, Err(LexikoError::Lexc(_))));
    }
}
