#[cfg(test)]
mod tests {
    use lexiko::inflection::InflectionEntry;
    use lexiko::pipeline::LexiconPipeline;
    use lexiko::storage;
    use std::fs;
    use tempfile::TempDir;

    /// A small treebank slice: one adjective paradigm, a contraction with
    /// its component lines, an adposition, a verb, plus lines that must be
    /// excluded (comment, foreign word, punctuation, numeral).
    fn sample_corpus() -> String {
        [
            "# sent_id = 1",
            "# text = sample",
            "1\tΚαλός\tκαλός\tADJ\tADJ\tCase=Nom|Gender=Masc|Number=Sing\t2\tamod\t_\t_",
            "2\tκαλή\tκαλός\tADJ\tADJ\tCase=Nom|Gender=Fem|Number=Sing\t3\tamod\t_\t_",
            "3\tκαλό\tκαλός\tADJ\tADJ\tCase=Acc|Gender=Neut|Number=Sing\t4\tamod\t_\t_",
            "4\tΜάντσεστερ\tΜάντσεστερ\tX\tX\tForeign=Yes\t5\tnsubj\t_\t_",
            "5\t,\t,\tPUNCT\tPUNCT\t_\t6\tpunct\t_\t_",
            "6\t1999\t1999\tNUM\tNUM\tNumType=Card\t7\tnummod\t_\t_",
            "",
            "1-2\tστο\t_\t_\t_\t_\t_\t_\t_\t_",
            "1\tσε\tσε\tADP\tADP\t_\t3\tcase\t_\t_",
            "2\tτο\tο\tDET\tDET\tCase=Acc|Definite=Def|Gender=Neut|Number=Sing\t3\tdet\t_\t_",
            "3\tηττήθηκε\tηττώμαι\tVERB\tVERB\tAspect=Perf|Mood=Ind|Number=Sing\t0\troot\t_\t_",
            "4\tμε\tμε\tADP\tADP\t_\t5\tcase\t_\t_",
        ]
        .join("\n")
    }

    #[test]
    fn test_extract_end_to_end() {
        let dir = TempDir::new().unwrap();
        let corpus_path = dir.path().join("sample.conllu");
        fs::write(&corpus_path, sample_corpus()).unwrap();

        let inflections_path = dir.path().join("sample.inflections.json");
        let lexicon_path = dir.path().join("sample.lexicon.txt");

        let pipeline = LexiconPipeline::new();
        let summary = pipeline
            .run(&corpus_path, &inflections_path, &lexicon_path)
            .unwrap();

        assert_eq!(summary.rows, summary.entries);

        let lexicon = fs::read_to_string(&lexicon_path).unwrap();
        let lines: Vec<&str> = lexicon.lines().collect();

        assert!(lines.contains(&"καλός\tκαλ\tadj-ός"));
        assert!(lines.contains(&"ηττώμαι\tηττ\tverb-παθ"));
        assert!(lines.contains(&"στο\tστο\tadp+det"));
        assert!(lines.contains(&"σε\tσε\tadp"));
        assert!(lines.contains(&"με\tμε\tadp"));
        assert!(lines.contains(&"ο\tο\tdet"));

        // Excluded material leaves no trace.
        assert!(!lexicon.contains("Μάντσεστερ"));
        assert!(!lexicon.contains("1999"));

        // Output is sorted by the full row string.
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
    }

    #[test]
    fn test_persisted_table_shape() {
        let dir = TempDir::new().unwrap();
        let corpus_path = dir.path().join("sample.conllu");
        fs::write(&corpus_path, sample_corpus()).unwrap();

        let inflections_path = dir.path().join("sample.inflections.json");
        let lexicon_path = dir.path().join("sample.lexicon.txt");

        LexiconPipeline::new()
            .run(&corpus_path, &inflections_path, &lexicon_path)
            .unwrap();

        let table = storage::read_inflections(&inflections_path).unwrap();

        // The adjective groups all three surface forms under its lemma.
        let entry = table.get("καλός").unwrap();
        assert_eq!(entry.pos(), "ADJ");
        let inflections = entry.inflections().unwrap();
        assert_eq!(inflections.len(), 3);
        assert!(inflections.contains_key("καλός"));
        assert!(inflections.contains_key("καλή"));
        assert!(inflections.contains_key("καλό"));

        // The contraction keeps the joined POS and the component features.
        match table.get("στο").unwrap() {
            InflectionEntry::Contraction { pos, annotations } => {
                assert_eq!(pos, "ADP+DET");
                assert!(annotations.contains(&"Case=Acc".to_string()));
            }
            other => panic!("expected contraction entry, got {other:?}"),
        }

        // The adposition stays a bare invariant entry.
        assert!(matches!(
            table.get("με").unwrap(),
            InflectionEntry::Invariant { .. }
        ));
    }

    #[test]
    fn test_lexicon_from_persisted_table_matches_direct_run() {
        let dir = TempDir::new().unwrap();
        let corpus_path = dir.path().join("sample.conllu");
        fs::write(&corpus_path, sample_corpus()).unwrap();

        let inflections_path = dir.path().join("sample.inflections.json");
        let lexicon_path = dir.path().join("sample.lexicon.txt");

        let pipeline = LexiconPipeline::new();
        pipeline
            .run(&corpus_path, &inflections_path, &lexicon_path)
            .unwrap();
        let direct = fs::read_to_string(&lexicon_path).unwrap();

        // Rebuild from the persisted intermediate only.
        let table = storage::read_inflections(&inflections_path).unwrap();
        let rows = pipeline.infer(&table);
        let rebuilt = pipeline.render(&rows);

        assert_eq!(direct, rebuilt);
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let dir = TempDir::new().unwrap();
        let corpus_path = dir.path().join("sample.conllu");
        fs::write(&corpus_path, sample_corpus()).unwrap();

        let pipeline = LexiconPipeline::new();

        let first_lexicon = dir.path().join("first.lexicon.txt");
        let first_json = dir.path().join("first.inflections.json");
        pipeline
            .run(&corpus_path, &first_json, &first_lexicon)
            .unwrap();

        let second_lexicon = dir.path().join("second.lexicon.txt");
        let second_json = dir.path().join("second.inflections.json");
        pipeline
            .run(&corpus_path, &second_json, &second_lexicon)
            .unwrap();

        assert_eq!(
            fs::read(&first_lexicon).unwrap(),
            fs::read(&second_lexicon).unwrap()
        );
        assert_eq!(
            fs::read(&first_json).unwrap(),
            fs::read(&second_json).unwrap()
        );
    }

    #[test]
    fn test_missing_corpus_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = LexiconPipeline::new().run(
            &dir.path().join("absent.conllu"),
            &dir.path().join("out.json"),
            &dir.path().join("out.txt"),
        );
        assert!(result.is_err());
    }
}
