//! Inflectional-class tables for Modern Greek.
//!
//! Each POS gets an ordered priority list of `(tag, candidate endings)`
//! pairs; the first class with an ending matching the lemma wins, so overlap
//! between later classes is harmless. The tables are immutable configuration
//! built once at startup and passed into the inferencer explicitly.
//!
//! Class inventory follows the standard school grammar: verb conjugations A,
//! B1, B2 and passives; noun declensions by gender and ending; the common
//! adjective paradigms.

/// One inflectional class: tag plus the lemma endings that select it.
#[derive(Debug, Clone)]
pub struct SuffixClass {
    /// Class subtag, e.g. `masc-ος` or `b1`.
    pub tag: String,
    /// Candidate lemma endings, matched against the raw (accented) lemma.
    pub endings: Vec<String>,
}

impl SuffixClass {
    /// Create a class from string literals.
    pub fn new(tag: &str, endings: &[&str]) -> Self {
        SuffixClass {
            tag: tag.to_string(),
            endings: endings.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// True when the lemma carries one of this class's endings.
    pub fn matches(&self, lemma: &str) -> bool {
        self.endings.iter().any(|ending| lemma.ends_with(ending.as_str()))
    }
}

/// An ordered class list for one POS. First match wins.
#[derive(Debug, Clone)]
pub struct ClassTable {
    classes: Vec<SuffixClass>,
}

impl ClassTable {
    /// Create a table from classes in priority order.
    pub fn new(classes: Vec<SuffixClass>) -> Self {
        ClassTable { classes }
    }

    /// The classes, in priority order.
    pub fn classes(&self) -> &[SuffixClass] {
        &self.classes
    }

    /// Match the lemma's ending against the classes in declaration order.
    pub fn classify(&self, lemma: &str) -> Option<&str> {
        self.classes
            .iter()
            .find(|class| class.matches(lemma))
            .map(|class| class.tag.as_str())
    }
}

/// The full suffix-class configuration: per-POS class tables plus the
/// lemma-ending list used by the stem fallback.
#[derive(Debug, Clone)]
pub struct MorphClasses {
    verb: ClassTable,
    noun: ClassTable,
    adj: ClassTable,
    lemma_suffixes: Vec<String>,
}

impl MorphClasses {
    /// The Modern Greek class inventory.
    pub fn modern_greek() -> Self {
        // Verb lemmas are first person singular present. Conjugations B1/B2
        // are checked before A so the accented endings win over bare -ω.
        let verb = ClassTable::new(vec![
            SuffixClass::new("b1", &["άω", "έω"]),
            SuffixClass::new("b2", &["ώ"]),
            SuffixClass::new("a", &["ω"]),
            SuffixClass::new("παθ", &["άμαι", "ώμαι", "ομαι", "ται"]),
        ]);

        // Gender-variable (pro)noun lemmas are masculine singular.
        let noun = ClassTable::new(vec![
            SuffixClass::new("masc-ος", &["ος"]),
            SuffixClass::new("masc-ας", &["ας"]),
            SuffixClass::new("masc-ης", &["ης", "ής"]),
            SuffixClass::new("neut-μα", &["μα"]),
            SuffixClass::new("neut-ι", &["ι", "ός"]),
            SuffixClass::new("neut-ο", &["ο", "ό"]),
            SuffixClass::new("fem-α", &["α"]),
            SuffixClass::new("fem-η", &["η", "ή"]),
        ]);

        // Adjective lemmas are masculine singular.
        let adj = ClassTable::new(vec![
            SuffixClass::new("ός", &["ρός", "νός", "ακός", "ικός", "ός"]),
            SuffixClass::new("ος", &["ινος", "ιος", "ος"]),
            SuffixClass::new("ής", &["ής"]),
            SuffixClass::new("ης", &["ης"]),
            SuffixClass::new("ύς", &["ύς"]),
        ]);

        let lemma_suffixes = [
            "αω", "εω", "αμαι", "ωμαι", "ομαι", "ος", "ης", "ας", "μα", "ιο", "α", "η", "ο", "ω",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        MorphClasses {
            verb,
            noun,
            adj,
            lemma_suffixes,
        }
    }

    /// The class table for a POS, if it has one. Nouns and pronouns share
    /// their endings; proper nouns have no table and always fall back.
    pub fn table_for(&self, pos: &str) -> Option<&ClassTable> {
        match pos {
            "VERB" => Some(&self.verb),
            "NOUN" | "PRON" => Some(&self.noun),
            "ADJ" => Some(&self.adj),
            _ => None,
        }
    }

    /// Lemma endings stripped by the stem fallback, in priority order.
    /// Matched against the normalized (τόνος-less) lemma.
    pub fn lemma_suffixes(&self) -> &[String] {
        &self.lemma_suffixes
    }
}

impl Default for MorphClasses {
    fn default() -> Self {
        Self::modern_greek()
    }
}
