//! Section keyword table for header classification.

use crate::model::SectionLabel;
use regex::Regex;

/// A synonym phrase with its precompiled whole-word matcher.
struct Synonym {
    phrase: String,
    word_re: Regex,
}

/// Immutable table mapping section labels to synonym phrases.
///
/// Declaration order is the tie-break policy: the first label whose any
/// synonym matches wins. Construct with [`SectionKeywordTable::default`]
/// for the full table, or [`SectionKeywordTable::new`] with a reduced one
/// for tests.
pub struct SectionKeywordTable {
    entries: Vec<(SectionLabel, Vec<Synonym>)>,
    numeric_prefix: Regex,
    roman_prefix: Regex,
}

impl SectionKeywordTable {
    /// Build a table from `(label, synonyms)` pairs in match-priority order.
    pub fn new(entries: Vec<(SectionLabel, Vec<String>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(label, phrases)| {
                let synonyms = phrases
                    .into_iter()
                    .map(|phrase| {
                        let word_re =
                            Regex::new(&format!(r"\b{}\b", regex::escape(&phrase)))
                                .expect("escaped phrase is a valid regex");
                        Synonym { phrase, word_re }
                    })
                    .collect();
                (label, synonyms)
            })
            .collect();

        Self {
            entries,
            numeric_prefix: Regex::new(r"^\d+\.?\s*").expect("valid regex"),
            // Roman numerals must be delimited by a dot or whitespace so
            // words like "introduction" keep their leading letters.
            roman_prefix: Regex::new(r"^[ivxlcdm]+(?:\.\s*|\s+)").expect("valid regex"),
        }
    }

    /// Match a heading text to a section label.
    ///
    /// Lowercases, strips leading numeric and roman-numeral prefixes, then
    /// checks prefix, exact, and whole-word matches against each synonym in
    /// declaration order.
    pub fn match_heading(&self, text: &str) -> Option<SectionLabel> {
        let lower = text.to_lowercase();
        let stripped = self.numeric_prefix.replace(lower.trim(), "");
        let stripped = self.roman_prefix.replace(&stripped, "");
        let clean = stripped.trim();
        if clean.is_empty() {
            return None;
        }

        for (label, synonyms) in &self.entries {
            for synonym in synonyms {
                if clean.starts_with(synonym.phrase.as_str())
                    || clean == synonym.phrase
                    || synonym.word_re.is_match(clean)
                {
                    return Some(*label);
                }
            }
        }
        None
    }

    /// Number of labels in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SectionKeywordTable {
    fn default() -> Self {
        let owned = |phrases: &[&str]| phrases.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        Self::new(vec![
            (SectionLabel::Abstract, owned(&["abstract"])),
            (
                SectionLabel::Introduction,
                owned(&["introduction", "background"]),
            ),
            (
                SectionLabel::RelatedWork,
                owned(&[
                    "related work",
                    "literature review",
                    "prior work",
                    "previous work",
                ]),
            ),
            (
                SectionLabel::Methodology,
                owned(&[
                    "method",
                    "methodology",
                    "approach",
                    "model",
                    "architecture",
                    "proposed method",
                    "proposed approach",
                    "our approach",
                    "our method",
                ]),
            ),
            (
                SectionLabel::Experiments,
                owned(&[
                    "experiment",
                    "experimental setup",
                    "experimental results",
                    "experimental design",
                    "evaluation setup",
                ]),
            ),
            (
                SectionLabel::Results,
                owned(&["results", "findings", "performance", "experimental results"]),
            ),
            (
                SectionLabel::Discussion,
                owned(&["discussion", "analysis", "ablation study", "ablation studies"]),
            ),
            (
                SectionLabel::Conclusion,
                owned(&[
                    "conclusion",
                    "conclusions",
                    "concluding remarks",
                    "future work",
                    "summary",
                    "limitations",
                ]),
            ),
            (
                SectionLabel::References,
                owned(&["references", "bibliography", "works cited"]),
            ),
        ])
    }
}
