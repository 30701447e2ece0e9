//! Summary records: per-section and document-level.

use super::{EntityBundle, Flowchart, SectionLabel};
use serde::{Deserialize, Serialize};

/// Summary of a single section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    /// Which section this summarizes.
    pub label: SectionLabel,
    /// Abstractive summary text, or the cleaned original text for sections
    /// below the summarization threshold.
    pub summary: String,
    /// Up to 5 keywords; empty when the section was passed through verbatim
    /// or the keyword capability is unavailable.
    pub keywords: Vec<String>,
}

impl SectionSummary {
    /// Create a pass-through summary with no keywords.
    pub fn verbatim(label: SectionLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            summary: text.into(),
            keywords: Vec::new(),
        }
    }
}

/// Aggregate summary record for one document.
///
/// This is the sole artifact handed to persistence and API layers; its
/// serialized shape is stable for JSON round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSummary {
    /// Concatenation of per-section summaries in discovery order.
    pub overall_summary: String,
    /// Up to 10 document-level keywords.
    pub overall_keywords: Vec<String>,
    /// Per-section summaries in discovery order.
    pub sections: Vec<SectionSummary>,
    /// Extracted domain entities.
    pub entities: EntityBundle,
    /// Process flowchart from the methodology section, when one was found.
    pub methodology_flowchart: Option<Flowchart>,
    /// Section labels in discovery order.
    pub sections_found: Vec<SectionLabel>,
    /// Word count of the full original text.
    pub num_words_original: usize,
    /// Word count of the overall summary.
    pub num_words_summary: usize,
}

impl PaperSummary {
    /// Compression ratio as a percentage: `(1 - summary/original) * 100`.
    ///
    /// Returns 0.0 when the original is empty (non-empty input always has
    /// `num_words_original > 0`).
    pub fn compression_ratio(&self) -> f64 {
        if self.num_words_original == 0 {
            return 0.0;
        }
        (1.0 - self.num_words_summary as f64 / self.num_words_original as f64) * 100.0
    }

    /// Look up the summary for a section.
    pub fn section(&self, label: SectionLabel) -> Option<&SectionSummary> {
        self.sections.iter().find(|s| s.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaperSummary {
        PaperSummary {
            overall_summary: "A summary.".into(),
            overall_keywords: vec!["model".into()],
            sections: vec![SectionSummary {
                label: SectionLabel::Introduction,
                summary: "A summary.".into(),
                keywords: vec!["intro".into()],
            }],
            entities: EntityBundle::new(),
            methodology_flowchart: None,
            sections_found: vec![SectionLabel::Introduction],
            num_words_original: 1000,
            num_words_summary: 250,
        }
    }

    #[test]
    fn test_compression_ratio() {
        let summary = sample();
        assert!((summary.compression_ratio() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compression_ratio_empty_original() {
        let mut summary = sample();
        summary.num_words_original = 0;
        assert_eq!(summary.compression_ratio(), 0.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let summary = sample();
        let json = serde_json::to_string_pretty(&summary).unwrap();
        let back: PaperSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn test_section_lookup() {
        let summary = sample();
        assert!(summary.section(SectionLabel::Introduction).is_some());
        assert!(summary.section(SectionLabel::Results).is_none());
    }
}
