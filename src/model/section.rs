//! Section labels and the ordered section map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical section categories for research papers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLabel {
    Abstract,
    Introduction,
    RelatedWork,
    Methodology,
    Experiments,
    Results,
    Discussion,
    Conclusion,
    References,
}

impl SectionLabel {
    /// All labels in canonical order.
    pub const ALL: [SectionLabel; 9] = [
        SectionLabel::Abstract,
        SectionLabel::Introduction,
        SectionLabel::RelatedWork,
        SectionLabel::Methodology,
        SectionLabel::Experiments,
        SectionLabel::Results,
        SectionLabel::Discussion,
        SectionLabel::Conclusion,
        SectionLabel::References,
    ];

    /// Stable string form used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Abstract => "abstract",
            SectionLabel::Introduction => "introduction",
            SectionLabel::RelatedWork => "related_work",
            SectionLabel::Methodology => "methodology",
            SectionLabel::Experiments => "experiments",
            SectionLabel::Results => "results",
            SectionLabel::Discussion => "discussion",
            SectionLabel::Conclusion => "conclusion",
            SectionLabel::References => "references",
        }
    }
}

impl std::fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered map from section label to concatenated section text.
///
/// Preserves first-seen order for deterministic downstream iteration.
/// Appending to an existing label space-joins the new text onto the
/// accumulated content.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    order: Vec<SectionLabel>,
    texts: HashMap<SectionLabel, String>,
}

impl SectionMap {
    /// Create an empty section map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to a section, creating it if absent.
    pub fn append(&mut self, label: SectionLabel, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        match self.texts.get_mut(&label) {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(text);
            }
            None => {
                self.order.push(label);
                self.texts.insert(label, text.to_string());
            }
        }
    }

    /// Get the text of a section.
    pub fn get(&self, label: SectionLabel) -> Option<&str> {
        self.texts.get(&label).map(|s| s.as_str())
    }

    /// Whether the map contains a section.
    pub fn contains(&self, label: SectionLabel) -> bool {
        self.texts.contains_key(&label)
    }

    /// Remove a section, preserving the order of the rest.
    pub fn remove(&mut self, label: SectionLabel) -> Option<String> {
        self.order.retain(|l| *l != label);
        self.texts.remove(&label)
    }

    /// Iterate over sections in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionLabel, &str)> {
        self.order
            .iter()
            .filter_map(|label| self.texts.get(label).map(|t| (*label, t.as_str())))
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> Vec<SectionLabel> {
        self.order.clone()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map has no sections.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Space-join all section texts in order.
    pub fn joined_text(&self) -> String {
        self.iter().map(|(_, t)| t).collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serde_snake_case() {
        let json = serde_json::to_string(&SectionLabel::RelatedWork).unwrap();
        assert_eq!(json, "\"related_work\"");
        let back: SectionLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SectionLabel::RelatedWork);
    }

    #[test]
    fn test_append_preserves_first_seen_order() {
        let mut map = SectionMap::new();
        map.append(SectionLabel::Methodology, "first");
        map.append(SectionLabel::Introduction, "intro");
        map.append(SectionLabel::Methodology, "second");

        assert_eq!(
            map.labels(),
            vec![SectionLabel::Methodology, SectionLabel::Introduction]
        );
        assert_eq!(map.get(SectionLabel::Methodology), Some("first second"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map = SectionMap::new();
        map.append(SectionLabel::Introduction, "a");
        map.append(SectionLabel::References, "b");
        map.append(SectionLabel::Conclusion, "c");

        map.remove(SectionLabel::References);
        assert_eq!(
            map.labels(),
            vec![SectionLabel::Introduction, SectionLabel::Conclusion]
        );
        assert!(!map.contains(SectionLabel::References));
    }

    #[test]
    fn test_empty_text_ignored() {
        let mut map = SectionMap::new();
        map.append(SectionLabel::Abstract, "   ");
        assert!(map.is_empty());
    }

    #[test]
    fn test_joined_text() {
        let mut map = SectionMap::new();
        map.append(SectionLabel::Abstract, "one");
        map.append(SectionLabel::Results, "two");
        assert_eq!(map.joined_text(), "one two");
    }
}
