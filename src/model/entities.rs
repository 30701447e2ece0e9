//! Extracted domain entities grouped by category.

use serde::{Deserialize, Serialize};

/// Entity categories recognized by the pattern engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Models,
    Datasets,
    Metrics,
    Frameworks,
    Techniques,
}

impl EntityCategory {
    /// All categories in canonical order.
    pub const ALL: [EntityCategory; 5] = [
        EntityCategory::Models,
        EntityCategory::Datasets,
        EntityCategory::Metrics,
        EntityCategory::Frameworks,
        EntityCategory::Techniques,
    ];

    /// Stable string form used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Models => "models",
            EntityCategory::Datasets => "datasets",
            EntityCategory::Metrics => "metrics",
            EntityCategory::Frameworks => "frameworks",
            EntityCategory::Techniques => "techniques",
        }
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities found in a document, always carrying all five categories.
///
/// Each category holds distinct surface strings ranked by in-text frequency
/// descending, capped at 15 per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub models: Vec<String>,
    pub datasets: Vec<String>,
    pub metrics: Vec<String>,
    pub frameworks: Vec<String>,
    pub techniques: Vec<String>,
}

impl EntityBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities for a category.
    pub fn get(&self, category: EntityCategory) -> &[String] {
        match category {
            EntityCategory::Models => &self.models,
            EntityCategory::Datasets => &self.datasets,
            EntityCategory::Metrics => &self.metrics,
            EntityCategory::Frameworks => &self.frameworks,
            EntityCategory::Techniques => &self.techniques,
        }
    }

    /// Replace the entities for a category.
    pub fn set(&mut self, category: EntityCategory, entities: Vec<String>) {
        match category {
            EntityCategory::Models => self.models = entities,
            EntityCategory::Datasets => self.datasets = entities,
            EntityCategory::Metrics => self.metrics = entities,
            EntityCategory::Frameworks => self.frameworks = entities,
            EntityCategory::Techniques => self.techniques = entities,
        }
    }

    /// Whether every category is empty.
    pub fn is_empty(&self) -> bool {
        EntityCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Total number of entities across all categories.
    pub fn total(&self) -> usize {
        EntityCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_always_has_five_keys() {
        let bundle = EntityBundle::new();
        let json = serde_json::to_value(&bundle).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for category in EntityCategory::ALL {
            assert!(obj.contains_key(category.as_str()));
        }
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut bundle = EntityBundle::new();
        bundle.set(EntityCategory::Models, vec!["BERT".into()]);
        assert_eq!(bundle.get(EntityCategory::Models), &["BERT".to_string()]);
        assert_eq!(bundle.total(), 1);
        assert!(!bundle.is_empty());
    }
}
