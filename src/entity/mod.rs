//! Pattern-based entity extraction and validation.
//!
//! Pure regex and string operations over the document text: no model
//! involvement, so extraction is deterministic and infallible.

mod patterns;

pub use patterns::EntityPatternSet;

use crate::model::EntityBundle;
use std::collections::HashSet;

/// Maximum entities kept per category.
const MAX_PER_CATEGORY: usize = 15;

/// Stateless entity extraction engine.
pub struct EntityEngine {
    patterns: EntityPatternSet,
}

impl EntityEngine {
    /// Create an engine with the full default pattern library.
    pub fn new() -> Self {
        Self {
            patterns: EntityPatternSet::default(),
        }
    }

    /// Create an engine with a custom pattern set.
    pub fn with_patterns(patterns: EntityPatternSet) -> Self {
        Self { patterns }
    }

    /// Extract entities from text.
    ///
    /// Matches are validated, deduplicated per category, ranked by raw
    /// substring frequency in the source text (descending, first-seen
    /// order on ties), and capped at 15 per category. All five categories
    /// are always present in the result.
    pub fn extract(&self, text: &str) -> EntityBundle {
        let mut bundle = EntityBundle::new();

        for (category, patterns) in self.patterns.iter() {
            let mut seen: HashSet<String> = HashSet::new();
            let mut entities: Vec<String> = Vec::new();

            for pattern in patterns {
                for m in pattern.find_iter(text) {
                    let entity = m.as_str().trim();
                    if !validate_entity(entity) {
                        continue;
                    }
                    if seen.insert(entity.to_string()) {
                        entities.push(entity.to_string());
                    }
                }
            }

            // Stable sort: ties keep first-seen order.
            entities.sort_by_key(|e| std::cmp::Reverse(text.matches(e.as_str()).count()));
            entities.truncate(MAX_PER_CATEGORY);
            bundle.set(category, entities);
        }

        bundle
    }
}

impl Default for EntityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a captured surface string.
///
/// Accepts strings of 2..=50 characters containing at least one letter
/// with punctuation density at most 30%.
fn validate_entity(entity: &str) -> bool {
    let len = entity.chars().count();
    if !(2..=50).contains(&len) {
        return false;
    }
    if !entity.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    let punctuation = entity.chars().filter(|c| c.is_ascii_punctuation()).count();
    punctuation as f32 / len as f32 <= 0.3
}
