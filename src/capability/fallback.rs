//! Deterministic in-crate capability implementations.
//!
//! These stand in for the real ML models so the library works without any
//! model runtime and tests stay hermetic: a hash-projection sentence
//! embedder, a lead-sentence generator, and a stopword-filtered frequency
//! keyword model. Real model bindings implement the same traits.

use super::{Embedder, EmbedderProvider, Generator, GeneratorProvider, KeywordModel, PageSource};
use crate::error::Result;
use crate::model::PageBlock;
use crate::text;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// FNV-1a hash, used so embeddings are stable across runs and platforms.
fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in s.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Bag-of-words hash-projection embedder.
///
/// Each lowercase token is hashed into one of `dimension` buckets; the
/// resulting count vector is L2-normalized. Crude, but deterministic and
/// good enough for similarity ranking of sentences within one document.
pub struct HashEmbedder {
    dimension: usize,
}

impl Embedder for HashEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let vectors = texts
            .iter()
            .map(|text| {
                let mut v = vec![0.0f32; self.dimension];
                for token in text.split_whitespace() {
                    let token: String = token
                        .chars()
                        .filter(|c| c.is_alphanumeric())
                        .flat_map(|c| c.to_lowercase())
                        .collect();
                    if token.is_empty() {
                        continue;
                    }
                    let bucket = (fnv1a(&token) % self.dimension as u64) as usize;
                    v[bucket] += 1.0;
                }
                let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for x in v.iter_mut() {
                        *x /= norm;
                    }
                }
                v
            })
            .collect();
        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Provider for [`HashEmbedder`].
pub struct HashEmbedderProvider {
    dimension: usize,
}

impl HashEmbedderProvider {
    /// Create a provider with a custom vector width.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for HashEmbedderProvider {
    fn default() -> Self {
        Self { dimension: 64 }
    }
}

impl EmbedderProvider for HashEmbedderProvider {
    fn load(&self) -> Result<Box<dyn Embedder>> {
        debug!("loading hash-projection embedder (dim={})", self.dimension);
        Ok(Box::new(HashEmbedder {
            dimension: self.dimension,
        }))
    }
}

/// Lead-sentence generator.
///
/// Keeps whole sentences from the start of the input until the word budget
/// is spent. Not abstractive, but it honors the generation contract and is
/// fully deterministic.
pub struct LeadGenerator {
    max_input_chars: usize,
}

impl Generator for LeadGenerator {
    fn generate(&self, text: &str, max_words: usize) -> Result<String> {
        let sentences = text::split_sentences(text);
        let mut out: Vec<String> = Vec::new();
        let mut words = 0usize;
        for sentence in sentences {
            let sentence_words = text::word_count(&sentence);
            if !out.is_empty() && words + sentence_words > max_words {
                break;
            }
            words += sentence_words;
            out.push(sentence);
        }
        Ok(out.join(" "))
    }

    fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }
}

/// Provider for [`LeadGenerator`].
pub struct LeadGeneratorProvider {
    max_input_chars: usize,
}

impl LeadGeneratorProvider {
    /// Create a provider with a custom input context limit.
    pub fn new(max_input_chars: usize) -> Self {
        Self { max_input_chars }
    }
}

impl Default for LeadGeneratorProvider {
    fn default() -> Self {
        Self {
            max_input_chars: 32_768,
        }
    }
}

impl GeneratorProvider for LeadGeneratorProvider {
    fn load(&self) -> Result<Box<dyn Generator>> {
        debug!(
            "loading lead-sentence generator (context={} chars)",
            self.max_input_chars
        );
        Ok(Box::new(LeadGenerator {
            max_input_chars: self.max_input_chars,
        }))
    }
}

/// Common English stopwords filtered by the frequency keyword model.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "have", "this", "that", "with", "from", "they", "been", "were", "which",
    "their", "will", "would", "there", "these", "those", "then", "than", "them", "when", "where",
    "what", "while", "also", "such", "each", "more", "most", "some", "other", "into", "over",
    "only", "both", "between", "after", "before", "during", "under", "using", "used", "use",
    "based", "show", "shows", "shown", "well", "may", "its", "his", "she", "him", "how", "who",
    "does", "did", "about", "results", "result", "paper", "approach", "method", "propose",
    "proposed", "present",
];

/// Frequency-based keyword extractor with an English stopword list.
#[derive(Default)]
pub struct FrequencyKeywords;

impl KeywordModel for FrequencyKeywords {
    fn extract_keywords(&self, text: &str, top_n: usize) -> Result<Vec<String>> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for token in text.split_whitespace() {
            let token: String = token
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .flat_map(|c| c.to_lowercase())
                .collect();
            if token.chars().count() < 3 || !token.chars().any(|c| c.is_alphabetic()) {
                continue;
            }
            if STOPWORDS.contains(&token.as_str()) {
                continue;
            }
            match counts.get_mut(&token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.clone(), 1);
                    order.push(token);
                }
            }
        }

        // Stable sort keeps first-seen order among equally frequent terms.
        let mut ranked = order;
        ranked.sort_by_key(|t| std::cmp::Reverse(counts[t]));
        ranked.truncate(top_n);
        Ok(ranked)
    }
}

/// Page source over pre-extracted plain text.
///
/// Returns no page blocks, so segmentation yields an empty map and the
/// orchestrator takes the single-section fallback path with this text.
pub struct PlainTextSource {
    text: String,
}

impl PlainTextSource {
    /// Wrap already-extracted document text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PageSource for PlainTextSource {
    fn parse_pages(&self, _path: &Path) -> Result<Vec<PageBlock>> {
        Ok(Vec::new())
    }

    fn plain_text(&self, _path: &Path) -> Result<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_embedder_deterministic() {
        let provider = HashEmbedderProvider::default();
        let embedder = provider.load().unwrap();
        let texts = vec!["the model is trained".to_string()];
        let a = embedder.embed(&texts).unwrap();
        let b = embedder.embed(&texts).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].len(), 64);
    }

    #[test]
    fn test_hash_embedder_normalized() {
        let embedder = HashEmbedderProvider::default().load().unwrap();
        let v = embedder
            .embed(&["some words here".to_string()])
            .unwrap()
            .remove(0);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_hash_embedder_empty_text_is_zero_vector() {
        let embedder = HashEmbedderProvider::new(8).load().unwrap();
        let v = embedder.embed(&["".to_string()]).unwrap().remove(0);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_lead_generator_respects_budget() {
        let generator = LeadGeneratorProvider::default().load().unwrap();
        let text = "One two three four. Five six seven eight. Nine ten eleven twelve.";
        let out = generator.generate(text, 8).unwrap();
        assert_eq!(out, "One two three four. Five six seven eight.");
    }

    #[test]
    fn test_lead_generator_keeps_at_least_one_sentence() {
        let generator = LeadGeneratorProvider::default().load().unwrap();
        let out = generator.generate("A fairly long first sentence here.", 2).unwrap();
        assert_eq!(out, "A fairly long first sentence here.");
    }

    #[test]
    fn test_frequency_keywords_ranked_and_distinct() {
        let model = FrequencyKeywords;
        let text = "transformer transformer transformer attention attention encoder";
        let keywords = model.extract_keywords(text, 2).unwrap();
        assert_eq!(keywords, vec!["transformer", "attention"]);
    }

    #[test]
    fn test_frequency_keywords_skips_stopwords() {
        let model = FrequencyKeywords;
        let keywords = model
            .extract_keywords("the the the gradient descent", 5)
            .unwrap();
        assert!(!keywords.contains(&"the".to_string()));
        assert!(keywords.contains(&"gradient".to_string()));
    }

    #[test]
    fn test_plain_text_source() {
        let source = PlainTextSource::new("full document text");
        assert!(source.parse_pages(Path::new("x.pdf")).unwrap().is_empty());
        assert_eq!(
            source.plain_text(Path::new("x.pdf")).unwrap(),
            "full document text"
        );
    }
}
