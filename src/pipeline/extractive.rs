//! Extractive sentence selection by similarity to the document centroid.

use crate::capability::Embedder;
use crate::error::{Error, Result};
use crate::text;
use log::debug;

/// Minimum sentence length (exclusive) to count as a quality sentence.
const MIN_QUALITY_CHARS: usize = 30;
/// Maximum sentence length (exclusive) to count as a quality sentence.
const MAX_QUALITY_CHARS: usize = 500;
/// Minimum word count for a quality sentence.
const MIN_QUALITY_WORDS: usize = 5;
/// Floor on the number of selected sentences.
const MIN_SELECTED: usize = 3;

/// Similarity-ranked extractive selector.
pub struct ExtractiveSelector {
    ratio: f32,
}

impl ExtractiveSelector {
    /// Create a selector keeping roughly `ratio` of the quality sentences.
    pub fn new(ratio: f32) -> Self {
        Self { ratio }
    }

    /// Select the most central sentences, reassembled in original order.
    ///
    /// Sentences are scored by cosine similarity to the mean embedding of
    /// all quality sentences. Selection never reorders by score: the
    /// narrative flow of the source is preserved. Texts with fewer than 3
    /// sentences, or no quality sentences, pass through unchanged.
    pub fn select(&self, clean_text: &str, embedder: &dyn Embedder) -> Result<String> {
        let sentences = text::split_sentences(clean_text);
        if sentences.len() < 3 {
            return Ok(clean_text.to_string());
        }

        let quality: Vec<String> = sentences
            .into_iter()
            .filter(|s| {
                let chars = s.chars().count();
                chars > MIN_QUALITY_CHARS
                    && chars < MAX_QUALITY_CHARS
                    && text::word_count(s) >= MIN_QUALITY_WORDS
            })
            .collect();
        if quality.is_empty() {
            return Ok(clean_text.to_string());
        }

        let embeddings = embedder.embed(&quality)?;
        if embeddings.len() != quality.len() {
            return Err(Error::Embedding(format!(
                "embedder returned {} vectors for {} sentences",
                embeddings.len(),
                quality.len()
            )));
        }
        let centroid = mean_embedding(&embeddings);
        let scores: Vec<f32> = embeddings
            .iter()
            .map(|e| cosine_similarity(e, &centroid))
            .collect();

        let n_select = ((self.ratio * quality.len() as f32).ceil() as usize)
            .max(MIN_SELECTED)
            .min(quality.len());

        let mut ranked: Vec<usize> = (0..quality.len()).collect();
        ranked.sort_by(|a, b| {
            scores[*b]
                .partial_cmp(&scores[*a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut selected: Vec<usize> = ranked.into_iter().take(n_select).collect();
        selected.sort_unstable();

        debug!(
            "extractive selection: kept {}/{} quality sentences",
            selected.len(),
            quality.len()
        );

        let picked: Vec<&str> = selected.iter().map(|i| quality[*i].as_str()).collect();
        Ok(picked.join(" "))
    }
}

/// Component-wise mean of a batch of vectors.
fn mean_embedding(embeddings: &[Vec<f32>]) -> Vec<f32> {
    let dim = embeddings.first().map(|e| e.len()).unwrap_or(0);
    let mut mean = vec![0.0f32; dim];
    for embedding in embeddings {
        for (m, x) in mean.iter_mut().zip(embedding.iter()) {
            *m += x;
        }
    }
    let n = embeddings.len() as f32;
    for m in mean.iter_mut() {
        *m /= n;
    }
    mean
}

/// Cosine similarity; 0.0 when either vector has zero norm.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
