//! Hierarchical summarization pipeline.
//!
//! Per section: clean → extractive select → abstractive generate →
//! keyword extract. The two heavy models are loaded lazily right before
//! the stage that needs them and released immediately after, so at most
//! one is resident at any time. That bound is a correctness requirement
//! for memory-constrained deployment, not an optimization: the embedder
//! handle goes out of scope before the generator loads.

mod clean;
mod extractive;

pub use clean::TextCleaner;
pub use extractive::ExtractiveSelector;

use crate::capability::{EmbedderProvider, GeneratorProvider, KeywordModel};
use crate::error::Result;
use crate::model::{SectionLabel, SectionSummary};
use crate::text;
use log::{debug, warn};
use std::sync::Arc;

/// Tunable parameters for the summarization pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Fraction of quality sentences kept by the extractive stage.
    pub extractive_ratio: f32,
    /// Sections below this cleaned word count pass through verbatim.
    pub min_section_words: usize,
    /// Generation word budget for introduction and conclusion sections.
    pub long_target_words: usize,
    /// Generation word budget for all other sections.
    pub short_target_words: usize,
    /// Keywords per section summary.
    pub section_keywords: usize,
    /// Keywords for the document-level summary.
    pub overall_keywords: usize,
}

impl PipelineOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extractive selection ratio.
    pub fn with_extractive_ratio(mut self, ratio: f32) -> Self {
        self.extractive_ratio = ratio;
        self
    }

    /// Set the verbatim pass-through threshold in words.
    pub fn with_min_section_words(mut self, words: usize) -> Self {
        self.min_section_words = words;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            extractive_ratio: 0.4,
            min_section_words: 50,
            long_target_words: 200,
            short_target_words: 150,
            section_keywords: 5,
            overall_keywords: 10,
        }
    }
}

/// Summarization pipeline owning its model providers.
///
/// Instances are independent: each owns its capability providers and
/// never shares loaded model handles, so separate pipelines can run on
/// separate documents concurrently.
pub struct SummarizationPipeline {
    embedder: Arc<dyn EmbedderProvider>,
    generator: Arc<dyn GeneratorProvider>,
    keywords: Option<Arc<dyn KeywordModel>>,
    cleaner: TextCleaner,
    options: PipelineOptions,
}

impl SummarizationPipeline {
    /// Create a pipeline from embedding and generation providers.
    pub fn new(embedder: Arc<dyn EmbedderProvider>, generator: Arc<dyn GeneratorProvider>) -> Self {
        Self {
            embedder,
            generator,
            keywords: None,
            cleaner: TextCleaner::new(),
            options: PipelineOptions::default(),
        }
    }

    /// Create a pipeline backed by the deterministic in-crate fallbacks.
    pub fn with_fallbacks() -> Self {
        use crate::capability::{FrequencyKeywords, HashEmbedderProvider, LeadGeneratorProvider};
        Self::new(
            Arc::new(HashEmbedderProvider::default()),
            Arc::new(LeadGeneratorProvider::default()),
        )
        .with_keyword_model(Arc::new(FrequencyKeywords))
    }

    /// Attach an optional keyword capability.
    pub fn with_keyword_model(mut self, model: Arc<dyn KeywordModel>) -> Self {
        self.keywords = Some(model);
        self
    }

    /// Set pipeline options.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Clean section text without summarizing (also the degradation path).
    pub fn clean_text(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    /// Summarize one section.
    ///
    /// Sections whose cleaned text is under the word threshold come back
    /// verbatim with no keywords: summarization adds no value on thin
    /// content.
    pub fn summarize_section(&self, text: &str, label: SectionLabel) -> Result<SectionSummary> {
        debug!("summarizing {}", label);
        let cleaned = self.cleaner.clean(text);

        if text::word_count(&cleaned) < self.options.min_section_words {
            return Ok(SectionSummary::verbatim(label, cleaned));
        }

        // Extractive stage: the embedder lives only inside this block and
        // is released before the generator is loaded.
        let extractive = {
            let embedder = self.embedder.load()?;
            let selector = ExtractiveSelector::new(self.options.extractive_ratio);
            let selected = selector.select(&cleaned, &*embedder)?;
            debug!("releasing embedding model");
            selected
        };

        let target_words = match label {
            SectionLabel::Introduction | SectionLabel::Conclusion => self.options.long_target_words,
            _ => self.options.short_target_words,
        };

        let generated = {
            let generator = self.generator.load()?;
            let input = text::truncate_chars(&extractive, generator.max_input_chars());
            let output = generator.generate(&input, target_words)?;
            debug!("releasing generation model");
            output
        };

        let summary = polish_summary(&generated);
        let keywords = self.extract_keywords(&summary, self.options.section_keywords);

        Ok(SectionSummary {
            label,
            summary,
            keywords,
        })
    }

    /// Derive the document-level summary and keywords from the per-section
    /// summaries, in their encounter order.
    pub fn overall_summary(&self, sections: &[SectionSummary]) -> (String, Vec<String>) {
        let combined = sections
            .iter()
            .map(|s| s.summary.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = self.extract_keywords(&combined, self.options.overall_keywords);
        (combined, keywords)
    }

    /// Run the keyword capability, degrading to an empty list when it is
    /// absent or fails.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        let model = match &self.keywords {
            Some(model) => model,
            None => return Vec::new(),
        };
        if text.trim().is_empty() {
            return Vec::new();
        }
        match model.extract_keywords(text, top_n) {
            Ok(keywords) => keywords,
            Err(e) => {
                warn!("keyword extraction failed: {e}");
                Vec::new()
            }
        }
    }
}

/// Drop a trailing incomplete fragment and ensure terminal punctuation.
fn polish_summary(summary: &str) -> String {
    let mut parts: Vec<&str> = summary.split('.').collect();
    if parts.len() > 1 {
        if let Some(last) = parts.last() {
            if last.trim().chars().count() < 10 {
                parts.pop();
            }
        }
    }
    let mut polished = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(". ");
    if !polished.is_empty() && !polished.ends_with('.') {
        polished.push('.');
    }
    polished
}
