//! # paperdigest
//!
//! Layout-aware structuring and multi-stage summarization for research
//! papers.
//!
//! The library turns a parsed paper into a structured, multi-level
//! summary: detected sections, per-section summaries and keywords,
//! extracted domain entities (models, datasets, metrics, frameworks),
//! and an optional methodology flowchart.
//!
//! PDF byte-level parsing and the ML models are external capabilities
//! behind traits; deterministic fallbacks ship in-crate so the library
//! works without any model runtime.
//!
//! ## Quick Start
//!
//! ```
//! use paperdigest::{PaperDigest, PlainTextSource};
//! use std::sync::Arc;
//!
//! fn main() -> paperdigest::Result<()> {
//!     let text = "We study summarization. ".repeat(40);
//!     let summarizer = PaperDigest::new()
//!         .build(Arc::new(PlainTextSource::new(text)));
//!
//!     let record = summarizer.summarize("paper.pdf")?;
//!     println!("{}% compression", record.compression_ratio());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Section Segmenter**: font-statistics-driven header detection over
//!   page blocks, producing named sections
//! - **Summarization Pipeline**: clean → extractive select → abstractive
//!   generate → keyword extract, with at most one heavy model resident
//! - **Entity Pattern Engine**: validated regex extraction of models,
//!   datasets, metrics, and frameworks
//! - **Flowchart Extractor**: heuristic process steps from methodology
//!   text, assembled into a linear directed graph

pub mod capability;
pub mod entity;
pub mod error;
pub mod flowchart;
pub mod model;
pub mod pipeline;
pub mod segment;

mod summarizer;
mod text;

// Re-export commonly used types
pub use capability::{
    Embedder, EmbedderProvider, FrequencyKeywords, Generator, GeneratorProvider,
    HashEmbedderProvider, KeywordModel, LeadGeneratorProvider, PageSource, PlainTextSource,
};
pub use entity::{EntityEngine, EntityPatternSet};
pub use error::{Error, Result};
pub use flowchart::FlowchartExtractor;
pub use model::{
    BoundingBox, EntityBundle, EntityCategory, FlowEdge, FlowNode, Flowchart, NodeKind, PageBlock,
    PaperSummary, SectionLabel, SectionMap, SectionSummary,
};
pub use pipeline::{PipelineOptions, SummarizationPipeline, TextCleaner};
pub use segment::{SectionKeywordTable, SectionSegmenter, SegmentOptions};
pub use summarizer::{summarize_batch, PaperSummarizer};

use std::sync::Arc;

/// Builder for a configured [`PaperSummarizer`].
///
/// # Example
///
/// ```
/// use paperdigest::{PaperDigest, PipelineOptions, PlainTextSource};
/// use std::sync::Arc;
///
/// let summarizer = PaperDigest::new()
///     .with_pipeline_options(PipelineOptions::new().with_extractive_ratio(0.5))
///     .build(Arc::new(PlainTextSource::new("document text")));
/// ```
pub struct PaperDigest {
    embedder: Arc<dyn EmbedderProvider>,
    generator: Arc<dyn GeneratorProvider>,
    keywords: Option<Arc<dyn KeywordModel>>,
    pipeline_options: PipelineOptions,
    segment_options: SegmentOptions,
}

impl PaperDigest {
    /// Create a builder with the deterministic fallback capabilities.
    pub fn new() -> Self {
        Self {
            embedder: Arc::new(HashEmbedderProvider::default()),
            generator: Arc::new(LeadGeneratorProvider::default()),
            keywords: Some(Arc::new(FrequencyKeywords)),
            pipeline_options: PipelineOptions::default(),
            segment_options: SegmentOptions::default(),
        }
    }

    /// Set the embedding capability provider.
    pub fn with_embedder(mut self, provider: Arc<dyn EmbedderProvider>) -> Self {
        self.embedder = provider;
        self
    }

    /// Set the generation capability provider.
    pub fn with_generator(mut self, provider: Arc<dyn GeneratorProvider>) -> Self {
        self.generator = provider;
        self
    }

    /// Set the keyword capability.
    pub fn with_keyword_model(mut self, model: Arc<dyn KeywordModel>) -> Self {
        self.keywords = Some(model);
        self
    }

    /// Run without a keyword capability; keyword lists come back empty.
    pub fn without_keywords(mut self) -> Self {
        self.keywords = None;
        self
    }

    /// Set summarization pipeline options.
    pub fn with_pipeline_options(mut self, options: PipelineOptions) -> Self {
        self.pipeline_options = options;
        self
    }

    /// Set segmentation options.
    pub fn with_segment_options(mut self, options: SegmentOptions) -> Self {
        self.segment_options = options;
        self
    }

    /// Build a summarizer over the given page source.
    pub fn build(self, source: Arc<dyn PageSource>) -> PaperSummarizer {
        let mut pipeline = SummarizationPipeline::new(self.embedder, self.generator)
            .with_options(self.pipeline_options);
        if let Some(keywords) = self.keywords {
            pipeline = pipeline.with_keyword_model(keywords);
        }
        PaperSummarizer::new(source)
            .with_pipeline(pipeline)
            .with_segmenter(SectionSegmenter::new().with_options(self.segment_options))
    }
}

impl Default for PaperDigest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let digest = PaperDigest::new();
        assert!(digest.keywords.is_some());
        assert_eq!(digest.pipeline_options.extractive_ratio, 0.4);
    }

    #[test]
    fn test_builder_without_keywords() {
        let digest = PaperDigest::new().without_keywords();
        assert!(digest.keywords.is_none());
    }

    #[test]
    fn test_builder_produces_working_summarizer() {
        let text = "This sentence describes the study setting in enough words. ".repeat(10);
        let summarizer = PaperDigest::new().build(Arc::new(PlainTextSource::new(text)));
        let record = summarizer.summarize("doc.pdf").unwrap();
        assert!(record.num_words_original > 0);
        assert!(record.num_words_summary <= record.num_words_original);
    }
}
