//! Document-level orchestration.
//!
//! Composes the segmenter, entity engine, summarization pipeline, and
//! flowchart extractor into one `summarize` call producing a
//! [`PaperSummary`] per document.

use crate::capability::PageSource;
use crate::entity::EntityEngine;
use crate::error::{Error, Result};
use crate::flowchart::FlowchartExtractor;
use crate::model::{PaperSummary, SectionLabel, SectionMap, SectionSummary};
use crate::pipeline::SummarizationPipeline;
use crate::segment::SectionSegmenter;
use crate::text;
use log::{info, warn};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// End-to-end research paper summarizer.
///
/// Processing of a single document is strictly sequential: each stage
/// consumes the previous stage's output, and the pipeline's model
/// residency bound forbids overlapping section work. For many documents,
/// use [`summarize_batch`] with one summarizer per worker.
pub struct PaperSummarizer {
    source: Arc<dyn PageSource>,
    segmenter: SectionSegmenter,
    entities: EntityEngine,
    flowchart: FlowchartExtractor,
    pipeline: SummarizationPipeline,
}

impl PaperSummarizer {
    /// Create a summarizer with default components over a page source.
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            segmenter: SectionSegmenter::new(),
            entities: EntityEngine::new(),
            flowchart: FlowchartExtractor::new(),
            pipeline: SummarizationPipeline::with_fallbacks(),
        }
    }

    /// Replace the summarization pipeline.
    pub fn with_pipeline(mut self, pipeline: SummarizationPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Replace the section segmenter.
    pub fn with_segmenter(mut self, segmenter: SectionSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the entity engine.
    pub fn with_entity_engine(mut self, entities: EntityEngine) -> Self {
        self.entities = entities;
        self
    }

    /// Summarize one document.
    ///
    /// A failure in a single section's summarization does not abort the
    /// document: the section degrades to its cleaned text with no
    /// keywords and processing continues. Only a document with no
    /// extractable text at all produces an error, reported with the
    /// document identifier.
    pub fn summarize(&self, path: impl AsRef<Path>) -> Result<PaperSummary> {
        let path = path.as_ref();
        let doc_id = path.display().to_string();
        info!("processing {}", doc_id);

        let sections = self.load_sections(path, &doc_id)?;
        info!(
            "sections found: {}",
            sections
                .labels()
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let full_text = sections.joined_text();
        let entities = self.entities.extract(&full_text);

        let mut summaries: Vec<SectionSummary> = Vec::with_capacity(sections.len());
        for (label, section_text) in sections.iter() {
            if label == SectionLabel::References {
                continue;
            }
            let summary = match self.pipeline.summarize_section(section_text, label) {
                Ok(summary) => summary,
                Err(e) => {
                    warn!("section {} degraded: {}", label, e);
                    SectionSummary::verbatim(label, self.pipeline.clean_text(section_text))
                }
            };
            summaries.push(summary);
        }

        let (overall_summary, overall_keywords) = self.pipeline.overall_summary(&summaries);

        // The flowchart reads the original methodology text, not its summary.
        let methodology_flowchart = sections
            .get(SectionLabel::Methodology)
            .and_then(|t| self.flowchart.extract(t));

        let num_words_original = text::word_count(&full_text);
        let num_words_summary = text::word_count(&overall_summary);

        let record = PaperSummary {
            overall_summary,
            overall_keywords,
            sections: summaries,
            entities,
            methodology_flowchart,
            sections_found: sections.labels(),
            num_words_original,
            num_words_summary,
        };
        info!(
            "summarized {}: {:.1}% compression",
            doc_id,
            record.compression_ratio()
        );
        Ok(record)
    }

    /// Segment the document, falling back to a single undivided
    /// `introduction` section from plain-text extraction.
    fn load_sections(&self, path: &Path, doc_id: &str) -> Result<SectionMap> {
        let blocks = match self.source.parse_pages(path) {
            Ok(blocks) => blocks,
            Err(e) => {
                warn!("page parse failed for {}: {}; using plain text", doc_id, e);
                Vec::new()
            }
        };

        let mut sections = self.segmenter.segment(&blocks);
        if sections.is_empty() {
            warn!("layout segmentation empty for {}; falling back", doc_id);
            let raw = self
                .source
                .plain_text(path)
                .map_err(|e| Error::document(doc_id, e.to_string()))?;
            if raw.trim().is_empty() {
                return Err(Error::document(doc_id, "no extractable text"));
            }
            sections.append(SectionLabel::Introduction, &raw);
        }
        Ok(sections)
    }
}

/// Summarize many documents in parallel.
///
/// Each rayon worker builds its own [`PaperSummarizer`] from the factory,
/// so no model handle is ever shared between workers and the per-pipeline
/// residency bound holds within each.
pub fn summarize_batch<P, F>(paths: &[P], factory: F) -> Vec<Result<PaperSummary>>
where
    P: AsRef<Path> + Sync,
    F: Fn() -> PaperSummarizer + Send + Sync,
{
    paths
        .par_iter()
        .map_init(&factory, |summarizer, path| summarizer.summarize(path))
        .collect()
}
