//! Layout-driven section segmentation.
//!
//! Classifies page blocks into named sections using per-document font
//! statistics. Absolute thresholds fail across papers with different base
//! font sizes, so the header threshold is relative: median font size plus
//! half a point.

mod keywords;

pub use keywords::SectionKeywordTable;

use crate::model::{PageBlock, SectionLabel, SectionMap};
use log::{debug, info, warn};

/// Thresholds controlling header detection and noise filtering.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Margin added to the median font size to form the header threshold.
    pub header_margin: f32,
    /// Extra size above the threshold that makes a non-bold block a header.
    pub bold_equivalent_margin: f32,
    /// Maximum character length for a header candidate.
    pub max_header_len: usize,
    /// Maximum length at which a keyword match starts a section even when
    /// the block is not a header candidate.
    pub short_label_len: usize,
    /// Minimum body-fragment length; shorter blocks are dropped as noise.
    pub min_fragment_len: usize,
}

impl SegmentOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header threshold margin.
    pub fn with_header_margin(mut self, margin: f32) -> Self {
        self.header_margin = margin;
        self
    }

    /// Set the minimum body-fragment length.
    pub fn with_min_fragment_len(mut self, len: usize) -> Self {
        self.min_fragment_len = len;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            header_margin: 0.5,
            bold_equivalent_margin: 1.0,
            max_header_len: 100,
            short_label_len: 80,
            min_fragment_len: 20,
        }
    }
}

/// Font size statistics for one document.
#[derive(Debug, Clone, Default)]
pub struct FontStatistics {
    sizes: Vec<f32>,
}

impl FontStatistics {
    /// Collect sizes from a block list.
    pub fn from_blocks(blocks: &[PageBlock]) -> Self {
        Self {
            sizes: blocks.iter().map(|b| b.font_size).collect(),
        }
    }

    /// Add a font size observation.
    pub fn add_size(&mut self, size: f32) {
        self.sizes.push(size);
    }

    /// Median font size, or `None` with no observations.
    pub fn median(&self) -> Option<f32> {
        if self.sizes.is_empty() {
            return None;
        }
        let mut sorted = self.sizes.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        Some(median)
    }
}

/// Font-statistics-driven section segmenter.
pub struct SectionSegmenter {
    table: SectionKeywordTable,
    options: SegmentOptions,
}

impl SectionSegmenter {
    /// Create a segmenter with the full keyword table and default options.
    pub fn new() -> Self {
        Self {
            table: SectionKeywordTable::default(),
            options: SegmentOptions::default(),
        }
    }

    /// Create a segmenter with a custom keyword table.
    pub fn with_table(table: SectionKeywordTable) -> Self {
        Self {
            table,
            options: SegmentOptions::default(),
        }
    }

    /// Set segmentation options.
    pub fn with_options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    /// Segment ordered page blocks into named sections.
    ///
    /// Content before any detected header lands in `introduction`. The
    /// `references` section never survives into the returned map. An empty
    /// block list yields an empty map and the caller falls back to
    /// unsegmented full text.
    pub fn segment(&self, blocks: &[PageBlock]) -> SectionMap {
        let stats = FontStatistics::from_blocks(blocks);
        let median = match stats.median() {
            Some(m) => m,
            None => return SectionMap::new(),
        };
        let threshold = median + self.options.header_margin;
        info!(
            "font analysis: median {:.1}pt, header threshold {:.1}pt",
            median, threshold
        );

        let mut map = SectionMap::new();
        let mut current = SectionLabel::Introduction;
        let mut headers_found: Vec<SectionLabel> = Vec::new();

        for block in blocks {
            let text = block.text.trim();
            if text.is_empty() {
                continue;
            }
            let len = text.chars().count();

            let is_header = block.font_size >= threshold
                && len < self.options.max_header_len
                && (block.bold
                    || block.font_size > threshold + self.options.bold_equivalent_margin);

            if let Some(label) = self.table.match_heading(text) {
                if is_header || len < self.options.short_label_len {
                    // The block is a section label, not body text.
                    current = label;
                    headers_found.push(label);
                    debug!("header detected: {} ('{}')", label, crate::text::truncate_chars(text, 50));
                    continue;
                }
            }

            if len < self.options.min_fragment_len {
                continue;
            }

            map.append(current, text);
        }

        if headers_found.is_empty() {
            warn!("no section headers detected");
        } else {
            let names: Vec<&str> = headers_found.iter().map(|l| l.as_str()).collect();
            info!("headers detected: {}", names.join(", "));
        }

        map.remove(SectionLabel::References);
        map
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}
