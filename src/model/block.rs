//! Page-level text blocks produced by the PDF parse capability.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in page coordinates (top-left origin).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// A positioned text fragment with font attributes.
///
/// Blocks are produced once per parse pass and must arrive in top-left
/// reading order (top to bottom, then left to right within a band). The
/// segmenter consumes them in the given order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBlock {
    /// Text content of the block.
    pub text: String,
    /// Dominant font size in points.
    pub font_size: f32,
    /// Whether the dominant font appears bold.
    pub bold: bool,
    /// Position on the page.
    pub bbox: BoundingBox,
}

impl PageBlock {
    /// Create a new page block.
    pub fn new(text: impl Into<String>, font_size: f32, bold: bool, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            font_size,
            bold,
            bbox,
        }
    }

    /// Text length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the block holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Sort blocks into reading order (top to bottom, then left to right).
    pub fn sort_by_position(blocks: &mut [PageBlock]) {
        blocks.sort_by(|a, b| {
            a.bbox
                .y0
                .partial_cmp(&b.bbox.y0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    a.bbox
                        .x0
                        .partial_cmp(&b.bbox.x0)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_position() {
        let mut blocks = vec![
            PageBlock::new("b", 10.0, false, BoundingBox::new(0.0, 50.0, 100.0, 60.0)),
            PageBlock::new("a", 10.0, false, BoundingBox::new(0.0, 10.0, 100.0, 20.0)),
            PageBlock::new("c", 10.0, false, BoundingBox::new(50.0, 50.0, 150.0, 60.0)),
        ];
        PageBlock::sort_by_position(&mut blocks);
        let order: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_block_len_is_chars() {
        let block = PageBlock::new("héllo", 10.0, false, BoundingBox::default());
        assert_eq!(block.len(), 5);
        assert!(!block.is_empty());
    }
}
