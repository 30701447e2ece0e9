//! External capability contracts.
//!
//! The core pipeline treats PDF parsing and the ML models as opaque
//! capabilities behind traits. The two heavy models (sentence embedding,
//! sequence-to-sequence generation) are split into a *provider* that knows
//! how to load weights and a *handle* returned by the load; releasing a
//! model is dropping its handle. This makes the load/release discipline a
//! matter of scope rather than paired method calls, and keeps model state
//! owned by the pipeline instance instead of a process-wide singleton.
//!
//! # Example
//!
//! ```
//! use paperdigest::capability::{Embedder, EmbedderProvider, HashEmbedderProvider};
//!
//! fn main() -> paperdigest::Result<()> {
//!     let provider = HashEmbedderProvider::default();
//!     let embedder = provider.load()?;
//!     let vectors = embedder.embed(&["a sentence".to_string()])?;
//!     assert_eq!(vectors[0].len(), embedder.dimension());
//!     Ok(()) // embedder dropped here: model released
//! }
//! ```

mod fallback;

pub use fallback::{
    FrequencyKeywords, HashEmbedder, HashEmbedderProvider, LeadGenerator, LeadGeneratorProvider,
    PlainTextSource,
};

use crate::error::Result;
use crate::model::PageBlock;
use std::path::Path;

/// Capability that turns a document into positioned page blocks.
///
/// Implementations must preserve per-block dominant font size, the bold
/// flag, and top-left reading order.
pub trait PageSource: Send + Sync {
    /// Parse the document into ordered page blocks.
    fn parse_pages(&self, path: &Path) -> Result<Vec<PageBlock>>;

    /// Fallback plain-text extraction used when segmentation finds nothing.
    ///
    /// The default joins block texts in reading order, dropping fragments
    /// of 20 characters or fewer (running headers, page numbers).
    fn plain_text(&self, path: &Path) -> Result<String> {
        let mut blocks = self.parse_pages(path)?;
        PageBlock::sort_by_position(&mut blocks);
        let parts: Vec<&str> = blocks
            .iter()
            .filter(|b| b.len() > 20)
            .map(|b| b.text.as_str())
            .collect();
        Ok(parts.join("\n"))
    }
}

/// A loaded sentence-embedding model.
pub trait Embedder {
    /// Encode a batch of strings into fixed-size vectors.
    ///
    /// Must be deterministic for fixed weights and return one vector of
    /// [`dimension`](Embedder::dimension) floats per input.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Output vector width.
    fn dimension(&self) -> usize;
}

/// Loader for the embedding capability.
pub trait EmbedderProvider: Send + Sync {
    /// Load the model and return a handle; dropping the handle releases it.
    fn load(&self) -> Result<Box<dyn Embedder>>;
}

/// A loaded sequence-to-sequence generation model.
pub trait Generator {
    /// Generate text from the input with an approximate word budget.
    fn generate(&self, text: &str, max_words: usize) -> Result<String>;

    /// Maximum input context in characters; longer input is truncated by
    /// the caller before generation.
    fn max_input_chars(&self) -> usize;
}

/// Loader for the generation capability.
pub trait GeneratorProvider: Send + Sync {
    /// Load the model and return a handle; dropping the handle releases it.
    fn load(&self) -> Result<Box<dyn Generator>>;
}

/// Keyword extraction capability.
///
/// Lightweight enough to stay resident; the pipeline treats it as optional
/// and degrades to empty keyword lists when absent.
pub trait KeywordModel: Send + Sync {
    /// Extract the top `top_n` keywords from the text, best first.
    fn extract_keywords(&self, text: &str, top_n: usize) -> Result<Vec<String>>;
}
