//! Data model for paper structuring and summarization.

mod block;
mod entities;
mod flowchart;
mod section;
mod summary;

pub use block::{BoundingBox, PageBlock};
pub use entities::{EntityBundle, EntityCategory};
pub use flowchart::{FlowEdge, FlowNode, Flowchart, NodeKind};
pub use section::{SectionLabel, SectionMap};
pub use summary::{PaperSummary, SectionSummary};
