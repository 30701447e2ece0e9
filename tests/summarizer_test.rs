//! End-to-end tests: page blocks in, structured summary record out.

use paperdigest::{
    BoundingBox, Embedder, EmbedderProvider, Error, PageBlock, PageSource, PaperDigest,
    PaperSummary, Result, SectionLabel,
};
use std::path::Path;
use std::sync::Arc;

/// Page source serving a fixed block list, standing in for a PDF parser.
struct BlockSource {
    blocks: Vec<PageBlock>,
}

impl PageSource for BlockSource {
    fn parse_pages(&self, _path: &Path) -> Result<Vec<PageBlock>> {
        Ok(self.blocks.clone())
    }
}

fn header(text: &str, y: f32) -> PageBlock {
    PageBlock::new(text, 14.0, true, BoundingBox::new(0.0, y, 200.0, y + 14.0))
}

fn body(text: &str, y: f32) -> PageBlock {
    PageBlock::new(text, 10.0, false, BoundingBox::new(0.0, y, 200.0, y + 10.0))
}

const METHODOLOGY: &str = "We first collect a large corpus of annotated articles from \
    public archives. We then preprocess every document and remove boilerplate markup. \
    Next we train a BERT encoder with PyTorch on the prepared corpus. Finally we \
    evaluate accuracy on the ImageNet validation split.";

/// A complete paper of roughly three thousand words: bold 14pt headers over
/// 10pt body text, a methodology with four process sentences, and a
/// references tail.
fn paper_source() -> Arc<BlockSource> {
    let introduction = (0..150)
        .map(|i| {
            format!(
                "Sentence {} outlines the broad motivation for structured machine \
                 reading of long scholarly documents.",
                i
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let results = (0..60)
        .map(|i| {
            format!(
                "Run {} of the evaluation shows steady gains over the strongest \
                 baseline configuration we compare against.",
                i
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    Arc::new(BlockSource {
        blocks: vec![
            header("Abstract", 0.0),
            body(
                "This paper presents a layout aware reading system that condenses long \
                 scholarly articles into short structured digests for busy reviewers.",
                10.0,
            ),
            header("1. Introduction", 20.0),
            body(&introduction, 30.0),
            header("2. Methodology", 40.0),
            body(METHODOLOGY, 50.0),
            header("3. Results", 60.0),
            body(&results, 70.0),
            header("4. Conclusion", 80.0),
            body(
                "We presented a structured digestion pipeline and showed that relative \
                 font thresholds transfer across publication venues without retuning.",
                90.0,
            ),
            header("References", 100.0),
            body(
                "[1] An Author and Another Author. A long venue name for a related \
                 publication. 2020.",
                110.0,
            ),
        ],
    })
}

fn summarize_paper() -> PaperSummary {
    PaperDigest::new()
        .build(paper_source())
        .summarize("paper.pdf")
        .unwrap()
}

#[test]
fn test_sections_discovered_in_order() {
    let record = summarize_paper();
    assert_eq!(
        record.sections_found,
        vec![
            SectionLabel::Abstract,
            SectionLabel::Introduction,
            SectionLabel::Methodology,
            SectionLabel::Results,
            SectionLabel::Conclusion,
        ]
    );
    assert!(record.section(SectionLabel::References).is_none());
}

#[test]
fn test_summary_is_shorter_than_original() {
    let record = summarize_paper();
    assert!(record.num_words_original > 0);
    assert!(record.num_words_summary < record.num_words_original);
    assert!(record.compression_ratio() > 0.0);
}

#[test]
fn test_entities_extracted_from_full_text() {
    let record = summarize_paper();
    assert!(record.entities.models.contains(&"BERT".to_string()));
    assert!(record.entities.frameworks.contains(&"PyTorch".to_string()));
    assert!(record.entities.datasets.contains(&"ImageNet".to_string()));
    assert!(record.entities.metrics.contains(&"accuracy".to_string()));
    assert!(record.entities.techniques.is_empty());
}

#[test]
fn test_methodology_flowchart_built_from_original_text() {
    let record = summarize_paper();
    let chart = record.methodology_flowchart.expect("four process sentences");
    assert_eq!(chart.step_count(), 4);
    assert_eq!(chart.nodes.len(), 6);
    assert_eq!(chart.edges.len(), 5);
    assert!(chart.steps[0].contains("collect a large corpus"));

    let mermaid = chart.to_mermaid();
    assert!(mermaid.starts_with("graph TD"));
    assert!(mermaid.contains("Start([Start])"));
    assert!(mermaid.contains("End([End])"));
}

#[test]
fn test_short_sections_pass_through_with_no_keywords() {
    let record = summarize_paper();
    let methodology = record.section(SectionLabel::Methodology).unwrap();
    assert!(methodology.summary.contains("BERT encoder"));
    assert!(methodology.keywords.is_empty());
}

#[test]
fn test_long_section_gets_keywords() {
    let record = summarize_paper();
    let introduction = record.section(SectionLabel::Introduction).unwrap();
    assert!(!introduction.keywords.is_empty());
    assert!(introduction.keywords.len() <= 5);
}

#[test]
fn test_record_json_roundtrip() {
    let record = summarize_paper();
    let json = serde_json::to_string_pretty(&record).unwrap();
    let back: PaperSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);

    // All five entity keys are present even when a category is empty.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entities = value.get("entities").unwrap().as_object().unwrap();
    assert_eq!(entities.len(), 5);
    assert!(entities.contains_key("techniques"));
}

#[test]
fn test_section_failure_degrades_and_document_completes() {
    struct FailingEmbedderProvider;
    impl EmbedderProvider for FailingEmbedderProvider {
        fn load(&self) -> Result<Box<dyn Embedder>> {
            Err(Error::ModelUnavailable {
                capability: "embedding",
                reason: "weights missing".into(),
            })
        }
    }

    let record = PaperDigest::new()
        .with_embedder(Arc::new(FailingEmbedderProvider))
        .build(paper_source())
        .summarize("paper.pdf")
        .unwrap();

    // Long sections cannot be summarized without the embedder; each one
    // degrades to its cleaned text with no keywords instead of aborting
    // the document.
    let introduction = record.section(SectionLabel::Introduction).unwrap();
    assert!(introduction.summary.contains("Sentence 0 outlines"));
    assert!(introduction.summary.contains("Sentence 149 outlines"));
    assert!(introduction.keywords.is_empty());

    let results = record.section(SectionLabel::Results).unwrap();
    assert!(results.summary.contains("Run 59 of the evaluation"));
    assert!(results.keywords.is_empty());

    // Short sections never touch the models and come through as usual.
    let methodology = record.section(SectionLabel::Methodology).unwrap();
    assert!(methodology.summary.contains("BERT encoder"));

    assert_eq!(record.sections_found.len(), 5);
    assert!(record.methodology_flowchart.is_some());
}

#[test]
fn test_no_headers_yields_single_introduction() {
    let source = Arc::new(BlockSource {
        blocks: vec![
            body(
                "A flat document with no recognizable headers still produces a digest \
                 through the unsegmented plain text path of the reader.",
                0.0,
            ),
            body(
                "Its entire content lands in a single introduction entry so downstream \
                 consumers always see at least one populated division.",
                10.0,
            ),
        ],
    });
    let record = PaperDigest::new().build(source).summarize("flat.pdf").unwrap();
    assert_eq!(record.sections_found, vec![SectionLabel::Introduction]);
}
