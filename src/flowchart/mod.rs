//! Heuristic process-step extraction from methodology text.
//!
//! Scans the opening sentences of a methodology section for process cues
//! (ordinal/sequence words or process verbs) and assembles the surviving
//! steps into a linear directed flowchart.

use crate::model::Flowchart;
use crate::text;
use log::debug;

/// Minimum methodology text length to attempt extraction.
const MIN_TEXT_LEN: usize = 100;
/// Minimum number of sentences to attempt extraction.
const MIN_SENTENCES: usize = 3;
/// How many leading sentences to scan.
const SCAN_WINDOW: usize = 20;
/// Maximum steps in a flowchart.
const MAX_STEPS: usize = 6;
/// Maximum characters kept per step description.
const MAX_STEP_LEN: usize = 120;
/// Lowercase prefix length used for near-duplicate detection.
const DEDUPE_PREFIX_LEN: usize = 40;

/// Ordinal and sequencing words that signal a process description.
const PROCESS_INDICATORS: &[&str] = &[
    "first", "second", "third", "then", "next", "finally", "after", "step", "stage", "phase",
    "process", "procedure",
];

/// Verbs that commonly describe a methodology action.
const PROCESS_VERBS: &[&str] = &[
    "train", "test", "evaluate", "collect", "preprocess", "extract", "compute", "calculate",
    "apply", "use", "implement", "generate", "propose", "develop", "design", "construct", "build",
    "optimize",
];

/// Sentence-level process-step detector and flowchart assembler.
#[derive(Default)]
pub struct FlowchartExtractor;

impl FlowchartExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a linear flowchart from methodology text.
    ///
    /// Returns `None` when the text is too short, has fewer than 3
    /// sentences, or fewer than 2 qualifying steps survive deduplication.
    pub fn extract(&self, methodology_text: &str) -> Option<Flowchart> {
        let trimmed = methodology_text.trim();
        if trimmed.chars().count() < MIN_TEXT_LEN {
            return None;
        }

        let sentences = text::split_sentences(trimmed);
        if sentences.len() < MIN_SENTENCES {
            return None;
        }

        let steps = self.collect_steps(&sentences);
        if steps.len() < 2 {
            debug!("flowchart skipped: {} qualifying step(s)", steps.len());
            return None;
        }

        Some(Flowchart::linear(steps))
    }

    fn collect_steps(&self, sentences: &[String]) -> Vec<String> {
        let mut steps: Vec<String> = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        for sentence in sentences.iter().take(SCAN_WINDOW) {
            let sentence = sentence.trim();
            let len = sentence.chars().count();
            if len <= 30 || len >= 200 {
                continue;
            }

            let lower = sentence.to_lowercase();
            let has_indicator = PROCESS_INDICATORS.iter().any(|w| lower.contains(w));
            let has_verb = PROCESS_VERBS.iter().any(|w| lower.contains(w));
            if !has_indicator && !has_verb {
                continue;
            }

            let mut step = text::truncate_chars(sentence, MAX_STEP_LEN);
            if !step.ends_with('.') {
                step.push_str("...");
            }

            let key = text::truncate_chars(&step.to_lowercase(), DEDUPE_PREFIX_LEN);
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            steps.push(step);

            if steps.len() >= MAX_STEPS {
                break;
            }
        }

        steps
    }
}
