//! Compiled entity pattern library.

use crate::model::EntityCategory;
use regex::Regex;

/// Immutable set of compiled patterns per entity category.
///
/// Case sensitivity is per pattern: families with stylized spellings
/// (BERT, GLUE, mAP) match case-sensitively, the rest case-insensitively.
pub struct EntityPatternSet {
    entries: Vec<(EntityCategory, Vec<Regex>)>,
}

impl EntityPatternSet {
    /// Build a pattern set from `(category, patterns)` pairs.
    pub fn new(entries: Vec<(EntityCategory, Vec<Regex>)>) -> Self {
        Self { entries }
    }

    /// Iterate over `(category, patterns)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (EntityCategory, &[Regex])> {
        self.entries
            .iter()
            .map(|(category, patterns)| (*category, patterns.as_slice()))
    }

    /// Total number of compiled patterns.
    pub fn pattern_count(&self) -> usize {
        self.entries.iter().map(|(_, p)| p.len()).sum()
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("pattern table entries are valid regexes"))
        .collect()
}

impl Default for EntityPatternSet {
    fn default() -> Self {
        Self::new(vec![
            (
                EntityCategory::Models,
                compile(&[
                    r"(?i)\b(GPT-?[0-9.]+[a-z]*|GPT|ChatGPT)\b",
                    r"\b(BERT|RoBERTa|ALBERT|DistilBERT|DeBERTa|SciBERT)\b",
                    r"\b(T5|FLAN-T5|mT5)\b",
                    r"(?i)\b(LLaMA|Llama-?[0-9]*)\b",
                    r"\b(Claude|Gemini|Mistral|Mixtral)\b",
                    r"(?i)\b(ResNet|VGG|Inception|DenseNet|EfficientNet)[-\s]?[0-9]*",
                    r"(?i)\b(YOLO|YOLOv[0-9]+)\b",
                    r"(?i)\b(ViT|Vision Transformer|Swin Transformer)\b",
                    r"(?i)\b(CLIP|DALL-?E|Stable Diffusion)\b",
                    r"\b(Transformer|LSTM|GRU|BiLSTM)\b",
                ]),
            ),
            (
                EntityCategory::Datasets,
                compile(&[
                    r"(?i)\b(ImageNet[-\s]?[0-9]*k?)\b",
                    r"(?i)\b(COCO|MS-?COCO)\b",
                    r"(?i)\b(CIFAR-?(?:10|100))\b",
                    r"(?i)\b(MNIST|Fashion-?MNIST)\b",
                    r"(?i)\b(SQuAD[0-9.]*)\b",
                    r"\b(GLUE|SuperGLUE)\b",
                    r"(?i)\b(WikiText[-\s]?[0-9]*)\b",
                    r"(?i)\b(Common Crawl|C4)\b",
                    r"(?i)\b(ADE20K|Cityscapes|Pascal VOC)\b",
                ]),
            ),
            (
                EntityCategory::Metrics,
                compile(&[
                    r"(?i)\b(accuracy|precision|recall|F1[-\s]?score)\b",
                    r"(?i)\b(BLEU[-\s]?[0-9]*|ROUGE[-\s]?[LN0-9]*)\b",
                    r"\b(mAP|IoU|mIoU)\b",
                    r"(?i)\b(perplexity|cross-entropy)\b",
                    r"(?i)\b(AUC|ROC|AUC-ROC)\b",
                    r"\b(METEOR|CIDEr|SPICE)\b",
                ]),
            ),
            (
                EntityCategory::Frameworks,
                compile(&[
                    r"(?i)\b(PyTorch|TensorFlow|JAX|Keras)\b",
                    r"(?i)\b(Hugging ?Face|HuggingFace)\b",
                    r"(?i)\b(scikit-learn|sklearn)\b",
                ]),
            ),
            // No reliable surface patterns exist for techniques; the
            // category stays present in the output with an empty list.
            (EntityCategory::Techniques, Vec::new()),
        ])
    }
}
