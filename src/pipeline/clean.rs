//! Section text cleaning ahead of summarization.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleaning pass: strips citation markers, URLs, emails, and figure/table/
/// equation references, then collapses whitespace. Unicode is normalized to
/// NFC first so the regexes see composed characters.
pub struct TextCleaner {
    citation_brackets: Regex,
    citation_parens: Regex,
    urls: Regex,
    emails: Regex,
    float_refs: Regex,
    whitespace: Regex,
}

impl TextCleaner {
    /// Create a cleaner with compiled patterns.
    pub fn new() -> Self {
        Self {
            citation_brackets: Regex::new(r"\[\d+(?:,\s*\d+)*\]").expect("valid regex"),
            citation_parens: Regex::new(r"\(\d+(?:,\s*\d+)*\)").expect("valid regex"),
            urls: Regex::new(r"https?://\S+").expect("valid regex"),
            emails: Regex::new(r"\S+@\S+").expect("valid regex"),
            float_refs: Regex::new(r"(?i)\b(?:fig|figure|table|eq)\.?\s*\d+").expect("valid regex"),
            whitespace: Regex::new(r"\s+").expect("valid regex"),
        }
    }

    /// Clean a section's text.
    pub fn clean(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        let cleaned = self.citation_brackets.replace_all(&normalized, "");
        let cleaned = self.citation_parens.replace_all(&cleaned, "");
        let cleaned = self.urls.replace_all(&cleaned, "");
        let cleaned = self.emails.replace_all(&cleaned, "");
        let cleaned = self.float_refs.replace_all(&cleaned, "");
        let cleaned = self.whitespace.replace_all(&cleaned, " ");
        cleaned.trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
