//! Shared text utilities: sentence splitting, word counting, truncation.
//!
//! The sentence splitter is a lightweight heuristic: it breaks after a
//! terminator (`.`, `!`, `?`) that is followed by whitespace. Citation and
//! figure markers are stripped by the cleaning stage before any splitting
//! happens, so decimal numbers are the main false-positive risk and those
//! are not followed by whitespace.

/// Split text into sentences.
///
/// Returns trimmed, non-empty sentence strings in original order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                Some(next) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                let sentence = current.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                current.clear();
            }
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate a string to at most `max_chars` characters (char-safe).
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
