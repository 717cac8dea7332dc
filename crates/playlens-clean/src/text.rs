//! Free-text review preprocessing.
//!
//! Feeds the exploratory sentiment/genre work, not the live queries:
//! tokenize, drop stop words, lowercase, keep alphabetic tokens only, drop
//! custom filter words.

use playlens_model::CellValue;

/// Filter words removed by default on top of the stop-word list.
pub const DEFAULT_FILTER_WORDS: &[&str] = &["recommended"];

/// Common English stop words, matched case-insensitively.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "between", "both", "but", "by", "can", "could",
    "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further",
    "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my", "myself",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself",
];

/// Clean review text with the default filter words.
pub fn preprocess_text(value: &CellValue) -> String {
    preprocess_text_with_filter(value, DEFAULT_FILTER_WORDS)
}

/// Clean review text.
///
/// Accepts a text cell or a non-empty list of text cells (joined with
/// spaces); anything else cleans to the empty string. Tokens are maximal
/// alphanumeric runs; stop words and custom filter words are matched on
/// the lowercased token, and tokens with non-alphabetic characters are
/// dropped.
pub fn preprocess_text_with_filter(value: &CellValue, filter_words: &[&str]) -> String {
    let joined = match value {
        CellValue::Text(s) => s.clone(),
        CellValue::List(items) if !items.is_empty() => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    CellValue::Text(s) => parts.push(s.as_str()),
                    _ => return String::new(),
                }
            }
            parts.join(" ")
        }
        _ => return String::new(),
    };

    let mut cleaned: Vec<String> = Vec::new();
    for token in joined.split(|ch: char| !ch.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        let lower = token.to_lowercase();
        if STOP_WORDS.contains(&lower.as_str()) {
            continue;
        }
        if !token.chars().all(char::is_alphabetic) {
            continue;
        }
        if filter_words.contains(&lower.as_str()) {
            continue;
        }
        cleaned.push(lower);
    }
    cleaned.join(" ")
}
