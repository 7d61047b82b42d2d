use regex::Regex;
use std::sync::LazyLock;

static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9 _/&()-]*?):\s+(.+)$").unwrap());

static ALREADY_TAGGED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]+::").unwrap());

/// Field names that are always treated as metadata when they appear as the
/// key of a `key: value` line.
const KNOWN_FIELD_NAMES: &[&str] = &[
    "assignee", "author", "category", "created", "date", "deadline", "due",
    "email", "link", "location", "owner", "phone", "priority", "project",
    "source", "status", "tags", "title", "type", "updated", "url", "version",
];

/// Vocabulary that marks a `key: value` line as prose rather than metadata.
const INSTRUCTIONAL_WORDS: &[&str] = &[
    "caution", "example", "important", "note", "remember", "reminder",
    "tip", "todo", "warning",
];

/// A key starting with an article or demonstrative reads as a sentence.
const LEADING_ARTICLES: &[&str] = &["a", "an", "the", "this", "that", "these", "those"];

/// Rewrite a `key: value` line into `key::value` when the heuristic decides
/// it is metadata. Already-tagged `key::value` lines pass through untouched,
/// as does anything the heuristic reads as prose.
pub fn rewrite_fields(text: &str) -> String {
    if ALREADY_TAGGED.is_match(text) {
        return text.to_string();
    }

    if let Some(caps) = FIELD_LINE.captures(text) {
        let key = caps[1].trim();
        let value = caps[2].trim();
        // A colon inside a URL scheme is not a field separator.
        if !value.starts_with("//") && is_metadata_field(key, value) {
            return format!("{}::{}", key, value);
        }
    }

    text.to_string()
}

/// Pure field-vs-prose predicate over `(key, value)`. Biased toward leaving
/// text unchanged: anything sentence-shaped falls through as prose.
pub fn is_metadata_field(key: &str, value: &str) -> bool {
    let key_lower = key.to_lowercase();
    let key_words: Vec<&str> = key_lower.split_whitespace().collect();

    if KNOWN_FIELD_NAMES.contains(&key_lower.as_str()) {
        return true;
    }

    match key_words.first() {
        Some(first) if LEADING_ARTICLES.contains(first) => return false,
        None => return false,
        _ => {}
    }

    if key_words.iter().any(|w| INSTRUCTIONAL_WORDS.contains(w)) {
        return false;
    }

    // Heavily punctuated values read as sentences.
    let punctuation = value.chars().filter(|c| ".,;!?".contains(*c)).count();
    if punctuation > 2 {
        return false;
    }

    // Short key, short value is the shape of metadata.
    key_words.len() <= 3 && key.len() <= 24 && value.len() <= 80
}
