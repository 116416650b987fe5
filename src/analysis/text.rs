// Tokenization and normalization primitives.
//
// Everything here is total: any string, including empty or non-ASCII input,
// produces a defined (possibly empty) result.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Tokens shorter than this are dropped by `extract_keywords` unless the
/// caller asks otherwise.
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 3;

/// Runs of Unicode word characters (letters, marks, digits, connector punctuation).
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern should be valid"));

/// Lowercase the text and split it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lowercase and collapse every whitespace run into a single space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count how many times each token occurs.
pub fn word_frequency<S: AsRef<str>>(tokens: &[S]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Tokens at least `min_length` characters long, in text order.
///
/// Length is measured in characters, not bytes, so accented words are not
/// favoured over ASCII ones.
pub fn extract_keywords(text: &str, min_length: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() >= min_length)
        .collect()
}
