//! Decide how much a candidate plaintext looks like English.
//!
//! The measure is the fraction of words that appear in a
//! short list of very common English words. Short or unusual texts score
//! zero even when correctly decrypted.

use crate::util::words;
use lazy_static::lazy_static;
use std::collections::HashSet;

/// the reference words, all lowercase
pub const COMMON_WORDS: [&str; 15] = [
    "the", "and", "is", "message", "secret", "to", "of", "in", "for", "on", "with", "at", "by",
    "from", "this",
];

/// default number of matching words for `looks_english`
pub const DEFAULT_MIN_MATCHES: usize = 3;

lazy_static! {
    static ref COMMON_SET: HashSet<&'static str> = COMMON_WORDS.iter().copied().collect();
}

/// is `word` (already lowercase) one of the reference words
#[must_use]
pub fn is_common(word: &str) -> bool {
    COMMON_SET.contains(word)
}

/// Words as split by `util::words`, with leading and trailing ASCII punctuation
/// removed, empties dropped, lowercased.
pub fn clean_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    words(text)
        .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// number of clean tokens, and how many of those are reference words
fn counts(text: &str) -> (usize, usize) {
    let mut total = 0;
    let mut matches = 0;
    for w in clean_tokens(text) {
        total += 1;
        if is_common(&w) {
            matches += 1;
        }
    }
    (total, matches)
}

/// Fraction of clean tokens that are reference words, in `0.0..=1.0`.
/// Text with no tokens scores 0.0.
#[must_use]
pub fn score(text: &str) -> f64 {
    let (total, matches) = counts(text);
    if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64
    }
}

/// `score`, under the name the what-if tools use
#[must_use]
pub fn score_of(text: &str) -> f64 {
    score(text)
}

/// Coarse yes/no signal from `looks_english`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnglishCheck {
    /// did we see at least the required number of reference words
    pub looks_english: bool,
    /// how many reference words we saw
    pub matches: usize,
}

/// Does `text` contain at least `min_matches` reference words.
/// Only used for diagnostics, never to pick a winner.
#[must_use]
pub fn looks_english(text: &str, min_matches: usize) -> EnglishCheck {
    let (_, matches) = counts(text);
    EnglishCheck {
        looks_english: matches >= min_matches,
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_cleaned() {
        let v: Vec<String> = clean_tokens("  \"The\" cat's -- (secret)! ").collect();
        assert_eq!(v, vec!["the", "cat's", "secret"]);
    }

    #[test]
    fn scores() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("... !!! ?"), 0.0);
        assert_eq!(score("the and is"), 1.0);
        assert_eq!(score("The cat"), 0.5);
        assert_eq!(score("THE, Message. xyz qqq"), 0.5);
        assert_eq!(score("zzz"), 0.0);
        assert_eq!(score("the\u{1c}and"), 1.0);
        assert_eq!(score_of("this is it"), score("this is it"));
    }

    #[test]
    fn score_is_bounded() {
        for t in ["a b c", "the the the", "secret, message; to: you"] {
            let s = score(t);
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn english_check() {
        let c = looks_english("the message is secret", DEFAULT_MIN_MATCHES);
        assert!(c.looks_english);
        assert_eq!(c.matches, 4);
        let c = looks_english("the cat sat on a mat", DEFAULT_MIN_MATCHES);
        assert!(!c.looks_english);
        assert_eq!(c.matches, 2);
        assert!(looks_english("the cat", 1).looks_english);
        assert!(looks_english("", 0).looks_english);
    }
}
