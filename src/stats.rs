//! Measure a piece of (presumably decrypted) text.
//!
//! Words are whatever lies between `util::words` breaks, punctuation and all.
//! Unlike `score::clean_tokens`, punctuation stays attached to its word.

use crate::util::words;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// how many top words are kept in `TextStatistics`
pub const TOP_WORDS_STORED: usize = 20;
/// how many top words go into any one chart
pub const TOP_WORDS_CHARTED: usize = 10;
/// words longer than this count as long
pub const LONG_WORD: usize = 7;

const VOWELS: &str = "aeiouAEIOU";

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(ch)
}

/// alphabetic, but not a letterlike number such as `Ⅻ`
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}

/// decimal digit; `½` and `Ⅻ` are numeric but not digits
const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// length in characters, not bytes
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `part / whole * 100`, or 0.0 if whole is zero
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Counts things, remembering the order in which they were first seen,
/// so that equal counts come out in first-seen order.
#[derive(Debug, Clone)]
pub struct StableCounter<K> {
    index: HashMap<K, usize>,
    counts: Vec<(K, usize)>,
}

impl<K> Default for StableCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> StableCounter<K> {
    /// new, empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// count one more `key`
    pub fn add(&mut self, key: K) {
        if let Some(&i) = self.index.get(&key) {
            self.counts[i].1 += 1;
        } else {
            self.index.insert(key.clone(), self.counts.len());
            self.counts.push((key, 1));
        }
    }
    /// number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    /// nothing counted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// everything, highest count first, ties in first-seen order
    #[must_use]
    pub fn most_common(mut self) -> Vec<(K, usize)> {
        // sort_by is stable
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts
    }
}

impl<K: Hash + Eq + Clone> FromIterator<K> for StableCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut ret = Self::new();
        for k in iter {
            ret.add(k);
        }
        ret
    }
}

/// Everything we measure about one piece of text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStatistics {
    /// words, split as by `util::words`
    pub word_count: usize,
    /// characters, including whitespace
    pub character_count: usize,
    /// distinct characters, case sensitive
    pub unique_characters: usize,
    /// distinct words, case insensitive
    pub unique_words: usize,
    /// first of the longest words
    pub longest_word: String,
    /// first of the shortest words
    pub shortest_word: String,
    /// mean word length in characters
    pub average_word_length: f64,
    /// number of `aeiouAEIOU`
    pub vowel_count: usize,
    /// vowels as a percentage of letters
    pub vowel_percentage: f64,
    /// letters of any script, excluding letterlike numbers
    pub alphabetic_count: usize,
    /// decimal digits
    pub digit_count: usize,
    /// space characters (not tabs or newlines)
    pub space_count: usize,
    /// ASCII punctuation
    pub punctuation_count: usize,
    /// letters as a percentage of all characters
    pub letter_percentage: f64,
    /// digits as a percentage of all characters
    pub digit_percentage: f64,
    /// spaces as a percentage of all characters
    pub space_percentage: f64,
    /// word length to number of words of that length
    pub word_length_distribution: BTreeMap<usize, usize>,
    /// lowercased words with their counts, most frequent first
    pub top_words: Vec<(String, usize)>,
    /// the single most frequent word
    pub most_common_word: Option<(String, usize)>,
    /// lowercased letters with their counts, most frequent first
    pub letter_frequency: Vec<(char, usize)>,
    /// words which read the same backwards, ignoring case and non-letters
    pub palindrome_words: Vec<String>,
    /// no word has uppercase letters, except those containing non-letters
    pub all_lowercase: bool,
    /// some word is longer than `LONG_WORD`
    pub any_word_longer_than_7: bool,
    /// words whose first character is a vowel
    pub words_starting_with_vowel: usize,
}

impl TextStatistics {
    /// Letters, Digits, Spaces and everything else, for a pie chart
    #[must_use]
    pub fn char_type_breakdown(&self) -> [(&'static str, usize); 4] {
        let other = self
            .character_count
            .saturating_sub(self.alphabetic_count + self.digit_count + self.space_count);
        [
            ("Letters", self.alphabetic_count),
            ("Digits", self.digit_count),
            ("Spaces", self.space_count),
            ("Other", other),
        ]
    }
    /// the top words that go into a chart
    #[must_use]
    pub fn charted_words(&self) -> &[(String, usize)] {
        &self.top_words[..self.top_words.len().min(TOP_WORDS_CHARTED)]
    }
}

/// first element with the greatest key, unlike `Iterator::max_by_key`
fn first_max<'a>(words: &[&'a str]) -> &'a str {
    let mut best = "";
    let mut best_len = 0;
    for &w in words {
        let len = char_len(w);
        if best.is_empty() || len > best_len {
            best = w;
            best_len = len;
        }
    }
    best
}

/// first non-empty element with the smallest length
fn first_min<'a>(words: &[&'a str]) -> &'a str {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .min_by_key(|w| char_len(w))
        .copied()
        .unwrap_or("")
}

fn is_palindrome(word: &str) -> bool {
    let clean: Vec<char> = word
        .chars()
        .filter(|&c| is_letter(c))
        .flat_map(char::to_lowercase)
        .collect();
    clean.len() > 1 && clean.iter().eq(clean.iter().rev())
}

/// lowercase, or at least not purely alphabetic
fn is_lowerish(word: &str) -> bool {
    if !word.chars().all(is_letter) {
        return true;
    }
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}

/// Measure `text`. Never fails; empty text gives zeros everywhere.
#[must_use]
pub fn analyze(text: &str) -> TextStatistics {
    let words: Vec<&str> = words(text).collect();
    let lengths: Vec<usize> = words.iter().map(|w| char_len(w)).collect();

    let mut ret = TextStatistics {
        word_count: words.len(),
        character_count: char_len(text),
        unique_characters: text.chars().collect::<HashSet<char>>().len(),
        longest_word: first_max(&words).to_string(),
        shortest_word: first_min(&words).to_string(),
        any_word_longer_than_7: lengths.iter().any(|&l| l > LONG_WORD),
        all_lowercase: words.iter().all(|w| is_lowerish(w)),
        ..TextStatistics::default()
    };
    if !words.is_empty() {
        ret.average_word_length = lengths.iter().sum::<usize>() as f64 / words.len() as f64;
    }

    let mut letters = StableCounter::new();
    for ch in text.chars() {
        if is_letter(ch) {
            ret.alphabetic_count += 1;
            letters.add(ch.to_lowercase().next().unwrap_or(ch));
        }
        if is_vowel(ch) {
            ret.vowel_count += 1;
        }
        if is_digit(ch) {
            ret.digit_count += 1;
        }
        if ch == ' ' {
            ret.space_count += 1;
        }
        if ch.is_ascii_punctuation() {
            ret.punctuation_count += 1;
        }
    }
    ret.letter_frequency = letters.most_common();
    ret.vowel_percentage = percent(ret.vowel_count, ret.alphabetic_count);
    ret.letter_percentage = percent(ret.alphabetic_count, ret.character_count);
    ret.digit_percentage = percent(ret.digit_count, ret.character_count);
    ret.space_percentage = percent(ret.space_count, ret.character_count);

    for l in &lengths {
        *ret.word_length_distribution.entry(*l).or_insert(0) += 1;
    }

    let lower: StableCounter<String> = words.iter().map(|w| w.to_lowercase()).collect();
    ret.unique_words = lower.len();
    ret.top_words = lower.most_common();
    ret.top_words.truncate(TOP_WORDS_STORED);
    ret.most_common_word = ret.top_words.first().cloned();

    ret.words_starting_with_vowel = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(is_vowel))
        .count();
    ret.palindrome_words = words
        .iter()
        .filter(|w| is_palindrome(w))
        .map(|w| (*w).to_string())
        .collect();
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: &str = "The cat sat. 2 Dogs ran racecar!";

    #[test]
    fn fixed_literal() {
        let s = analyze(FIXED);
        assert_eq!(s.word_count, 7);
        assert_eq!(s.character_count, 32);
        assert_eq!(s.digit_count, 1);
        assert_eq!(s.palindrome_words, vec!["racecar!"]);
        let dist: Vec<(usize, usize)> = s.word_length_distribution.into_iter().collect();
        assert_eq!(dist, vec![(1, 1), (3, 3), (4, 2), (8, 1)]);
        assert_eq!(s.longest_word, "racecar!");
        assert_eq!(s.shortest_word, "2");
        assert_eq!(s.space_count, 6);
        assert_eq!(s.punctuation_count, 2);
        assert_eq!(s.alphabetic_count, 23);
        assert_eq!(s.unique_words, 7);
        assert!(!s.all_lowercase);
        assert!(s.any_word_longer_than_7);
        assert_eq!(s.words_starting_with_vowel, 0);
    }

    #[test]
    fn empty_text() {
        let s = analyze("");
        assert_eq!(s.word_count, 0);
        assert_eq!(s.average_word_length, 0.0);
        assert_eq!(s.vowel_percentage, 0.0);
        assert_eq!(s.letter_percentage, 0.0);
        assert_eq!(s.digit_percentage, 0.0);
        assert_eq!(s.space_percentage, 0.0);
        assert!(s.top_words.is_empty());
        assert!(s.most_common_word.is_none());
        assert!(s.word_length_distribution.is_empty());
        assert_eq!(s.longest_word, "");
        assert_eq!(s.shortest_word, "");
        assert!(s.all_lowercase);
    }

    #[test]
    fn no_letters() {
        let s = analyze("123 456 !!");
        assert_eq!(s.vowel_percentage, 0.0);
        assert_eq!(s.digit_count, 6);
        assert_eq!(s.letter_percentage, 0.0);
        assert_eq!(s.space_percentage, 20.0);
    }

    #[test]
    fn numbers_that_are_not_digits() {
        let s = analyze("½ Ⅻ 7");
        assert_eq!(s.character_count, 5);
        assert_eq!(s.digit_count, 1);
        assert_eq!(s.alphabetic_count, 0);
        assert_eq!(s.letter_percentage, 0.0);
        assert_eq!(s.digit_percentage, 20.0);
        assert_eq!(
            s.char_type_breakdown(),
            [("Letters", 0), ("Digits", 1), ("Spaces", 2), ("Other", 2)]
        );
        assert!(analyze("ⅫⅫ").palindrome_words.is_empty());
    }

    #[test]
    fn separators_split_words() {
        let s = analyze("the\u{1c}and\u{1f}the");
        assert_eq!(s.word_count, 3);
        assert_eq!(s.top_words[0], ("the".to_string(), 2));
    }

    #[test]
    fn vowels_are_a_share_of_letters() {
        let s = analyze("ab 12");
        assert_eq!(s.vowel_count, 1);
        assert_eq!(s.vowel_percentage, 50.0);
        assert_eq!(s.letter_percentage, 40.0);
        assert_eq!(s.digit_percentage, 40.0);
        assert_eq!(s.space_percentage, 20.0);
    }

    #[test]
    fn ties_go_to_first() {
        let s = analyze("bb aa ccc ddd e f");
        assert_eq!(s.longest_word, "ccc");
        assert_eq!(s.shortest_word, "e");
        assert_eq!(s.average_word_length, 2.0);
    }

    #[test]
    fn top_words_are_case_insensitive_and_stable() {
        let s = analyze("b A a B c the The THE c.");
        assert_eq!(
            s.top_words,
            vec![
                ("the".to_string(), 3),
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
                ("c.".to_string(), 1),
            ]
        );
        assert_eq!(s.most_common_word, Some(("the".to_string(), 3)));
        assert_eq!(s.unique_words, 5);
        assert_eq!(s.words_starting_with_vowel, 2);
    }

    #[test]
    fn top_words_truncate() {
        let text: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let s = analyze(&text.join(" "));
        assert_eq!(s.unique_words, 30);
        assert_eq!(s.top_words.len(), TOP_WORDS_STORED);
        assert_eq!(s.top_words[0].0, "w0");
        assert_eq!(s.charted_words().len(), TOP_WORDS_CHARTED);
    }

    #[test]
    fn unique_characters_are_case_sensitive() {
        assert_eq!(analyze("aA a").unique_characters, 3);
    }

    #[test]
    fn palindromes() {
        let s = analyze("Anna kayak, a I'm noon? Level-7 xy");
        assert_eq!(s.palindrome_words, vec!["Anna", "kayak,", "noon?", "Level-7"]);
    }

    #[test]
    fn letters_counted_lowercase() {
        let s = analyze("bAab");
        assert_eq!(s.letter_frequency, vec![('b', 2), ('a', 2)]);
    }

    #[test]
    fn lowercase_check() {
        assert!(analyze("hello world 42 Dr.").all_lowercase);
        assert!(!analyze("hello World").all_lowercase);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let s = analyze(FIXED);
        let total: usize = s.char_type_breakdown().iter().map(|x| x.1).sum();
        assert_eq!(total, s.character_count);
        assert_eq!(s.char_type_breakdown()[3], ("Other", 2));
    }

    #[test]
    fn counter() {
        let c: StableCounter<&str> = ["x", "y", "y", "z", "x"].into_iter().collect();
        assert_eq!(c.len(), 3);
        assert_eq!(c.most_common(), vec![("x", 2), ("y", 2), ("z", 1)]);
        assert!(StableCounter::<u8>::new().is_empty());
    }
}
