//! Plain text renderings of statistics and decode results

use crate::decode::DecodeResult;
use crate::stats::{percent, TextStatistics};
use unicode_truncate::{Alignment, UnicodeTruncateStr};
use unicode_width::UnicodeWidthStr;

/// widest bar in any chart
pub const BAR_WIDTH: usize = 50;
/// widest word label in the frequency chart
pub const LABEL_WIDTH: usize = 15;
const BAR: char = '█';
const RULE: &str = "==================================================";
const NO_DATA: &str = "No data\n";

/// a bar of `BAR_WIDTH * part / whole` blocks, rounded
fn bar(part: f64, whole: f64) -> String {
    if whole <= 0.0 || part <= 0.0 {
        return String::new();
    }
    let n = (part / whole * BAR_WIDTH as f64).round() as usize;
    std::iter::repeat(BAR).take(n.max(1)).collect()
}

/// Full human readable report of some statistics
#[must_use]
pub fn format_report(s: &TextStatistics) -> String {
    let mut r = format!("{RULE}\nTEXT ANALYSIS REPORT\n{RULE}\n\n");

    r.push_str(&format!(
        "BASIC STATS:\n  Words: {}\n  Characters: {}\n  Unique chars: {}\n  Unique words: {}\n\n",
        s.word_count, s.character_count, s.unique_characters, s.unique_words
    ));
    r.push_str(&format!(
        "CHARACTER TYPES:\n  Letters: {}\n  Digits: {}\n  Spaces: {}\n  Punctuation: {}\n\n",
        s.alphabetic_count, s.digit_count, s.space_count, s.punctuation_count
    ));
    r.push_str(&format!(
        "PERCENTAGES:\n  Vowels: {:.1}%\n  Letters: {:.1}%\n  Digits: {:.1}%\n  Spaces: {:.1}%\n\n",
        s.vowel_percentage, s.letter_percentage, s.digit_percentage, s.space_percentage
    ));

    r.push_str("WORD INFO:\n");
    r.push_str(&format!(
        "  Longest: '{}' ({} chars)\n",
        s.longest_word,
        s.longest_word.chars().count()
    ));
    r.push_str(&format!(
        "  Shortest: '{}' ({} chars)\n",
        s.shortest_word,
        s.shortest_word.chars().count()
    ));
    r.push_str(&format!("  Average length: {:.2}\n", s.average_word_length));
    r.push_str(&format!("  All lowercase: {}\n", yes_no(s.all_lowercase)));
    r.push_str(&format!("  Has long words (>7): {}\n", yes_no(s.any_word_longer_than_7)));
    r.push_str(&format!("  Start with vowel: {}\n", s.words_starting_with_vowel));
    if let Some((w, c)) = &s.most_common_word {
        r.push_str(&format!("  Most common: '{w}' ({c}x)\n"));
    }
    if !s.palindrome_words.is_empty() {
        r.push_str(&format!("  Palindromes: {}\n", s.palindrome_words.join(", ")));
    }

    r.push_str("\nLENGTH DISTRIBUTION:\n");
    r.push_str(&length_histogram(s));

    if !s.top_words.is_empty() {
        r.push_str("\nTOP WORDS:\n");
        for (i, (w, c)) in s.charted_words().iter().enumerate() {
            r.push_str(&format!("  {}. '{w}' - {c}x\n", i + 1));
        }
    }
    r.push_str(&format!("\n{RULE}\n"));
    r
}

fn yes_no(x: bool) -> &'static str {
    if x {
        "Yes"
    } else {
        "No"
    }
}

/// one row per word length, shortest first
#[must_use]
pub fn length_histogram(s: &TextStatistics) -> String {
    let Some(max) = s.word_length_distribution.values().copied().max() else {
        return NO_DATA.to_string();
    };
    s.word_length_distribution
        .iter()
        .map(|(len, count)| {
            format!("  {len:2} chars: {} ({count})\n", bar(*count as f64, max as f64))
        })
        .collect()
}

/// the most frequent words, labels cut to `LABEL_WIDTH` columns
#[must_use]
pub fn word_frequency_chart(s: &TextStatistics) -> String {
    let words = s.charted_words();
    let Some(max) = words.iter().map(|x| x.1).max() else {
        return NO_DATA.to_string();
    };
    let mut r = format!("Top {} Most Frequent Words\n", words.len());
    for (w, c) in words {
        let label = w.unicode_pad(LABEL_WIDTH, Alignment::Right, true);
        r.push_str(&format!("{label} | {} {c}\n", bar(*c as f64, max as f64)));
    }
    r
}

/// share of letters, digits, spaces and everything else
#[must_use]
pub fn char_type_chart(s: &TextStatistics) -> String {
    if s.character_count == 0 {
        return NO_DATA.to_string();
    }
    let mut r = String::from("Character Type Distribution\n");
    for (label, count) in s.char_type_breakdown() {
        let p = percent(count, s.character_count);
        if p > 0.0 {
            r.push_str(&format!("{label:>8} | {} {p:.1}%\n", bar(p, 100.0)));
        }
    }
    r
}

/// score of every shift in shift order, with the winner marked
#[must_use]
pub fn shift_chart(d: &DecodeResult) -> String {
    if d.attempts.is_empty() {
        return NO_DATA.to_string();
    }
    let scores = d.scores_by_shift();
    let max = scores.iter().copied().fold(0.0, f64::max);
    let mut r = String::from("Caesar Cipher Shift Analysis\n");
    for (shift, score) in scores.iter().enumerate() {
        let b = bar(*score, max);
        let pad = BAR_WIDTH.saturating_sub(b.width());
        let mark = if d.best_shift == Some(shift as u8) { " <- best" } else { "" };
        r.push_str(&format!("{shift:2} | {b}{:pad$} {score:.2}{mark}\n", ""));
    }
    r
}
