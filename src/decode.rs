//! Break a Caesar cipher by trying every shift.

use crate::score::{looks_english, score};
use crate::shift::{unshift, ALPHABET_LEN};
use crate::util::preview;
use serde::Serialize;
use std::cmp::Ordering;

/// characters of plaintext shown in diagnostics
const PREVIEW_WIDTH: usize = 50;

/// One decryption attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attempt {
    /// shift that was undone
    pub shift: u8,
    /// resulting text
    pub plaintext: String,
    /// Englishness of `plaintext`
    pub score: f64,
}

impl Attempt {
    /// best first, lowest shift breaking ties
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(self.shift.cmp(&other.shift))
    }
}

/// Everything learned from one call to `decode`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeResult {
    /// winning shift, `None` if no shift scored above zero
    pub best_shift: Option<u8>,
    /// plaintext for `best_shift`
    pub best_plaintext: Option<String>,
    /// all 26 attempts, best first
    pub attempts: Vec<Attempt>,
}

impl DecodeResult {
    /// did any shift look like English at all
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.best_shift.is_some()
    }
    /// score of the winner, 0.0 if none
    #[must_use]
    pub fn best_score(&self) -> f64 {
        match self.best_shift {
            Some(s) => self.score_for(s),
            None => 0.0,
        }
    }
    /// score of a particular shift
    #[must_use]
    pub fn score_for(&self, shift: u8) -> f64 {
        self.attempts
            .iter()
            .find(|a| a.shift == shift)
            .map_or(0.0, |a| a.score)
    }
    /// scores indexed by shift, for plotting
    #[must_use]
    pub fn scores_by_shift(&self) -> [f64; ALPHABET_LEN as usize] {
        let mut ret = [0.0; ALPHABET_LEN as usize];
        for a in &self.attempts {
            ret[a.shift as usize] = a.score;
        }
        ret
    }
}

/// try all shifts, optionally reporting along the way
fn run(ciphertext: &str, diag: Option<usize>) -> DecodeResult {
    let mut attempts = Vec::with_capacity(ALPHABET_LEN as usize);
    let mut best_score = 0.0;
    let mut best: Option<usize> = None;
    for s in 0..ALPHABET_LEN {
        let candidate = unshift(ciphertext, i64::from(s));
        let sc = score(&candidate);
        if let Some(min_matches) = diag {
            let check = looks_english(&candidate, min_matches);
            if check.looks_english || s == 0 {
                tracing::debug!(
                    shift = s,
                    matches = check.matches,
                    score = sc,
                    "{}",
                    preview(&candidate, PREVIEW_WIDTH)
                );
            }
        }
        // strict, so an equal score never displaces a lower shift
        if sc > best_score {
            best_score = sc;
            best = Some(attempts.len());
        }
        attempts.push(Attempt {
            shift: s,
            plaintext: candidate,
            score: sc,
        });
    }
    let (best_shift, best_plaintext) = match best {
        Some(i) => (Some(attempts[i].shift), Some(attempts[i].plaintext.clone())),
        None => (None, None),
    };
    if diag.is_some() {
        match best_shift {
            Some(s) => tracing::debug!(shift = s, score = best_score, "best shift"),
            None => tracing::debug!("no shift scored above zero"),
        }
    }
    attempts.sort_by(Attempt::rank);
    DecodeResult {
        best_shift,
        best_plaintext,
        attempts,
    }
}

/// Try every shift of `ciphertext` and keep the most English looking one.
///
/// A shift only wins by scoring strictly above 0.0, so text in which no
/// shift produces a single reference word reports `best_shift == None`.
#[must_use]
pub fn decode(ciphertext: &str) -> DecodeResult {
    run(ciphertext, None)
}

/// As `decode`, but log each promising shift at debug level.
/// `min_matches` sets how many reference words make a shift promising.
#[must_use]
pub fn decode_verbose(ciphertext: &str, min_matches: usize) -> DecodeResult {
    run(ciphertext, Some(min_matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::shift;

    const PLAIN: &str = "the message is secret and this is for the";

    #[test]
    fn finds_constructed_shift() {
        let c = shift(PLAIN, 7);
        let r = decode(&c);
        assert_eq!(r.best_shift, Some(7));
        assert_eq!(r.best_plaintext.as_deref(), Some(PLAIN));
        assert_eq!(r.attempts.len(), 26);
        assert_eq!(r.attempts[0].shift, 7);
        assert_eq!(r.best_score(), 1.0);
        assert!(r.is_found());
    }

    #[test]
    fn finds_every_shift() {
        for k in 0..26 {
            let r = decode(&shift("Meet me at the docks, this is secret.", k));
            assert_eq!(r.best_shift, Some(k as u8));
        }
    }

    #[test]
    fn no_signal() {
        let r = decode("xqzvbk jjww pfvv");
        assert_eq!(r.best_shift, None);
        assert_eq!(r.best_plaintext, None);
        assert_eq!(r.attempts.len(), 26);
        assert!(r.attempts.iter().all(|a| a.score == 0.0));
        assert!(!r.is_found());
        assert_eq!(r.best_score(), 0.0);
        // all tied at zero, so ranked by shift
        let shifts: Vec<u8> = r.attempts.iter().map(|a| a.shift).collect();
        assert_eq!(shifts, (0..26).collect::<Vec<u8>>());
    }

    #[test]
    fn empty_input() {
        let r = decode("");
        assert_eq!(r.best_shift, None);
        assert!(r.attempts.iter().all(|a| a.score == 0.0 && a.plaintext.is_empty()));
    }

    #[test]
    fn deterministic() {
        let c = shift("This is the secret message from the spy.", 13);
        assert_eq!(decode(&c), decode(&c));
        assert_eq!(decode(&c), decode_verbose(&c, 3));
    }

    #[test]
    fn ties_prefer_lower_shift() {
        // "to" at shift 0 and "by" at shift 3 ("eb" -> "by") both score 1/2
        let text = "to eb";
        assert_eq!(score(&unshift(text, 0)), 0.5);
        assert_eq!(score(&unshift(text, 3)), 0.5);
        let r = decode(text);
        assert_eq!(r.best_shift, Some(0));
        assert_eq!(r.attempts[0].shift, 0);
        assert_eq!(r.attempts[1].shift, 3);
        assert_eq!(r.attempts[1].score, 0.5);
    }

    #[test]
    fn ranking_is_sorted() {
        let r = decode(&shift("at the end of this is the message", 20));
        for w in r.attempts.windows(2) {
            assert!(w[0].score > w[1].score || (w[0].score == w[1].score && w[0].shift < w[1].shift));
        }
    }

    #[test]
    fn score_lookup() {
        let r = decode(&shift(PLAIN, 4));
        let by_shift = r.scores_by_shift();
        assert_eq!(by_shift[4], 1.0);
        assert_eq!(r.score_for(4), 1.0);
        for a in &r.attempts {
            assert_eq!(by_shift[a.shift as usize], a.score);
        }
    }
}
