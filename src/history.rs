//! A record of successful decryptions, for display

use crate::decode::DecodeResult;
use crate::util::preview;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// display columns kept of each text
pub const PREVIEW_WIDTH: usize = 50;
/// entries shown by default
pub const RECENT: usize = 20;

/// One successful decryption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// when it happened
    pub time: DateTime<Local>,
    /// the winning shift
    pub shift: u8,
    /// start of the ciphertext
    pub encrypted: String,
    /// start of the plaintext
    pub decrypted: String,
}

impl HistoryEntry {
    /// new entry, stamped now
    #[must_use]
    pub fn new(ciphertext: &str, plaintext: &str, shift: u8) -> Self {
        Self {
            time: Local::now(),
            shift,
            encrypted: preview(ciphertext, PREVIEW_WIDTH),
            decrypted: preview(plaintext, PREVIEW_WIDTH),
        }
    }
    /// `HH:MM:SS  shift  plaintext`
    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "{}  {:2}  {}",
            self.time.format("%H:%M:%S"),
            self.shift,
            self.decrypted
        )
    }
}

/// Successful decryptions, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// new, empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Remember a decode result. Results without a winner are not recorded.
    pub fn record(&mut self, ciphertext: &str, result: &DecodeResult) -> Option<&HistoryEntry> {
        let (Some(shift), Some(plain)) = (result.best_shift, &result.best_plaintext) else {
            return None;
        };
        self.entries.push(HistoryEntry::new(ciphertext, plain, shift));
        self.entries.last()
    }
    /// add an entry made elsewhere
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
    /// the last `n` entries, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(n)
    }
    /// all entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
    /// number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// forget everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::shift::shift;

    #[test]
    fn long_text_is_cut() {
        let e = HistoryEntry::new(&"q".repeat(80), &"y".repeat(PREVIEW_WIDTH + 1), 0);
        assert_eq!(e.encrypted, format!("{}...", "q".repeat(PREVIEW_WIDTH)));
        assert_eq!(e.decrypted, format!("{}...", "y".repeat(PREVIEW_WIDTH)));
    }

    #[test]
    fn only_successes_recorded() {
        let mut h = History::new();
        assert!(h.record("xqzvbk jjww", &decode("xqzvbk jjww")).is_none());
        assert!(h.is_empty());

        let c = shift("meet at the docks", 5);
        let e = h.record(&c, &decode(&c)).cloned();
        assert_eq!(e.map(|e| (e.shift, e.decrypted)), Some((5, "meet at the docks".to_string())));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut h = History::new();
        for k in 1..=4 {
            let c = shift("this is the secret", k);
            h.record(&c, &decode(&c));
        }
        let shifts: Vec<u8> = h.recent(2).map(|e| e.shift).collect();
        assert_eq!(shifts, vec![4, 3]);
        assert_eq!(h.recent(RECENT).count(), 4);
        h.clear();
        assert_eq!(h.recent(RECENT).count(), 0);
    }

    #[test]
    fn line_format() {
        let e = HistoryEntry::new("Wkh", "The", 3);
        let l = e.line();
        assert!(l.ends_with("   3  The"));
        assert_eq!(l.len(), "HH:MM:SS".len() + "   3  The".len());
    }
}
