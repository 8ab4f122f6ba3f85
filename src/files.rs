//! Reading ciphertext and saving results under a data directory
//!
//! Layout, relative to the base directory :
//! ```text
//! data/encrypted_message.txt   default ciphertext
//! data/decrypted/*.txt         saved plaintext
//! data/*.json                  reports and sessions
//! data/history.jsonl           decode history, one entry per line
//! data/operations.log          what we did, when
//! ```
//! Every failure comes back as an Error with a message fit for a user.

use crate::history::{History, HistoryEntry};
use crate::shift::shift;
use crate::stats::TextStatistics;
use crate::util::{Error, Result};
use chrono::Local;
use fs_err as fs;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";
const DECRYPTED_DIR: &str = "decrypted";
const CIPHERTEXT_FILE: &str = "encrypted_message.txt";
const LOG_FILE: &str = "operations.log";
const HISTORY_FILE: &str = "history.jsonl";
const FILE_STAMP: &str = "%Y%m%d_%H%M%S";
const LOG_STAMP: &str = "%Y-%m-%d %H:%M:%S";

lazy_static! {
    static ref BAD_CHARS: Regex = Regex::new(r#"[<>:"/\\|?*]"#).unwrap();
}

/// Replace characters that are illegal in file names with `_`,
/// trim leading and trailing spaces and dots, and never return empty.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let clean = BAD_CHARS.replace_all(name, "_");
    let clean = clean.trim_matches(|c: char| c == ' ' || c == '.');
    if clean.is_empty() {
        "unnamed".to_string()
    } else {
        clean.to_string()
    }
}

/// `name` with extension `ext` (with or without the dot) added if missing
#[must_use]
pub fn ensure_extension(name: &str, ext: &str) -> String {
    let ext = if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    };
    if name.ends_with(&ext) {
        name.to_string()
    } else {
        format!("{name}{ext}")
    }
}

#[derive(Serialize)]
struct Report<'a> {
    timestamp: String,
    analysis: &'a TextStatistics,
}

#[derive(Serialize)]
struct Session<'a> {
    export_time: String,
    encrypted: &'a str,
    decrypted: &'a str,
    shift: Option<u8>,
    analysis: &'a TextStatistics,
}

/// Files belonging to one base directory
#[derive(Debug, Clone)]
pub struct FileStore {
    data: PathBuf,
    decrypted: PathBuf,
}

impl FileStore {
    /// Open the store under `base`, creating the directories if needed
    pub fn new<P: AsRef<Path>>(base: P) -> Result<Self> {
        let data = base.as_ref().join(DATA_DIR);
        let decrypted = data.join(DECRYPTED_DIR);
        fs::create_dir_all(&decrypted)?;
        Ok(Self { data, decrypted })
    }
    /// where reports and sessions go
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data
    }
    /// where plaintext goes
    #[must_use]
    pub fn decrypted_dir(&self) -> &Path {
        &self.decrypted
    }
    /// ciphertext read when no file is named
    #[must_use]
    pub fn default_ciphertext(&self) -> PathBuf {
        self.data.join(CIPHERTEXT_FILE)
    }
    /// the operations log
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data.join(LOG_FILE)
    }
    fn history_path(&self) -> PathBuf {
        self.data.join(HISTORY_FILE)
    }

    /// Append to the operations log. Failure to log is not a failure.
    fn log(&self, op: &str, details: &str) {
        if op == "ERROR" {
            tracing::warn!("{details}");
        } else {
            tracing::info!(op, "{details}");
        }
        let line = format!("[{}] {op}: {details}\n", Local::now().format(LOG_STAMP));
        let done = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.log_path())
            .and_then(|mut f| f.write_all(line.as_bytes()));
        if let Err(e) = done {
            tracing::debug!("can't write operations log : {e}");
        }
    }
    /// log and return a failure
    fn fail<T>(&self, msg: String) -> Result<T> {
        self.log("ERROR", &msg);
        Err(Error::Error(msg))
    }

    /// Read ciphertext from `path`, or from the default file.
    /// The text is trimmed; empty content is an error.
    pub fn read_ciphertext(&self, path: Option<&Path>) -> Result<(String, PathBuf)> {
        let path = path.map_or_else(|| self.default_ciphertext(), Path::to_path_buf);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return self.fail(format!("File not found: {}", path.display()));
            }
            Err(e) => return self.fail(format!("Error reading: {e}")),
        };
        let content = content.trim();
        if content.is_empty() {
            return self.fail(format!("File is empty: {}", path.display()));
        }
        self.log("READ", &format!("Read from {}", path.display()));
        Ok((content.to_string(), path))
    }

    /// Save plaintext, with a header naming the shift and the date.
    /// Default file name is `decrypted_shift<k>_<stamp>.txt`.
    pub fn save_decrypted(&self, text: &str, shift: u8, filename: Option<&str>) -> Result<PathBuf> {
        let now = Local::now();
        let name = match filename {
            Some(f) => ensure_extension(&sanitize_filename(f), "txt"),
            None => format!("decrypted_shift{shift}_{}.txt", now.format(FILE_STAMP)),
        };
        let path = self.decrypted.join(name);
        let content = format!(
            "DECRYPTED MESSAGE\n================\nShift Used: {shift}\nDate: {}\n================\n\n{text}",
            now.format(LOG_STAMP)
        );
        if let Err(e) = fs::write(&path, content) {
            return self.fail(format!("Save failed: {e}"));
        }
        self.log("SAVE", &format!("Saved to {}", path.display()));
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T, what: &str) -> Result<()> {
        let done = serde_json::to_string_pretty(value)
            .map_err(Error::from)
            .and_then(|s| fs::write(path, s).map_err(Error::from));
        match done {
            Ok(()) => Ok(()),
            Err(e) => self.fail(format!("Failed to save {what}: {e}")),
        }
    }

    /// Save statistics as `{"timestamp": ..., "analysis": {...}}`.
    /// Default file name is `analysis_<stamp>.json`.
    pub fn save_report(&self, stats: &TextStatistics, filename: Option<&str>) -> Result<PathBuf> {
        let now = Local::now();
        let name = match filename {
            Some(f) => ensure_extension(&sanitize_filename(f), "json"),
            None => format!("analysis_{}.json", now.format(FILE_STAMP)),
        };
        let path = self.data.join(name);
        let report = Report {
            timestamp: now.to_rfc3339(),
            analysis: stats,
        };
        self.write_json(&path, &report, "analysis")?;
        self.log("SAVE", &format!("Analysis saved to {}", path.display()));
        Ok(path)
    }

    /// Save everything about one decryption to `session_<stamp>.json`
    pub fn export_session(
        &self,
        encrypted: &str,
        decrypted: &str,
        shift: Option<u8>,
        stats: &TextStatistics,
    ) -> Result<PathBuf> {
        let now = Local::now();
        let path = self.data.join(format!("session_{}.json", now.format(FILE_STAMP)));
        let session = Session {
            export_time: now.to_rfc3339(),
            encrypted,
            decrypted,
            shift,
            analysis: stats,
        };
        self.write_json(&path, &session, "session")?;
        self.log("EXPORT", &format!("Session exported to {}", path.display()));
        Ok(path)
    }

    /// Saved plaintext files, newest name first. Trouble listing gives an empty list.
    #[must_use]
    pub fn list_decrypted(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.decrypted) {
            Ok(e) => e,
            Err(e) => {
                self.log("ERROR", &format!("List failed: {e}"));
                return Vec::new();
            }
        };
        let mut ret: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|x| x == "txt"))
            .collect();
        ret.sort_by(|a, b| b.cmp(a));
        ret
    }

    /// Write `text`, shifted by `shift`, to the default ciphertext file
    pub fn create_sample(&self, text: &str, shift_by: i64) -> Result<PathBuf> {
        let path = self.default_ciphertext();
        if let Err(e) = fs::write(&path, shift(text, shift_by)) {
            return self.fail(format!("Failed to create sample: {e}"));
        }
        self.log("CREATE", &format!("Sample file with shift {shift_by}"));
        Ok(path)
    }

    /// Add one entry to the saved history
    pub fn append_history(&self, entry: &HistoryEntry) -> Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let mut f = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.history_path())?;
        f.write_all(line.as_bytes())?;
        Ok(())
    }

    /// The saved history. No file means no history.
    /// Lines that can't be parsed are skipped.
    pub fn load_history(&self) -> Result<History> {
        let f = match fs::File::open(self.history_path()) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(History::new()),
            Err(e) => return Err(e.into()),
        };
        let mut ret = History::new();
        for line in io::BufReader::new(f).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryEntry>(&line) {
                Ok(e) => ret.push(e),
                Err(e) => tracing::warn!("skipping bad history line : {e}"),
            }
        }
        Ok(ret)
    }

    /// Forget the saved history
    pub fn clear_history(&self) -> Result<()> {
        match fs::remove_file(self.history_path()) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => {
                self.log("CLEAR", "History cleared");
                Ok(())
            }
        }
    }
}
