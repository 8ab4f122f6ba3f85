//! global settings and command line arguments available to all tools

use crate::arg;
use crate::args;
use crate::args::{ArgSpec, ArgValue};
use shiftcrack::files::FileStore;
use shiftcrack::score::DEFAULT_MIN_MATCHES;
use shiftcrack::util::{parse_count, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const A: [ArgSpec; 4] = [
    arg! {"data-dir", "", "Dir", "Base directory for saved files (default '.')"},
    arg! {"min-matches", "", "Number", "Common words needed before a shift looks like English"},
    arg! {"log-level", "", "Level", "error, warn, info, debug or trace. Overrides RUST_LOG"},
    arg! {"verbose", "v", "", "Report each promising shift as it is tried"},
];

pub fn global_args() -> &'static [ArgSpec] {
    &A
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// files are saved under `data_dir/data`
    pub data_dir: PathBuf,
    /// threshold for the looks-like-English diagnostic
    pub min_matches: usize,
    /// explicit log filter, else RUST_LOG, else warnings only
    pub log_level: Option<String>,
    /// show diagnostics while decoding
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            min_matches: DEFAULT_MIN_MATCHES,
            log_level: None,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn help() {
        for x in &A {
            eprintln!("{:12} {} {}", x.name, x.value, x.help);
        }
    }
    pub fn consume(&mut self, args: &[ArgValue]) -> Result<()> {
        for x in args {
            if x.name == "data-dir" {
                self.data_dir = PathBuf::from(&x.value);
            } else if x.name == "min-matches" {
                self.min_matches = parse_count(&x.value, "--min-matches")?;
            } else if x.name == "log-level" {
                self.log_level = Some(x.value.clone());
            } else if x.name == "verbose" {
                self.verbose = true;
            } else {
                unreachable!();
            }
        }
        Ok(())
    }
    /// the filter for log output
    pub fn filter(&self) -> EnvFilter {
        if let Some(level) = &self.log_level {
            EnvFilter::new(level)
        } else if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    }
    /// Send log output to stderr. Only the first call does anything.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
    /// the file store under `data_dir`
    pub fn store(&self) -> Result<FileStore> {
        FileStore::new(&self.data_dir)
    }
}
