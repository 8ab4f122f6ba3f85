//! The command line tool `shiftcrack` breaks Caesar shift ciphers by brute force
//! and reports statistics about the recovered text.
//! The library underneath is plain functions over strings, safe to call from any thread.
//!
//! ```
//! use shiftcrack::{decode, shift, analyze};
//! let secret = shift("meet me at the docks, this is secret", 7);
//! let found = decode(&secret);
//! assert_eq!(found.best_shift, Some(7));
//! let stats = analyze(found.best_plaintext.as_deref().unwrap_or(""));
//! assert_eq!(stats.word_count, 8);
//! ```

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,

//    clippy::all,
//    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]

pub mod decode;
pub mod files;
pub mod history;
pub mod report;
pub mod score;
pub mod shift;
pub mod stats;
pub mod util;

#[doc(inline)]
pub use crate::decode::{decode, decode_verbose, Attempt, DecodeResult};
#[doc(inline)]
pub use crate::score::{looks_english, score, score_of, EnglishCheck};
#[doc(inline)]
pub use crate::shift::{shift, shift_between, unshift};
#[doc(inline)]
pub use crate::stats::{analyze, TextStatistics};
#[doc(inline)]
pub use crate::util::{Error, Result};
