//! Misc utility stuff

use fs_err as fs;
use std::error;
use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::path::Path;
use std::{fmt, str};
use unicode_truncate::UnicodeTruncateStr;

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::util::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::util::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::util::Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom shiftcrack error
    Error(String),
    /// an argument that can't mean anything, e.g. a shift that isn't a number
    InvalidArgument(String),
    /// pass through ParseIntError
    ParseIntError(std::num::ParseIntError),
    /// pass through io::Error
    IoError(std::io::Error),
    /// pass through serde_json::Error
    JsonError(serde_json::Error),
    /// pass through FromUtf8Error
    FromUtf8Error(std::string::FromUtf8Error),
    /// be an error, but don't report anything
    Silent,
}
/// Result type for shiftcrack
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Error::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
    /// return true if this error should be treated as an error, but silently
    pub const fn silent(&self) -> bool {
        matches!(self, Error::Silent)
    }
}

err_type!(serde_json::Error, Error::JsonError);
err_type!(std::string::FromUtf8Error, Error::FromUtf8Error);
err_type!(std::io::Error, Error::IoError);
err_type!(std::num::ParseIntError, Error::ParseIntError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Error(s) => write!(f, "{}", s)?,
            Error::InvalidArgument(s) => write!(f, "InvalidArgument : {}", s)?,
            Error::ParseIntError(s) => write!(f, "ParseIntError : {}", s)?,
            Error::IoError(s) => write!(f, "IoError : {}", s)?,
            Error::JsonError(s) => write!(f, "JsonError : {}", s)?,
            Error::FromUtf8Error(s) => write!(f, "FromUtf8Error : {}", s)?,
            Error::Silent => write!(f, "Silent")?,
        }
        Ok(())
    }
}

/// parse a shift amount. Any integer is fine, it gets reduced mod 26 later.
pub fn parse_shift(spec: &str) -> Result<i64> {
    spec.trim().parse::<i64>().map_err(|_| {
        Error::InvalidArgument(format!("Shift must be an integer, not '{}'", spec))
    })
}

/// parse a count, like `--top 5`
pub fn parse_count(spec: &str, what: &str) -> Result<usize> {
    spec.trim().parse::<usize>().map_err(|_| {
        Error::InvalidArgument(format!("{what} must be a non-negative integer, not '{spec}'"))
    })
}

/// `text` cut to `width` display columns, with "..." if anything was lost
#[must_use]
pub fn preview(text: &str, width: usize) -> String {
    let (head, _) = text.unicode_truncate(width);
    if head.len() < text.len() {
        format!("{head}...")
    } else {
        head.to_string()
    }
}

/// Does `ch` separate words. Whitespace, plus the ASCII
/// file, group, record and unit separators.
#[must_use]
pub fn is_word_break(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// The non-empty runs of `text` between word breaks
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_break).filter(|w| !w.is_empty())
}

/// Output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name. "-" is stdout, "--" is stderr
pub fn get_writer<P: AsRef<Path>>(name: P) -> Result<Outfile> {
    let name = name.as_ref().as_os_str();
    let inner: Box<dyn Write> = {
        if name == OsStr::new("-") {
            Box::new(io::stdout())
        } else if name == OsStr::new("--") {
            Box::new(io::stderr())
        } else {
            Box::new(fs::File::create(name)?)
        }
    };
    Ok(io::BufWriter::new(inner))
}

/// Input file type
pub type Infile = io::BufReader<Box<dyn Read>>;

/// Make an Infile from a file name. "-" is stdin.
pub fn get_reader(name: &str) -> Result<Infile> {
    let inner: Box<dyn Read> = {
        if name == "-" {
            Box::new(io::stdin())
        } else {
            Box::new(fs::File::open(name)?)
        }
    };
    Ok(io::BufReader::new(inner))
}

/// read the whole of a named file, or stdin, as text
pub fn read_all(name: &str) -> Result<String> {
    let mut f = get_reader(name)?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}
