//! Errors raised while reading input

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The word list could not be opened
    #[error("cannot open word list {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading a stream failed part way through
    #[error("read failed")]
    Read(#[from] io::Error),
    /// The word list held no usable words
    #[error("word list contains no valid {len}-letter words")]
    EmptyWordList { len: usize },
    /// A feedback record could not be parsed
    #[error("malformed feedback record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}
