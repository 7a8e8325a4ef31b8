//! Error types shared by the loader, the cut parser and the writer.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while turning the input into `CutRecord`s.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Input is not valid JSON, or `returns.cut` has the wrong shape.
    #[error("invalid JSON: {0}")]
    Json(serde_json::Error),

    /// A field required at a fixed nested location is absent.
    #[error("missing field `{pointer}`")]
    MissingField { pointer: &'static str },

    /// Character outside the token allow-list.
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { offset: usize, ch: char },

    #[error("expected {expected} at offset {offset}, found {found}")]
    Unexpected {
        offset: usize,
        expected: &'static str,
        found: String,
    },

    #[error("unknown action ordinal `{0}`")]
    UnknownAction(String),

    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    /// Wraps any error raised while reading the tuple at `index`.
    #[error("tuple {index}: {error}")]
    InTuple { index: usize, error: Box<ParseError> },
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Json(e)
    }
}

/// Top-level failure of a generator run.
///
/// Messages carry their cause inline; there is no source chain.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {error}", path.display())]
    Io { path: PathBuf, error: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            error,
        }
    }
}
