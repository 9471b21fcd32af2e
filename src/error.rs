use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of failures, used for reporting and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    Unexpected,
}

impl ErrorKind {
    /// Process exit code for this kind of failure.
    ///
    /// Code 2 is left to clap for usage errors.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Unexpected => 1,
            ErrorKind::NotFound => 3,
            ErrorKind::Parse => 4,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("'{}' was not found", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("'{}' is not a valid JSON file", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{location} is not a plant record: {reason}")]
    InvalidRecord { location: String, reason: String },

    #[error("plant record {position} has no 'id' field")]
    MissingId { position: usize },

    #[error("plant record {position} has an unusable 'id': {reason}")]
    UnusableId { position: usize, reason: String },

    #[error("plant id '{id}' at record {position} was already used by record {first}")]
    DuplicateId { id: String, first: usize, position: usize },

    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}")]
    Serialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Parse { .. } => ErrorKind::Parse,
            _ => ErrorKind::Unexpected,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
