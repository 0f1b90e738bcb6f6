//! Typed failures of a finder run.
//!
//! `NotFound` and `Parse` abort a run before any scanning starts. `Encoding`
//! is only ever produced per file and is downgraded to a [`ScanWarning`]
//! by the scanner.
//!
//! [`ScanWarning`]: crate::issues::ScanWarning

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Path not found or not accessible: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse key file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("File is not valid UTF-8: {}", path.display())]
    Encoding { path: PathBuf },
}

impl FinderError {
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type FinderResult<T> = Result<T, FinderError>;
