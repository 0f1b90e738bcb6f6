//! Recoverable problems found while walking and scanning a project.
//!
//! None of these abort a run. They are collected on the finder context
//! and rendered as warnings by the CLI; they never change the exit status.

use std::fmt;

use serde::Serialize;

use crate::error::FinderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanWarningKind {
    /// A directory entry could not be accessed during the walk.
    Access,
    /// A candidate file could not be read.
    Read,
    /// A candidate file is not valid UTF-8.
    Encoding,
}

impl fmt::Display for ScanWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanWarningKind::Access => "access",
            ScanWarningKind::Read => "read",
            ScanWarningKind::Encoding => "encoding",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanWarning {
    pub path: String,
    pub kind: ScanWarningKind,
    pub error: String,
}

impl ScanWarning {
    pub fn new(path: impl Into<String>, kind: ScanWarningKind, error: impl ToString) -> Self {
        Self {
            path: path.into(),
            kind,
            error: error.to_string(),
        }
    }

    pub fn encoding(path: &str) -> Self {
        let error = FinderError::Encoding { path: path.into() };
        Self::new(path, ScanWarningKind::Encoding, error)
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ScanWarningKind::Encoding => write!(f, "{} (file skipped)", self.error),
            _ => write!(f, "{}: {}", self.path, self.error),
        }
    }
}
