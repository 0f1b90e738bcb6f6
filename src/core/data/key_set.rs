use std::path::{Path, PathBuf};

/// The key universe loaded from one dictionary file.
///
/// Keys keep the order in which they appear in the file. Duplicate JSON
/// object keys have already collapsed to one during parsing, so every key
/// is unique. Sorting happens only when a report is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    path: PathBuf,
    keys: Vec<String>,
}

impl KeySet {
    pub fn new(path: impl Into<PathBuf>, keys: Vec<String>) -> Self {
        Self {
            path: path.into(),
            keys,
        }
    }

    /// Path of the dictionary file the keys were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
