//! Usage scanner: find every line in which each dictionary key occurs.
//!
//! Matching is plain substring containment. A key counts once per line no
//! matter how often it repeats inside that line, and `"user"` is found inside
//! `"username"`. All keys are matched in one pass per line with an
//! Aho-Corasick automaton in overlapping mode, which reports exactly the set
//! of keys a per-key `line.contains(key)` test would.

use std::{
    fs,
    path::{Path, PathBuf},
};

use aho_corasick::AhoCorasick;
use rayon::prelude::*;

use crate::{
    core::{KeySet, UsageMap, record_usage},
    issues::{ScanWarning, ScanWarningKind},
};

/// Output of scanning all candidate files.
#[derive(Debug, Default)]
pub struct UsageScan {
    pub usages: UsageMap,
    /// Files that were skipped, in candidate order.
    pub warnings: Vec<ScanWarning>,
}

/// Multi-key substring matcher built once per run.
pub struct KeyMatcher<'a> {
    keys: &'a KeySet,
    /// Indices into `keys` of the non-empty keys, by automaton pattern id.
    pattern_keys: Vec<usize>,
    /// Indices of empty keys, which are contained in every line.
    empty_keys: Vec<usize>,
    /// `None` if the automaton could not be built; matching falls back to
    /// testing each key in turn.
    automaton: Option<AhoCorasick>,
}

impl<'a> KeyMatcher<'a> {
    pub fn new(keys: &'a KeySet) -> Self {
        let (empty_keys, pattern_keys): (Vec<usize>, Vec<usize>) =
            (0..keys.len()).partition(|&i| keys.keys()[i].is_empty());

        let automaton = if pattern_keys.is_empty() {
            None
        } else {
            AhoCorasick::new(pattern_keys.iter().map(|&i| &keys.keys()[i])).ok()
        };

        Self {
            keys,
            pattern_keys,
            empty_keys,
            automaton,
        }
    }

    /// Indices of all keys contained in `line`, ascending and without duplicates.
    pub fn matching_keys(&self, line: &str) -> Vec<usize> {
        let mut matched = self.empty_keys.clone();

        match &self.automaton {
            Some(ac) => {
                matched.extend(
                    ac.find_overlapping_iter(line)
                        .map(|m| self.pattern_keys[m.pattern().as_usize()]),
                );
            }
            None => {
                matched.extend(
                    self.pattern_keys
                        .iter()
                        .copied()
                        .filter(|&i| line.contains(self.keys.keys()[i].as_str())),
                );
            }
        }

        matched.sort_unstable();
        matched.dedup();
        matched
    }

    /// Scan a single file's content, recording one appearance per matching line.
    pub fn scan_content(&self, file_path: &str, content: &str) -> UsageMap {
        let mut usages = UsageMap::new();
        for (index, line) in lines_inclusive(content).enumerate() {
            for key_index in self.matching_keys(line) {
                let key = &self.keys.keys()[key_index];
                record_usage(&mut usages, key, file_path, index + 1, line);
            }
        }
        usages
    }

    /// Read and scan one file.
    ///
    /// The file is opened by its real path, so names that are not valid
    /// UTF-8 are read too; only the recorded name is converted lossily.
    /// A file that cannot be read, or is not valid UTF-8, contributes no
    /// usages at all; the failure comes back as a warning.
    pub fn scan_file(&self, path: &Path) -> Result<UsageMap, ScanWarning> {
        let file_path = path.to_string_lossy();
        let bytes = fs::read(path)
            .map_err(|e| ScanWarning::new(&*file_path, ScanWarningKind::Read, e))?;
        let content = String::from_utf8(bytes).map_err(|_| ScanWarning::encoding(&file_path))?;
        Ok(self.scan_content(&file_path, &content))
    }
}

/// Scan all candidate files for occurrences of the keys.
///
/// Files are processed in parallel. Each file's records are built on their
/// own and merged in candidate order once every file has been processed, so
/// the result is the same as a sequential scan.
pub fn scan_usages(files: &[PathBuf], keys: &KeySet) -> UsageScan {
    let matcher = KeyMatcher::new(keys);

    let results: Vec<Result<UsageMap, ScanWarning>> = files
        .par_iter()
        .map(|file_path| matcher.scan_file(file_path))
        .collect();

    let mut scan = UsageScan::default();
    for result in results {
        match result {
            Ok(file_usages) => {
                for (key, record) in file_usages {
                    scan.usages.entry(key).or_default().append(record);
                }
            }
            Err(warning) => scan.warnings.push(warning),
        }
    }
    scan
}

/// Characters that end a line, besides the `\r\n` pair.
const LINE_TERMINATORS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines, each keeping its terminator.
///
/// `\r\n` and each of [`LINE_TERMINATORS`] end a line: besides `\n` and
/// `\r` that covers vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line and paragraph separators. A final
/// line without a terminator is still yielded; empty input yields nothing.
pub fn lines_inclusive(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.char_indices().find(|(_, c)| LINE_TERMINATORS.contains(c)) {
            Some((pos, '\r')) if rest[pos..].starts_with("\r\n") => pos + 2,
            Some((pos, c)) => pos + c.len_utf8(),
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}
