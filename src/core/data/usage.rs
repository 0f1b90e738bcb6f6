use std::collections::HashMap;

use serde::Serialize;

/// Usage records for all keys found at least once, indexed by key.
pub type UsageMap = HashMap<String, UsageRecord>;

/// Evidence that a key occurs in the scanned sources.
///
/// One appearance is recorded per matching line. `files`, `lines` and
/// `line_numbers` are parallel: entry `i` of each describes appearance `i`.
/// A key found on three lines of one file lists that file three times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub appearances: usize,
    pub files: Vec<String>,
    /// Raw line contents, including the line terminator as read.
    pub lines: Vec<String>,
    /// 1-based line numbers.
    pub line_numbers: Vec<usize>,
}

impl UsageRecord {
    pub fn push(&mut self, file: &str, line_number: usize, line: &str) {
        self.appearances += 1;
        self.files.push(file.to_string());
        self.lines.push(line.to_string());
        self.line_numbers.push(line_number);
    }

    /// Append every appearance of `other` after the ones already held.
    pub fn append(&mut self, other: UsageRecord) {
        self.appearances += other.appearances;
        self.files.extend(other.files);
        self.lines.extend(other.lines);
        self.line_numbers.extend(other.line_numbers);
    }

    /// Iterate `(file, line_number, line)` for each appearance.
    pub fn locations(&self) -> impl Iterator<Item = (&str, usize, &str)> {
        self.files
            .iter()
            .zip(&self.line_numbers)
            .zip(&self.lines)
            .map(|((file, number), line)| (file.as_str(), *number, line.as_str()))
    }
}

/// Record one appearance of `key`, creating its record on first sight.
pub fn record_usage(usages: &mut UsageMap, key: &str, file: &str, line_number: usize, line: &str) {
    if !usages.contains_key(key) {
        usages.insert(key.to_string(), UsageRecord::default());
    }
    if let Some(record) = usages.get_mut(key) {
        record.push(file, line_number, line);
    }
}
