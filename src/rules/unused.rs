//! Unused translation key detection rule.
//!
//! A key is unused when the scan recorded no usage for it at all.

use serde::Serialize;

use crate::core::{FinderContext, KeySet, UsageMap};

/// Unused keys of one run, with the figures printed under the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedKeysReport {
    /// Sorted by byte order.
    pub unused_keys: Vec<String>,
    pub files_scanned: usize,
    pub unused_count: usize,
    pub total_keys: usize,
    pub used_count: usize,
    /// Dictionary file, echoed for context.
    pub keys_path: String,
}

pub fn check_unused_keys_report(ctx: &FinderContext) -> UnusedKeysReport {
    check_unused_keys(&ctx.keys, ctx.usages(), ctx.files.len())
}

/// Compute `keys - used keys`.
///
/// # Arguments
/// * `keys` - The full key universe
/// * `usages` - Usage records collected by the scanner
/// * `files_scanned` - Number of candidate files, for the summary
pub fn check_unused_keys(
    keys: &KeySet,
    usages: &UsageMap,
    files_scanned: usize,
) -> UnusedKeysReport {
    let mut unused_keys: Vec<String> = keys
        .iter()
        .filter(|key| !usages.contains_key(*key))
        .map(str::to_string)
        .collect();
    unused_keys.sort();

    let unused_count = unused_keys.len();
    UnusedKeysReport {
        unused_keys,
        files_scanned,
        unused_count,
        total_keys: keys.len(),
        used_count: keys.len() - unused_count,
        keys_path: keys.path().to_string_lossy().to_string(),
    }
}
