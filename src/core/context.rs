use std::{cell::OnceCell, path::PathBuf};

use crate::{
    core::{
        KeySet, UsageMap,
        file_scanner::{ScanResult, scan_files},
        key_usage::{UsageScan, scan_usages},
        parsers::json::parse_key_file,
    },
    error::FinderResult,
    issues::ScanWarning,
};

/// Inputs for one finder run, already merged from CLI arguments, config
/// file and defaults.
#[derive(Debug, Clone)]
pub struct FinderOptions {
    /// Project root, walked recursively.
    pub root: PathBuf,
    /// JSON dictionary whose top-level keys are checked.
    pub keys_path: PathBuf,
    /// File extensions to scan, each with its leading dot.
    pub extensions: Vec<String>,
    /// Glob patterns or literal paths (relative to `root`) to skip.
    pub ignores: Vec<String>,
    pub verbose: bool,
}

/// State of a single run.
///
/// Every invocation builds its own context; nothing is shared between
/// contexts or survives one. The key set and candidate files are collected
/// eagerly so fatal errors surface before any scanning. The usage scan runs
/// on first access.
pub struct FinderContext {
    pub options: FinderOptions,

    /// Keys loaded from the dictionary file. Never mutated.
    pub keys: KeySet,

    /// Candidate files, sorted.
    pub files: Vec<PathBuf>,

    /// Entries skipped while walking the root.
    walk_warnings: Vec<ScanWarning>,

    /// Usage records and per-file failures, filled on first access.
    usage_scan: OnceCell<UsageScan>,
}

impl FinderContext {
    /// Load the key set and enumerate candidate files.
    ///
    /// Both run concurrently. A dictionary error is reported in preference
    /// to a root error when both fail.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the dictionary file or the root directory is missing
    /// - `Parse` if the dictionary is not a JSON object
    pub fn new(options: FinderOptions) -> FinderResult<Self> {
        let (keys_result, scan_result) = rayon::join(
            || parse_key_file(&options.keys_path),
            || {
                scan_files(
                    &options.root,
                    &options.extensions,
                    &options.ignores,
                    options.verbose,
                )
            },
        );

        let keys = keys_result?;
        let ScanResult { files, warnings } = scan_result?;

        Ok(Self {
            options,
            keys,
            files,
            walk_warnings: warnings,
            usage_scan: OnceCell::new(),
        })
    }

    fn usage_scan(&self) -> &UsageScan {
        self.usage_scan
            .get_or_init(|| scan_usages(&self.files, &self.keys))
    }

    /// Usage records of every key found at least once (lazy).
    pub fn usages(&self) -> &UsageMap {
        &self.usage_scan().usages
    }

    /// All recoverable problems of the run: walk failures first, then files
    /// skipped during the usage scan.
    pub fn warnings(&self) -> Vec<&ScanWarning> {
        self.walk_warnings
            .iter()
            .chain(self.usage_scan().warnings.iter())
            .collect()
    }
}
