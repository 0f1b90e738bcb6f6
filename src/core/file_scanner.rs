use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::{
    error::{FinderError, FinderResult},
    issues::{ScanWarning, ScanWarningKind},
};

/// macOS Finder metadata, never scanned whatever its extension.
pub const OS_METADATA_FILE: &str = ".DS_Store";

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidate files, sorted.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed during the walk.
    pub warnings: Vec<ScanWarning>,
}

/// Recursively collect candidate files under `root`.
///
/// A file is a candidate when its extension is in `extensions`, its name is
/// not [`OS_METADATA_FILE`], and it matches none of `ignore_patterns`.
/// Symbolic links are neither followed nor yielded. Entries that cannot be
/// read are skipped and reported as warnings.
///
/// # Errors
///
/// [`FinderError::NotFound`] if `root` does not exist, is not a directory or
/// cannot be listed.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> FinderResult<ScanResult> {
    let metadata = fs::metadata(root).map_err(|e| FinderError::not_found(root, e))?;
    if !metadata.is_dir() {
        return Err(FinderError::not_found(
            root,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }
    // Only entries below the root degrade to warnings
    fs::read_dir(root).map_err(|e| FinderError::not_found(root, e))?;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| root.to_string_lossy().to_string());
                warnings.push(ScanWarning::new(path, ScanWarningKind::Access, &e));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if is_candidate_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(ScanResult { files, warnings })
}

/// The extension of a file name the way `os.path.splitext` splits it:
/// from the last `.` to the end, leading dots ignored, empty if none.
///
/// `"app.ts"` gives `".ts"`, `"a.b.html"` gives `".html"`, `".env"` gives `""`
/// and `"notes."` gives `"."`.
pub fn file_extension(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(idx) => &file_name[stem_start + idx..],
        None => "",
    }
}

fn is_candidate_file(path: &Path, extensions: &[String]) -> bool {
    let Some(file_name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    if file_name == OS_METADATA_FILE {
        return false;
    }
    let extension = file_extension(&file_name);
    extensions.iter().any(|e| e == extension)
}
