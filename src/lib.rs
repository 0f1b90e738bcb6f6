//! unused-i18n - find unused keys in i18n dictionaries
//!
//! Walks a project tree, scans every file of the configured formats
//! (default `.html` and `.ts`) line by line, and reports the top-level keys
//! of a JSON dictionary that never occur in any of them. Matching is plain
//! substring containment.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, rendering, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key loading, file enumeration and usage scanning
//! - `error`: Fatal error kinds of a run
//! - `issues`: Recoverable scan warnings
//! - `rules`: Unused key detection over a finished scan
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use unused_i18n::core::{FinderContext, FinderOptions};
//! use unused_i18n::rules::unused::check_unused_keys_report;
//!
//! let ctx = FinderContext::new(FinderOptions {
//!     root: PathBuf::from("./src"),
//!     keys_path: PathBuf::from("./src/assets/i18n/en.json"),
//!     extensions: vec![".html".to_string(), ".ts".to_string()],
//!     ignores: Vec::new(),
//!     verbose: false,
//! })?;
//!
//! for key in check_unused_keys_report(&ctx).unused_keys {
//!     println!("{}", key);
//! }
//! # Ok::<(), unused_i18n::error::FinderError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod rules;
