//! Core scanning engine.
//!
//! The pipeline runs strictly forward:
//!
//! 1. `parsers::json` loads the key set from the dictionary file
//! 2. `file_scanner` walks the root and collects candidate files
//! 3. `key_usage` scans every candidate line by line for every key
//!
//! Steps 1 and 2 are independent and run concurrently. `context` owns the
//! state of one run; the unused-key computation lives in `rules`.
//!
//! ## Module Structure
//!
//! - `context`: Per-run state (`FinderContext`) and its options
//! - `data`: Key set and usage record types
//! - `file_scanner`: Recursive candidate file enumeration
//! - `key_usage`: Multi-key substring scanner
//! - `parsers`: Dictionary file parsing

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod key_usage;
pub mod parsers;

pub use context::{FinderContext, FinderOptions};
pub use data::{KeySet, UsageMap, UsageRecord, record_usage};
