//! Core data types shared by the scanning pipeline.
//!
//! ## Module Structure
//!
//! - `key_set`: The key universe loaded from a dictionary file
//! - `usage`: Per-key usage records collected while scanning

pub mod key_set;
pub mod usage;

pub use key_set::KeySet;
pub use usage::{UsageMap, UsageRecord, record_usage};
