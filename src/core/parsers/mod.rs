//! File parsers.
//!
//! - `json`: JSON dictionary parser (top-level keys only)

pub mod json;
