//! Detection rules run over a finished scan.
//!
//! - `unused`: Keys defined in the dictionary but never found in sources

pub mod unused;
