//! Complaint Detector Library
//!
//! Flags complaint-indicative phrases in free-form text with exact pattern
//! matching. Text and patterns are normalized (lower-cased, accents and
//! punctuation stripped, whitespace collapsed) and then searched with either
//! a prefix-function (Knuth-Morris-Pratt) scan or a Boyer-Moore scan using the
//! bad character rule. Both algorithms report identical match sets.
//!
//! # Architecture
//!
//! - [`matching`]: the pure engine (normalization and both search algorithms)
//! - [`catalog`]: owned pattern catalog with editing and persistence
//! - [`detection`]: runs a catalog snapshot over a text and builds reports
//! - [`benchmark`]: timing comparison of the algorithms
//! - [`config`] and [`error`]: layered configuration and error types

// Re-export public modules
pub mod benchmark;
pub mod catalog;
pub mod config;
pub mod detection;
pub mod error;
pub mod matching;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use matching::{normalize, search_bad_char, search_linear, Algorithm, MatchSet};

/// Version information for the complaint detector.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
