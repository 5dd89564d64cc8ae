// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact pattern-matching engine.
//!
//! Three pure entry points make up the engine:
//!
//! - [`normalize`]: case-folds, strips diacritics and punctuation, collapses whitespace
//! - [`search_linear`]: prefix-function scan, O(n + m)
//! - [`search_bad_char`]: Boyer-Moore scan with the bad character rule, sublinear on average
//!
//! Both searches take already normalized text and pattern and return a
//! [`MatchSet`] of ascending character indices into the text, overlapping
//! occurrences included. For any input the two searches return the same set.
//! Empty inputs, or a pattern longer than the text, yield an empty set.
//!
//! # Example
//!
//! ```
//! use complaint_detector_lib::matching::{normalize, search_bad_char, search_linear};
//!
//! let text = normalize("¡Producto con DEFECTO, no funciona!");
//! let pattern = normalize("Defecto");
//!
//! assert_eq!(search_linear(&text, &pattern), vec![13]);
//! assert_eq!(search_bad_char(&text, &pattern), vec![13]);
//! ```

pub mod algorithm;
pub mod boyer_moore;
mod error;
pub mod normalize;
pub mod prefix_function;

// Re-exports
pub use algorithm::Algorithm;
pub use boyer_moore::{search_bad_char, search_good_suffix};
pub use error::{MatchingError, Result};
pub use normalize::normalize;
pub use prefix_function::{search_linear, FailureTable};

/// Ascending, duplicate-free start indices of a pattern in a normalized text.
pub type MatchSet = Vec<usize>;
