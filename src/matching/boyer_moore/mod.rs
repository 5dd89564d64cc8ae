// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore pattern matching.
//!
//! The canonical matcher uses only the bad character rule: the window is
//! compared right to left and, on a mismatch at pattern offset `j` against
//! text character `c`, advances by `max(1, j - last_occurrence(c))`, where a
//! character missing from the pattern counts as `-1`. After a full match the
//! window advances by exactly one, so overlapping occurrences are found and
//! the result equals the prefix-function matcher's for every input.
//!
//! A variant that also applies the good suffix rule is available with the
//! same contract.
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m) where m is the pattern length
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Worst case: O(n*m) comparisons for the bad-character-only matcher
//!
//! # Example
//!
//! ```
//! use complaint_detector_lib::matching::boyer_moore::{search_bad_char, LastOccurrenceTable};
//!
//! let matches = search_bad_char("no funciona, de verdad no funciona", "no funciona");
//! assert_eq!(matches, vec![0, 23]);
//!
//! let pattern: Vec<char> = "defecto".chars().collect();
//! let table = LastOccurrenceTable::new(&pattern);
//! assert_eq!(table.last_occurrence('e'), 3);
//! assert_eq!(table.last_occurrence('z'), -1);
//! ```

mod matcher;
mod tables;

// Re-exports
pub use matcher::{find_all_bad_char, find_all_good_suffix, search_bad_char, search_good_suffix};
pub use tables::{GoodSuffixTable, LastOccurrenceTable};

#[cfg(test)]
mod tests;
