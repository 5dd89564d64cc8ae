// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore scanning loops.
//!
//! A window of the pattern's length slides left to right over the text and
//! is compared right to left. The canonical matcher ([`search_bad_char`])
//! shifts by the bad character rule only and advances by exactly one after a
//! full match, which keeps overlapping occurrences and makes its output
//! identical to the prefix-function matcher. [`search_good_suffix`] adds the
//! good suffix rule under the same contract.

use super::tables::{GoodSuffixTable, LastOccurrenceTable};
use crate::matching::MatchSet;

/// Finds every start index of `pattern` in `text` with the bad character rule.
///
/// Both arguments are expected to be normalized already; indices are
/// character positions. Returns an empty set when either input is empty or
/// the pattern is longer than the text.
///
/// # Example
///
/// ```
/// use complaint_detector_lib::matching::search_bad_char;
///
/// assert_eq!(search_bad_char("aaaa", "aa"), vec![0, 1, 2]);
/// ```
pub fn search_bad_char(text: &str, pattern: &str) -> MatchSet {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all_bad_char(&text, &pattern)
}

/// Finds every start index of `pattern` in `text` using both the bad
/// character and the good suffix rule. Same contract and output as
/// [`search_bad_char`].
pub fn search_good_suffix(text: &str, pattern: &str) -> MatchSet {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all_good_suffix(&text, &pattern)
}

/// Character-slice form of [`search_bad_char`].
pub fn find_all_bad_char(text: &[char], pattern: &[char]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    if m == 0 || n == 0 || m > n {
        return Vec::new();
    }

    let last = LastOccurrenceTable::new(pattern);
    let mut matches = Vec::new();
    let mut s = 0;

    while s <= n - m {
        match mismatch_in_window(text, pattern, s) {
            None => {
                matches.push(s);
                s += 1;
            }
            Some(j) => s += last.shift(text[s + j], j),
        }
    }

    matches
}

/// Character-slice form of [`search_good_suffix`].
pub fn find_all_good_suffix(text: &[char], pattern: &[char]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    if m == 0 || n == 0 || m > n {
        return Vec::new();
    }

    let last = LastOccurrenceTable::new(pattern);
    let good_suffix = GoodSuffixTable::new(pattern);
    let mut matches = Vec::new();
    let mut s = 0;

    while s <= n - m {
        match mismatch_in_window(text, pattern, s) {
            None => {
                matches.push(s);
                s += good_suffix.full_match_shift();
            }
            Some(j) => {
                let bad_char_shift = last.shift(text[s + j], j);
                let good_suffix_shift = good_suffix.shift(j + 1);
                s += bad_char_shift.max(good_suffix_shift);
            }
        }
    }

    matches
}

/// Compares the window starting at `s` right to left and returns the
/// pattern offset of the first mismatch, or `None` on a full match.
#[inline]
fn mismatch_in_window(text: &[char], pattern: &[char], s: usize) -> Option<usize> {
    (0..pattern.len())
        .rev()
        .find(|&j| pattern[j] != text[s + j])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_matching() {
        assert_eq!(search_bad_char("producto con defecto", "defecto"), vec![13]);
        assert!(search_bad_char("el servicio es excelente", "problema").is_empty());
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(search_bad_char("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(search_bad_char("banana", "ana"), vec![1, 3]);
        assert_eq!(search_good_suffix("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(search_good_suffix("banana", "ana"), vec![1, 3]);
    }

    #[test]
    fn test_multiple_occurrences() {
        let text = "problema problema problema";
        assert_eq!(search_bad_char(text, "problema"), vec![0, 9, 18]);
        assert_eq!(search_good_suffix(text, "problema"), vec![0, 9, 18]);
    }

    #[test]
    fn test_degenerate_inputs() {
        let searches: [fn(&str, &str) -> MatchSet; 2] = [search_bad_char, search_good_suffix];
        for search in searches {
            assert!(search("texto", "").is_empty());
            assert!(search("", "texto").is_empty());
            assert!(search("", "").is_empty());
            assert!(search("abc", "abcd").is_empty());
        }
    }

    #[test]
    fn test_pattern_equals_text() {
        assert_eq!(search_bad_char("no funciona", "no funciona"), vec![0]);
        assert_eq!(search_good_suffix("no funciona", "no funciona"), vec![0]);
    }

    #[test]
    fn test_unicode_positions_are_characters() {
        assert_eq!(search_bad_char("say こんにちは to all", "こんにちは"), vec![4]);
        assert_eq!(search_good_suffix("say こんにちは to all", "こんにちは"), vec![4]);
    }

    #[test]
    fn test_good_suffix_periodic_pattern() {
        let text = "abababababab";
        assert_eq!(search_good_suffix(text, "abab"), vec![0, 2, 4, 6, 8]);
        assert_eq!(search_bad_char(text, "abab"), vec![0, 2, 4, 6, 8]);
    }
}
