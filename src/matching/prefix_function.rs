// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Linear-time matching driven by the prefix function (Knuth-Morris-Pratt).
//!
//! Preprocessing builds a [`FailureTable`] in O(m); the scan then visits every
//! text character at most twice, for O(n + m) overall regardless of the
//! pattern's content. Overlapping occurrences are reported.

use super::MatchSet;

/// Prefix function of a pattern.
///
/// `table[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. `table[0] == 0` and `table[i] <= i` always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureTable {
    lengths: Vec<usize>,
}

impl FailureTable {
    /// Builds the table in a single pass over `pattern`.
    pub fn new(pattern: &[char]) -> Self {
        let m = pattern.len();
        let mut lengths = vec![0; m];

        // Length of the prefix-suffix currently being extended
        let mut length = 0;
        let mut i = 1;

        while i < m {
            if pattern[i] == pattern[length] {
                length += 1;
                lengths[i] = length;
                i += 1;
            } else if length != 0 {
                length = lengths[length - 1];
            } else {
                lengths[i] = 0;
                i += 1;
            }
        }

        Self { lengths }
    }

    /// Fallback length after a full or partial match of `matched` characters.
    ///
    /// `matched` must be in `1..=len()`.
    #[inline]
    pub fn fallback(&self, matched: usize) -> usize {
        self.lengths[matched - 1]
    }

    /// The raw per-position lengths.
    pub fn as_slice(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of entries, equal to the pattern length.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Whether the table was built from an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Finds every start index of `pattern` in `text`, overlaps included.
///
/// Both arguments are expected to be normalized already; indices are
/// character positions. Returns an empty set when either input is empty or
/// the pattern is longer than the text.
///
/// # Example
///
/// ```
/// use complaint_detector_lib::matching::search_linear;
///
/// assert_eq!(search_linear("aaaa", "aa"), vec![0, 1, 2]);
/// ```
pub fn search_linear(text: &str, pattern: &str) -> MatchSet {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all(&text, &pattern)
}

/// Character-slice form of [`search_linear`].
pub fn find_all(text: &[char], pattern: &[char]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    if m == 0 || n == 0 || m > n {
        return Vec::new();
    }

    let table = FailureTable::new(pattern);
    let mut matches = Vec::new();

    let mut i = 0; // text cursor
    let mut j = 0; // pattern cursor

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
        }

        if j == m {
            matches.push(i - j);
            j = table.fallback(j);
        } else if i < n && text[i] != pattern[j] {
            if j != 0 {
                j = table.fallback(j);
            } else {
                i += 1;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_failure_table_known_patterns() {
        assert_eq!(FailureTable::new(&chars("abab")).as_slice(), &[0, 0, 1, 2]);
        assert_eq!(FailureTable::new(&chars("aaaa")).as_slice(), &[0, 1, 2, 3]);
        assert_eq!(FailureTable::new(&chars("abcda")).as_slice(), &[0, 0, 0, 0, 1]);
        assert_eq!(
            FailureTable::new(&chars("aabaaab")).as_slice(),
            &[0, 1, 0, 1, 2, 2, 3]
        );
    }

    #[test]
    fn test_failure_table_bounds() {
        for pattern in ["problema", "abracadabra", "no funciona", "aabaabaaa"] {
            let table = FailureTable::new(&chars(pattern));
            assert_eq!(table.len(), pattern.chars().count());
            assert_eq!(table.as_slice()[0], 0);
            for (i, &len) in table.as_slice().iter().enumerate() {
                assert!(len <= i);
            }
        }
    }

    #[test]
    fn test_failure_table_empty_pattern() {
        let table = FailureTable::new(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(search_linear("aaa", "aa"), vec![0, 1]);
        assert_eq!(search_linear("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(search_linear("abababab", "abab"), vec![0, 2, 4]);
    }

    #[test]
    fn test_no_match() {
        assert!(search_linear("el servicio es excelente", "problema").is_empty());
    }

    #[test]
    fn test_multiple_occurrences() {
        let matches = search_linear("problema problema problema", "problema");
        assert_eq!(matches, vec![0, 9, 18]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(search_linear("texto", "").is_empty());
        assert!(search_linear("", "texto").is_empty());
        assert!(search_linear("", "").is_empty());
        assert!(search_linear("abc", "abcd").is_empty());
    }

    #[test]
    fn test_match_at_edges() {
        assert_eq!(search_linear("defecto", "defecto"), vec![0]);
        assert_eq!(search_linear("producto con defecto", "defecto"), vec![13]);
    }

    #[test]
    fn test_indices_are_character_positions() {
        // Each CJK character is three bytes in UTF-8
        assert_eq!(search_linear("こんにちは世界", "世界"), vec![5]);
    }
}
