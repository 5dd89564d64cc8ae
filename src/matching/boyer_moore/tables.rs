// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lookup tables for the Boyer-Moore family of matchers.
//!
//! 1. [`LastOccurrenceTable`]: drives the bad character rule. Records the
//!    rightmost index of every character of the pattern.
//!
//! 2. [`GoodSuffixTable`]: drives the good suffix rule. For every mismatch
//!    position it holds the smallest shift that realigns the already matched
//!    suffix with another occurrence of it (or with a border of the pattern).
//!
//! Both are rebuilt for every search call.

use fnv::FnvHashMap;

/// Rightmost occurrence of each pattern character.
///
/// Characters absent from the pattern are absent from the map and look up
/// as `-1`.
#[derive(Debug, Clone)]
pub struct LastOccurrenceTable {
    /// Maps each character to its rightmost index in the pattern
    char_map: FnvHashMap<char, usize>,
}

impl LastOccurrenceTable {
    /// Builds the table in one left-to-right pass; later occurrences
    /// overwrite earlier ones.
    pub fn new(pattern: &[char]) -> Self {
        let mut char_map = FnvHashMap::with_capacity_and_hasher(pattern.len(), Default::default());
        for (i, &ch) in pattern.iter().enumerate() {
            char_map.insert(ch, i);
        }
        Self { char_map }
    }

    /// Rightmost index of `ch` in the pattern, or `-1` if it does not occur.
    #[inline]
    pub fn last_occurrence(&self, ch: char) -> isize {
        self.char_map.get(&ch).map_or(-1, |&idx| idx as isize)
    }

    /// Window shift after `ch` mismatched at pattern offset `mismatch`:
    /// `max(1, mismatch - last_occurrence(ch))`.
    #[inline]
    pub fn shift(&self, ch: char, mismatch: usize) -> usize {
        let shift = mismatch as isize - self.last_occurrence(ch);
        shift.max(1) as usize
    }

    /// Number of distinct characters in the pattern.
    pub fn len(&self) -> usize {
        self.char_map.len()
    }

    /// Whether the table was built from an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.char_map.is_empty()
    }
}

/// Strong good suffix shifts.
///
/// `shift[j]` is the window shift to apply when `pattern[j..]` matched and
/// `pattern[j - 1]` mismatched; `shift[0]` is the shift after a full match,
/// which equals the pattern's period so overlapping matches survive.
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    /// Builds the table for `pattern`. An empty pattern yields an empty table.
    pub fn new(pattern: &[char]) -> Self {
        let m = pattern.len();
        if m == 0 {
            return Self { shift: Vec::new() };
        }

        let mut shift = vec![0; m + 1];
        let border = Self::compute_border(pattern, &mut shift);
        Self::fill_from_borders(&mut shift, &border);

        Self { shift }
    }

    /// Computes the widest border start of every suffix and, along the way,
    /// the shifts for suffixes that reoccur inside the pattern.
    fn compute_border(pattern: &[char], shift: &mut [usize]) -> Vec<usize> {
        let m = pattern.len();
        let mut border = vec![0; m + 1];

        let mut i = m;
        let mut j = m + 1;
        border[i] = j;

        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border[j];
            }
            i -= 1;
            j -= 1;
            border[i] = j;
        }

        border
    }

    /// Fills the remaining entries from the widest border of the whole pattern.
    fn fill_from_borders(shift: &mut [usize], border: &[usize]) {
        let m = shift.len() - 1;
        let mut j = border[0];

        for i in 0..=m {
            if shift[i] == 0 {
                shift[i] = j;
            }
            if i == j {
                j = border[j];
            }
        }
    }

    /// Shift for a mismatch just before the matched suffix `pattern[matched_from..]`.
    #[inline]
    pub fn shift(&self, matched_from: usize) -> usize {
        self.shift.get(matched_from).copied().unwrap_or(1).max(1)
    }

    /// Shift applied after a full match (the pattern's period).
    #[inline]
    pub fn full_match_shift(&self) -> usize {
        self.shift(0)
    }
}
