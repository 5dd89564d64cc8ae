// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{MatchingError, Result};
use super::{boyer_moore, prefix_function, MatchSet};

/// The search algorithm used to locate a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Prefix-function (Knuth-Morris-Pratt) linear scan
    #[default]
    #[serde(alias = "kmp")]
    Linear,

    /// Boyer-Moore with the bad character rule
    #[serde(alias = "boyer_moore", alias = "boyer-moore", alias = "bad-character")]
    BadCharacter,
}

impl Algorithm {
    /// Every selectable algorithm.
    pub const ALL: [Algorithm; 2] = [Algorithm::Linear, Algorithm::BadCharacter];

    /// Stable identifier used in reports and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Linear => "linear",
            Algorithm::BadCharacter => "bad_character",
        }
    }

    /// Searches normalized `text` for normalized `pattern`.
    pub fn search(self, text: &str, pattern: &str) -> MatchSet {
        match self {
            Algorithm::Linear => prefix_function::search_linear(text, pattern),
            Algorithm::BadCharacter => boyer_moore::search_bad_char(text, pattern),
        }
    }

    /// Character-slice form of [`Algorithm::search`], for callers that search
    /// one text for many patterns.
    pub fn find_all(self, text: &[char], pattern: &[char]) -> MatchSet {
        match self {
            Algorithm::Linear => prefix_function::find_all(text, pattern),
            Algorithm::BadCharacter => boyer_moore::find_all_bad_char(text, pattern),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = MatchingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "kmp" => Ok(Algorithm::Linear),
            "bad_character" | "bad-character" | "boyer_moore" | "boyer-moore" => {
                Ok(Algorithm::BadCharacter)
            }
            _ => Err(MatchingError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("linear", Algorithm::Linear ; "linear")]
    #[test_case("kmp", Algorithm::Linear ; "kmp alias")]
    #[test_case("KMP", Algorithm::Linear ; "upper case kmp alias")]
    #[test_case("bad_character", Algorithm::BadCharacter ; "bad character")]
    #[test_case("bad-character", Algorithm::BadCharacter ; "bad character hyphenated")]
    #[test_case("boyer_moore", Algorithm::BadCharacter ; "boyer moore alias")]
    #[test_case(" Boyer-Moore ", Algorithm::BadCharacter ; "padded boyer moore alias")]
    fn test_parse_known_algorithms(input: &str, expected: Algorithm) {
        assert_eq!(input.parse::<Algorithm>(), Ok(expected));
    }

    #[test_case("" ; "empty")]
    #[test_case("regex" ; "regex")]
    #[test_case("rabin_karp" ; "unsupported algorithm")]
    fn test_parse_rejects_unknown(input: &str) {
        assert_eq!(
            input.parse::<Algorithm>(),
            Err(MatchingError::UnknownAlgorithm(input.to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Algorithm::BadCharacter).unwrap(),
            "\"bad_character\""
        );
        let parsed: Algorithm = serde_json::from_str("\"kmp\"").unwrap();
        assert_eq!(parsed, Algorithm::Linear);
    }

    #[test]
    fn test_serde_accepts_every_parse_alias() {
        for name in ["bad_character", "bad-character", "boyer_moore", "boyer-moore"] {
            let parsed: Algorithm = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(parsed, name.parse::<Algorithm>().unwrap(), "alias {name}");
        }
    }

    #[test]
    fn test_dispatch_agrees() {
        let text = "producto con defecto no funciona";
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.search(text, "defecto"), vec![13]);
            assert_eq!(algorithm.search(text, "no funciona"), vec![21]);
        }
    }
}
