// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Text normalization applied to both the text and the pattern before a search.
//!
//! The transform runs four passes in a fixed order:
//!
//! 1. Unicode-aware lower-casing
//! 2. Canonical decomposition (NFD) with every combining mark dropped
//! 3. Removal of punctuation (all ASCII punctuation plus the Unicode `P*` categories)
//! 4. Whitespace runs collapsed to a single space, leading and trailing whitespace trimmed
//!
//! Match positions reported by the matchers are character indices into the
//! output of [`normalize`], never into the raw input.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Normalizes `text` for accent-, case- and punctuation-insensitive matching.
///
/// Total and deterministic: every input, including the empty string, maps to a
/// normalized string, and `normalize(&normalize(x)) == normalize(x)`.
///
/// # Example
///
/// ```
/// use complaint_detector_lib::matching::normalize;
///
/// assert_eq!(normalize("¡PÉSIMO Servicio!"), "pesimo servicio");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let stripped: String = lowered
        .nfd()
        .filter(|&ch| !is_combining_mark(ch))
        .filter(|&ch| !is_punctuation(ch))
        .collect();

    collapse_whitespace(&stripped)
}

/// Returns `true` for characters in the Unicode mark categories (`Mn`, `Mc`, `Me`).
#[inline]
fn is_combining_mark(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

/// Returns `true` for ASCII punctuation (symbols such as `$` and `+` included)
/// and for every character in a Unicode punctuation category.
#[inline]
fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_punctuation();
    }

    #[allow(clippy::enum_glob_use)]
    use GeneralCategory::*;
    matches!(
        get_general_category(ch),
        ClosePunctuation
            | ConnectorPunctuation
            | DashPunctuation
            | FinalPunctuation
            | InitialPunctuation
            | OpenPunctuation
            | OtherPunctuation
    )
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("¡PÉSIMO Servicio!", "pesimo servicio" ; "accents and inverted exclamation")]
    #[test_case("El producto NO FUNCIONA", "el producto no funciona" ; "upper case")]
    #[test_case("Niño, ¿cómo estás?", "nino como estas" ; "tilde and question marks")]
    #[test_case("  muchos    espacios\t\ny saltos  ", "muchos espacios y saltos" ; "whitespace runs")]
    #[test_case("precio: $100 + iva", "precio 100 iva" ; "ascii symbols")]
    #[test_case("«citado» — dijo…", "citado dijo" ; "unicode punctuation")]
    #[test_case("", "" ; "empty")]
    #[test_case("   ", "" ; "only whitespace")]
    #[test_case("!!!", "" ; "only punctuation")]
    fn test_normalize_examples(input: &str, expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_decomposed_input_matches_precomposed() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(normalize("cafe\u{0301}"), normalize("café"));
        assert_eq!(normalize("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_punctuation_between_words_does_not_leave_double_space() {
        assert_eq!(normalize("mal - servicio"), "mal servicio");
    }

    #[test]
    fn test_punctuation_inside_word_joins_it() {
        assert_eq!(normalize("no-funciona"), "nofunciona");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑüÜçÇ0-9 ¡!¿?.,;:()\\-\t\n]{0,80}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_normalized_has_no_edge_or_double_spaces(text in "[a-zA-Záéíóú ,.!\t]{0,60}") {
            let normalized = normalize(&text);
            prop_assert!(!normalized.starts_with(' '));
            prop_assert!(!normalized.ends_with(' '));
            prop_assert!(!normalized.contains("  "));
        }
    }
}
