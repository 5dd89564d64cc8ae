//! Timing comparison of the search algorithms.
//!
//! Measures the mean wall-clock time of each algorithm over a number of
//! iterations for a (text, pattern) pair, and aggregates such comparisons over
//! many pairs. Text and pattern are normalized before timing starts, so only
//! the search itself is measured.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{DetectorError, DetectorResult};
use crate::matching::{normalize, Algorithm};

/// Mean timing of one algorithm on one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The algorithm measured
    pub algorithm: Algorithm,

    /// Normalized text length in characters
    pub text_length: usize,

    /// Normalized pattern length in characters
    pub pattern_length: usize,

    /// Mean time per search in milliseconds
    pub mean_ms: f64,

    /// Matches found by the search
    pub match_count: usize,
}

/// Both algorithms measured on the same case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Prefix-function matcher timing
    pub linear: Measurement,

    /// Bad-character matcher timing
    pub bad_character: Measurement,

    /// Absolute difference of the mean times in milliseconds
    pub difference_ms: f64,

    /// The algorithm with the lower mean time
    pub faster: Algorithm,

    /// Bad-character mean time divided by linear mean time (1.0 when linear took no measurable time)
    pub speedup: f64,

    /// Iterations per algorithm
    pub iterations: u32,
}

/// Aggregate over several comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSummary {
    /// Individual comparisons, in input order
    pub results: Vec<Comparison>,

    /// Mean of the linear mean times
    pub linear_avg_ms: f64,
    /// Fastest linear case
    pub linear_min_ms: f64,
    /// Slowest linear case
    pub linear_max_ms: f64,

    /// Mean of the bad-character mean times
    pub bad_character_avg_ms: f64,
    /// Fastest bad-character case
    pub bad_character_min_ms: f64,
    /// Slowest bad-character case
    pub bad_character_max_ms: f64,
}

/// Times `algorithm` searching `pattern` in `text` over `iterations` runs.
///
/// `iterations` of zero is treated as one.
pub fn measure(algorithm: Algorithm, text: &str, pattern: &str, iterations: u32) -> Measurement {
    let text = normalize(text);
    let pattern = normalize(pattern);
    measure_normalized(algorithm, &text, &pattern, iterations.max(1))
}

fn measure_normalized(algorithm: Algorithm, text: &str, pattern: &str, iterations: u32) -> Measurement {
    let text_chars: Vec<char> = text.chars().collect();
    let pattern_chars: Vec<char> = pattern.chars().collect();

    let mut total_ms = 0.0;
    let mut match_count = 0;
    for _ in 0..iterations {
        let start = Instant::now();
        let matches = algorithm.find_all(&text_chars, &pattern_chars);
        total_ms += start.elapsed().as_secs_f64() * 1000.0;
        match_count = matches.len();
    }

    Measurement {
        algorithm,
        text_length: text_chars.len(),
        pattern_length: pattern_chars.len(),
        mean_ms: total_ms / f64::from(iterations),
        match_count,
    }
}

/// Measures both algorithms on the same case.
pub fn compare(text: &str, pattern: &str, iterations: u32) -> Comparison {
    let iterations = iterations.max(1);
    let text = normalize(text);
    let pattern = normalize(pattern);

    let linear = measure_normalized(Algorithm::Linear, &text, &pattern, iterations);
    let bad_character = measure_normalized(Algorithm::BadCharacter, &text, &pattern, iterations);

    let faster = if linear.mean_ms < bad_character.mean_ms {
        Algorithm::Linear
    } else {
        Algorithm::BadCharacter
    };
    let speedup = if linear.mean_ms > 0.0 {
        bad_character.mean_ms / linear.mean_ms
    } else {
        1.0
    };

    Comparison {
        difference_ms: (linear.mean_ms - bad_character.mean_ms).abs(),
        faster,
        speedup,
        iterations,
        linear,
        bad_character,
    }
}

/// Compares both algorithms on every `(text, pattern)` case.
///
/// # Errors
///
/// Returns an error if `cases` is empty.
pub fn compare_bulk(cases: &[(&str, &str)], iterations: u32) -> DetectorResult<BulkSummary> {
    if cases.is_empty() {
        return Err(DetectorError::Custom(
            "At least one benchmark case is required".to_string(),
        ));
    }

    let results: Vec<Comparison> = cases
        .iter()
        .map(|(text, pattern)| compare(text, pattern, iterations))
        .collect();

    let linear = Stats::of(results.iter().map(|r| r.linear.mean_ms));
    let bad_character = Stats::of(results.iter().map(|r| r.bad_character.mean_ms));

    Ok(BulkSummary {
        results,
        linear_avg_ms: linear.avg,
        linear_min_ms: linear.min,
        linear_max_ms: linear.max,
        bad_character_avg_ms: bad_character.avg,
        bad_character_min_ms: bad_character.min,
        bad_character_max_ms: bad_character.max,
    })
}

struct Stats {
    avg: f64,
    min: f64,
    max: f64,
}

impl Stats {
    /// Non-empty input only.
    fn of(values: impl Iterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        Self {
            avg: sum / count as f64,
            min,
            max,
        }
    }
}
