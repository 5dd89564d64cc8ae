//! Complaint detection over a pattern catalog.

use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::OnceCell;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use super::report::{report, AlertTally, DetectionRecord};
use crate::benchmark::{self, Comparison};
use crate::catalog::{AlertLevel, PatternCatalog, PatternRecord};
use crate::config::engine::EngineConfig;
use crate::error::{DetectorError, DetectorResult};
use crate::matching::{normalize, Algorithm};

/// Category given to ad-hoc patterns that are not part of a catalog
pub const CUSTOM_CATEGORY: &str = "custom";

/// Largest number of texts accepted by [`ComplaintDetector::analyze_batch`]
pub const MAX_BATCH_SIZE: usize = 100;

/// Result of analyzing one text against a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Text as submitted
    pub original_text: String,

    /// Text after normalization; match positions index into it
    pub normalized_text: String,

    /// Algorithm that produced the matches
    pub algorithm: Algorithm,

    /// Patterns with at least one match, in catalog order
    pub detections: Vec<DetectionRecord>,

    /// Number of catalog patterns searched
    pub total_patterns_checked: usize,

    /// Number of patterns with at least one match
    pub patterns_found: usize,

    /// Whether any pattern matched
    pub has_complaints: bool,

    /// Detections per alert level
    pub alert_levels: AlertTally,

    /// Wall-clock time spent normalizing and searching, in milliseconds
    pub elapsed_ms: f64,
}

/// Reports for several texts analyzed with the same algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Number of texts analyzed
    pub total_analyzed: usize,

    /// Algorithm used for every text
    pub algorithm: Algorithm,

    /// One report per text, in input order
    pub results: Vec<AnalysisReport>,
}

/// One algorithm's pass over a whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRun {
    /// Number of patterns with at least one match
    pub patterns_found: usize,

    /// Time spent normalizing and searching, in milliseconds
    pub elapsed_ms: f64,

    /// Matching patterns, in catalog order
    pub detections: Vec<DetectionRecord>,
}

impl From<AnalysisReport> for CatalogRun {
    fn from(report: AnalysisReport) -> Self {
        Self {
            patterns_found: report.patterns_found,
            elapsed_ms: report.elapsed_ms,
            detections: report.detections,
        }
    }
}

/// Both algorithms run over the same catalog and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogComparison {
    /// Text as submitted
    pub original_text: String,

    /// Text after normalization
    pub normalized_text: String,

    /// Prefix-function pass
    pub linear: CatalogRun,

    /// Bad-character pass
    pub bad_character: CatalogRun,

    /// Algorithm with the lower elapsed time
    pub faster: Algorithm,

    /// Absolute difference of the elapsed times in milliseconds
    pub difference_ms: f64,

    /// Whether both passes produced the same detections
    pub detections_agree: bool,
}

/// Searches texts for every pattern of a catalog.
///
/// The detector holds no patterns itself: each call receives the catalog
/// snapshot to evaluate. The text is normalized once per call and every
/// pattern is normalized and searched independently. Catalogs of at least
/// `parallel_threshold` patterns are searched on a rayon pool of `workers`
/// threads, built on first use; results keep catalog order.
#[derive(Debug, Clone)]
pub struct ComplaintDetector {
    config: EngineConfig,
    pool: OnceCell<Arc<ThreadPool>>,
}

impl Default for ComplaintDetector {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ComplaintDetector {
    /// Creates a detector with the given engine settings.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// The engine settings in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves an optional algorithm name, falling back to the configured default.
    ///
    /// Unknown names are rejected, never replaced by the default.
    pub fn resolve_algorithm(&self, selector: Option<&str>) -> DetectorResult<Algorithm> {
        match selector {
            Some(name) => Ok(name.parse::<Algorithm>()?),
            None => Ok(self.config.default_algorithm),
        }
    }

    /// Analyzes `text` against every pattern in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::TextTooLong`] when the text exceeds the
    /// configured maximum length.
    pub fn analyze(
        &self,
        catalog: &PatternCatalog,
        text: &str,
        algorithm: Algorithm,
    ) -> DetectorResult<AnalysisReport> {
        self.check_length(text)?;

        let start = Instant::now();
        let normalized_text = normalize(text);
        let text_chars: Vec<char> = normalized_text.chars().collect();
        let detections = self.search_catalog(catalog.records(), &text_chars, algorithm);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let alert_levels: AlertTally = detections.iter().collect();
        let patterns_found = detections.len();

        tracing::debug!(
            algorithm = %algorithm,
            patterns = catalog.len(),
            found = patterns_found,
            elapsed_ms,
            "Text analyzed"
        );

        Ok(AnalysisReport {
            original_text: text.to_string(),
            normalized_text,
            algorithm,
            detections,
            total_patterns_checked: catalog.len(),
            patterns_found,
            has_complaints: patterns_found > 0,
            alert_levels,
            elapsed_ms,
        })
    }

    /// Analyzes each of `texts` with the same algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::InvalidBatchSize`] for an empty batch or one
    /// larger than [`MAX_BATCH_SIZE`], and the first per-text error otherwise.
    pub fn analyze_batch<S: AsRef<str>>(
        &self,
        catalog: &PatternCatalog,
        texts: &[S],
        algorithm: Algorithm,
    ) -> DetectorResult<BatchReport> {
        if texts.is_empty() || texts.len() > MAX_BATCH_SIZE {
            return Err(DetectorError::InvalidBatchSize {
                size: texts.len(),
                max: MAX_BATCH_SIZE,
            });
        }

        let results = texts
            .iter()
            .map(|text| self.analyze(catalog, text.as_ref(), algorithm))
            .collect::<DetectorResult<Vec<_>>>()?;

        Ok(BatchReport {
            total_analyzed: results.len(),
            algorithm,
            results,
        })
    }

    /// Analyzes `text` against `catalog` once with each algorithm.
    pub fn compare_catalog(
        &self,
        catalog: &PatternCatalog,
        text: &str,
    ) -> DetectorResult<CatalogComparison> {
        let linear = self.analyze(catalog, text, Algorithm::Linear)?;
        let bad_character = self.analyze(catalog, text, Algorithm::BadCharacter)?;

        let faster = if linear.elapsed_ms < bad_character.elapsed_ms {
            Algorithm::Linear
        } else {
            Algorithm::BadCharacter
        };
        let difference_ms = (linear.elapsed_ms - bad_character.elapsed_ms).abs();
        let detections_agree = linear.detections == bad_character.detections;

        Ok(CatalogComparison {
            original_text: text.to_string(),
            normalized_text: linear.normalized_text.clone(),
            linear: linear.into(),
            bad_character: bad_character.into(),
            faster,
            difference_ms,
            detections_agree,
        })
    }

    /// Times both algorithms searching `text` for `pattern` over `iterations` runs.
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::TextTooLong`] under the same limit as [`analyze`](Self::analyze).
    pub fn compare_pattern(
        &self,
        text: &str,
        pattern: &str,
        iterations: u32,
    ) -> DetectorResult<Comparison> {
        self.check_length(text)?;
        Ok(benchmark::compare(text, pattern, iterations))
    }

    /// Searches `text` for a single ad-hoc `pattern`.
    ///
    /// The record is always returned, with `found == false` when nothing matched.
    pub fn detect_single(
        &self,
        text: &str,
        pattern: &str,
        algorithm: Algorithm,
    ) -> DetectorResult<DetectionRecord> {
        self.check_length(text)?;

        let metadata = PatternRecord::new(
            pattern,
            CUSTOM_CATEGORY,
            AlertLevel::Low,
            format!("Pattern '{}' found", pattern.trim()),
        );
        let positions = algorithm.search(&normalize(text), &normalize(pattern));
        Ok(report(&metadata, positions))
    }

    /// Rejects texts longer than `max_text_length` characters (0 disables the limit).
    pub fn check_length(&self, text: &str) -> DetectorResult<()> {
        let max = self.config.max_text_length;
        if max == 0 {
            return Ok(());
        }

        let length = text.chars().count();
        if length > max {
            return Err(DetectorError::TextTooLong { length, max });
        }
        Ok(())
    }

    fn search_catalog(
        &self,
        records: &[PatternRecord],
        text: &[char],
        algorithm: Algorithm,
    ) -> Vec<DetectionRecord> {
        if self.config.workers <= 1 || records.len() < self.config.parallel_threshold {
            return records
                .iter()
                .filter_map(|record| search_record(record, text, algorithm))
                .collect();
        }

        let search = || -> Vec<DetectionRecord> {
            records
                .par_iter()
                .filter_map(|record| search_record(record, text, algorithm))
                .collect()
        };
        match self.pool() {
            Some(pool) => pool.install(search),
            None => search(),
        }
    }

    /// The detector's own pool, or `None` to run on rayon's global pool.
    fn pool(&self) -> Option<&ThreadPool> {
        let built = self.pool.get_or_try_init(|| {
            ThreadPoolBuilder::new()
                .num_threads(self.config.workers)
                .thread_name(|index| format!("detector-{index}"))
                .build()
                .map(Arc::new)
        });

        match built {
            Ok(pool) => Some(pool.as_ref()),
            Err(e) => {
                tracing::warn!(error = %e, workers = self.config.workers, "Using the global thread pool");
                None
            }
        }
    }
}

/// Searches `text` for one record, returning a detection only if it matched.
fn search_record(
    record: &PatternRecord,
    text: &[char],
    algorithm: Algorithm,
) -> Option<DetectionRecord> {
    let pattern: Vec<char> = normalize(&record.pattern).chars().collect();
    let positions = algorithm.find_all(text, &pattern);
    (!positions.is_empty()).then(|| report(record, positions))
}
