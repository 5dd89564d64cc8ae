//! Complaint detection.
//!
//! Ties the matching engine to a pattern catalog: the text is normalized once,
//! each catalog pattern is normalized and searched with the selected
//! algorithm, and matching patterns are reported as [`DetectionRecord`]s
//! inside an [`AnalysisReport`]. Batches of texts produce a [`BatchReport`];
//! running both algorithms over one text produces a [`CatalogComparison`].
//!
//! # Example
//!
//! ```
//! use complaint_detector_lib::catalog::{AlertLevel, PatternCatalog, PatternRecord};
//! use complaint_detector_lib::detection::ComplaintDetector;
//! use complaint_detector_lib::matching::Algorithm;
//!
//! let catalog = PatternCatalog::from_records(vec![
//!     PatternRecord::new("defecto", "producto", AlertLevel::High, "Producto defectuoso"),
//!     PatternRecord::new("no funciona", "producto", AlertLevel::High, "No funciona"),
//! ])
//! .unwrap();
//!
//! let detector = ComplaintDetector::default();
//! let report = detector
//!     .analyze(&catalog, "Producto con defecto, no funciona", Algorithm::Linear)
//!     .unwrap();
//!
//! assert!(report.has_complaints);
//! assert_eq!(report.alert_levels.high, 2);
//! ```

mod detector;
mod report;

pub use detector::{
    AnalysisReport, BatchReport, CatalogComparison, CatalogRun, ComplaintDetector, CUSTOM_CATEGORY,
    MAX_BATCH_SIZE,
};
pub use report::{report, AlertTally, DetectionRecord};
