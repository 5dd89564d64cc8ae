//! Tests for the error module.

use crate::catalog::CatalogError;
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, DetectorError, ErrorContext, ErrorReporter,
    TracingErrorReporter,
};
use crate::matching::{Algorithm, MatchingError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = DetectorError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "detector").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("detector"));
    assert!(display_string.contains("additional details"));
}

/// Test conversions from each layer's error type.
#[test]
fn test_layer_errors_convert() {
    let error: DetectorError = "fuzzy".parse::<Algorithm>().unwrap_err().into();
    assert!(matches!(
        error,
        DetectorError::Matching(MatchingError::UnknownAlgorithm(ref name)) if name == "fuzzy"
    ));
    assert!(error.to_string().contains("fuzzy"));

    let error: DetectorError = CatalogError::IndexOutOfRange { index: 7, len: 2 }.into();
    assert!(matches!(error, DetectorError::Catalog(_)));
    assert!(error.to_string().contains("Index 7"));

    let error: DetectorError = ConfigError::ValidationError("bad level".to_string()).into();
    assert!(error.to_string().contains("bad level"));

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = DetectorError::Io(io_error);
    assert!(error.to_string().contains("file not found"));
}

/// Test the text length error message.
#[test]
fn test_text_too_long_display() {
    let error = DetectorError::TextTooLong { length: 6000, max: 5000 };
    assert_eq!(
        error.to_string(),
        "Text of 6000 characters exceeds the limit of 5000"
    );
}

/// Counting error reporter for testing.
#[derive(Debug, Default)]
struct CountingErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(CountingErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));

    let context = ErrorContext::new(DetectorError::Custom("test error".to_string()), "cli");
    report_error(context);

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);

    // A second installation is refused and the first reporter stays
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(DetectorError::Custom("test error".to_string()), "cli")
        .with_span_trace()
        .with_trace("explicit trace");

    assert_eq!(context.trace.as_deref(), Some("explicit trace"));

    // Just make sure this doesn't panic
    reporter.report(context);
}
