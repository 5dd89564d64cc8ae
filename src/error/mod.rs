//! Error module for the complaint detector.
//!
//! Each layer owns its error type (configuration, catalog, matching engine);
//! [`DetectorError`] unifies them for callers that drive the whole pipeline.
//! Degenerate search inputs are never errors.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::matching::MatchingError;

pub mod config;

/// Result alias for operations that span several layers.
pub type DetectorResult<T> = Result<T, DetectorError>;

/// Any failure of the detector pipeline.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// Settings could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors editing, loading or saving the pattern catalog.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Rejected input to the matching engine, such as an unknown algorithm.
    #[error("Matching error: {0}")]
    Matching(#[from] MatchingError),

    /// Text longer than the configured analysis limit.
    #[error("Text of {length} characters exceeds the limit of {max}")]
    TextTooLong {
        /// Length of the submitted text in characters
        length: usize,
        /// Configured maximum
        max: usize,
    },

    /// Batch analysis received no texts or more than the batch limit.
    #[error("Batch of {size} texts is outside the allowed range 1..={max}")]
    InvalidBatchSize {
        /// Number of texts submitted
        size: usize,
        /// Largest accepted batch
        max: usize,
    },

    /// Filesystem failure outside the catalog.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be rendered as JSON.
    #[error("JSON output error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other failure, carried as its message.
    #[error("{0}")]
    Custom(String),
}

/// A [`DetectorError`] annotated with where it surfaced.
///
/// The CLI wraps every failure in one of these before handing it to the
/// installed [`ErrorReporter`].
#[derive(Debug)]
pub struct ErrorContext {
    /// The failure itself.
    pub error: DetectorError,

    /// Stage that failed, e.g. `config`, `catalog` or `cli`.
    pub component: String,

    /// Free-form note, such as the file or pattern involved.
    pub details: Option<String>,

    /// Rendered span trace, when one was captured.
    pub trace: Option<String>,
}

impl ErrorContext {
    /// Wraps `error` as having surfaced in `component`.
    pub fn new<S: Into<String>>(error: DetectorError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
            trace: None,
        }
    }

    /// Attaches a note.
    pub fn with_details<S: Into<String>>(self, details: S) -> Self {
        Self {
            details: Some(details.into()),
            ..self
        }
    }

    /// Attaches an already rendered trace, replacing any previous one.
    pub fn with_trace<S: Into<String>>(self, trace: S) -> Self {
        Self {
            trace: Some(trace.into()),
            ..self
        }
    }

    /// Captures the spans entered at the call site.
    ///
    /// Spans are only recorded when the subscriber carries a
    /// `tracing_error::ErrorLayer`; otherwise the context is returned as is.
    pub fn with_span_trace(self) -> Self {
        let rendered = tracing_error::SpanTrace::capture().to_string();
        if rendered.is_empty() {
            self
        } else {
            self.with_trace(rendered)
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.component, self.error)?;
        match &self.details {
            Some(details) => write!(f, " ({details})"),
            None => Ok(()),
        }
    }
}

/// Sink for errors that end a command.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Consumes one reported error.
    fn report(&self, context: ErrorContext);
}

/// Emits reported errors as `tracing` error events.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        let ErrorContext {
            error,
            component,
            details,
            trace,
        } = context;

        tracing::error!(
            %component,
            details = details.as_deref(),
            "{error}"
        );
        if let Some(trace) = trace {
            tracing::debug!(%component, "span trace:\n{trace}");
        }
    }
}

static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Installs the process-wide reporter.
///
/// Only the first call wins; later calls return `false` and leave it in place.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Hands `context` to the installed reporter, or prints it to stderr when
/// none is installed.
pub fn report_error(context: ErrorContext) {
    if let Some(reporter) = ERROR_REPORTER.get() {
        reporter.report(context);
    } else {
        eprintln!("error: {context}");
    }
}
