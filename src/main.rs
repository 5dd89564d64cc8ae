//! Complaint Detector - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs one command against the
//! pattern catalog.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use complaint_detector_lib::catalog::{
    AlertLevel, CatalogError, PatternCatalog, PatternRecord, SharedCatalog,
};
use complaint_detector_lib::config::{self, ConfigLoader, DetectorConfig, LogConfig};
use complaint_detector_lib::detection::{AnalysisReport, ComplaintDetector, DetectionRecord};
use complaint_detector_lib::error::{
    report_error, set_error_reporter, DetectorResult, ErrorContext, TracingErrorReporter,
};

/// Command line arguments for the complaint detector.
#[derive(Parser, Debug)]
#[clap(name = "Complaint Detector", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the pattern catalog, overriding the configuration
    #[clap(long, global = true, value_parser)]
    catalog: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    #[clap(flatten)]
    Detector(DetectorCommand),
}

/// Subcommands that run with loaded settings.
#[derive(Subcommand, Debug)]
enum DetectorCommand {
    /// Analyze a text against every catalog pattern
    Analyze {
        /// Text to analyze
        #[clap(short, long)]
        text: String,

        /// Algorithm: linear (kmp) or bad_character (boyer_moore)
        #[clap(short, long)]
        algorithm: Option<String>,

        /// Print the full report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Analyze up to 100 texts with the same algorithm
    Batch {
        /// Text to analyze; repeat for every text in the batch
        #[clap(short, long = "text", required = true)]
        texts: Vec<String>,

        /// Algorithm: linear (kmp) or bad_character (boyer_moore)
        #[clap(short, long)]
        algorithm: Option<String>,
    },

    /// Search a text for a single ad-hoc pattern
    Search {
        /// Text to search
        #[clap(short, long)]
        text: String,

        /// Pattern to look for
        #[clap(short, long)]
        pattern: String,

        /// Algorithm: linear (kmp) or bad_character (boyer_moore)
        #[clap(short, long)]
        algorithm: Option<String>,
    },

    /// Compare the running time of both algorithms on one pattern
    Compare {
        /// Text to search
        #[clap(short, long)]
        text: String,

        /// Pattern to look for
        #[clap(short, long)]
        pattern: String,

        /// Iterations per algorithm
        #[clap(short, long, default_value_t = 100)]
        iterations: u32,
    },

    /// Analyze a text with both algorithms over the whole catalog
    CompareCatalog {
        /// Text to analyze
        #[clap(short, long)]
        text: String,
    },

    /// Inspect or edit the pattern catalog
    Patterns {
        #[clap(subcommand)]
        action: PatternAction,
    },

    /// Validate the configuration file
    Validate,
}

/// Catalog editing actions.
#[derive(Subcommand, Debug)]
enum PatternAction {
    /// List every pattern with its index
    List,

    /// Append a pattern
    Add {
        /// Pattern text
        pattern: String,
        /// Category label
        category: String,
        /// Alert level: high, medium or low
        #[clap(short, long)]
        level: AlertLevel,
        /// Alert message
        #[clap(short, long, default_value = "")]
        message: String,
    },

    /// Replace the pattern at an index
    Update {
        /// Index of the pattern to replace
        index: usize,
        /// Pattern text
        pattern: String,
        /// Category label
        category: String,
        /// Alert level: high, medium or low
        #[clap(short, long)]
        level: AlertLevel,
        /// Alert message
        #[clap(short, long, default_value = "")]
        message: String,
    },

    /// Remove the pattern at an index
    Delete {
        /// Index of the pattern to remove
        index: usize,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays machine-readable.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    };

    result.context("Failed to set global tracing subscriber")
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let Args {
        config: config_path,
        catalog,
        command,
    } = Args::parse();

    let command = match command {
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            return generate_config(&output);
        }
        Command::Detector(command) => command,
    };

    let loaded = ConfigLoader::new(config_path.as_deref(), config::ENV_PREFIX).load();

    // Initialize logging early to capture any startup errors
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config").with_span_trace());
            process::exit(1);
        }
    };

    if let Err(e) = run(command, catalog, config) {
        report_error(ErrorContext::new(e, "cli").with_span_trace());
        process::exit(1);
    }

    Ok(())
}

fn run(
    command: DetectorCommand,
    catalog_override: Option<PathBuf>,
    config: DetectorConfig,
) -> DetectorResult<()> {
    let catalog_path = catalog_override.unwrap_or_else(|| config.catalog.path.clone());
    let detector = ComplaintDetector::new(config.engine.clone());

    match command {
        DetectorCommand::Analyze {
            text,
            algorithm,
            json,
        } => {
            let algorithm = detector.resolve_algorithm(algorithm.as_deref())?;
            let catalog = PatternCatalog::load(&catalog_path)?;
            let report = detector.analyze(&catalog, &text, algorithm)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(())
        }
        DetectorCommand::Batch { texts, algorithm } => {
            let algorithm = detector.resolve_algorithm(algorithm.as_deref())?;
            let catalog = PatternCatalog::load(&catalog_path)?;
            let batch = detector.analyze_batch(&catalog, &texts, algorithm)?;
            println!("{}", serde_json::to_string_pretty(&batch)?);
            Ok(())
        }
        DetectorCommand::Search {
            text,
            pattern,
            algorithm,
        } => {
            let algorithm = detector.resolve_algorithm(algorithm.as_deref())?;
            let record = detector.detect_single(&text, &pattern, algorithm)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        DetectorCommand::Compare {
            text,
            pattern,
            iterations,
        } => {
            let comparison = detector.compare_pattern(&text, &pattern, iterations)?;
            println!("{}", serde_json::to_string_pretty(&comparison)?);
            Ok(())
        }
        DetectorCommand::CompareCatalog { text } => {
            let catalog = PatternCatalog::load(&catalog_path)?;
            let comparison = detector.compare_catalog(&catalog, &text)?;
            if !comparison.detections_agree {
                warn!("Algorithms disagree on detections");
            }
            println!("{}", serde_json::to_string_pretty(&comparison)?);
            Ok(())
        }
        DetectorCommand::Patterns { action } => {
            run_pattern_action(action, &catalog_path, config.catalog.autosave)
        }
        DetectorCommand::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
    }
}

fn run_pattern_action(action: PatternAction, path: &Path, autosave: bool) -> DetectorResult<()> {
    let catalog = match PatternCatalog::load(path) {
        Ok(catalog) => catalog,
        Err(CatalogError::FileNotFound(_)) if !matches!(action, PatternAction::List) => {
            info!("Catalog {:?} not found, starting an empty one", path);
            PatternCatalog::new()
        }
        Err(e) => return Err(e.into()),
    };
    let shared = SharedCatalog::new(catalog);

    match action {
        PatternAction::List => {
            for (index, record) in shared.snapshot().iter().enumerate() {
                println!(
                    "{index:>3}  [{:<6}] {:<14} {}  ({})",
                    record.alert_level, record.category, record.pattern, record.alert_message
                );
            }
            return Ok(());
        }
        PatternAction::Add {
            pattern,
            category,
            level,
            message,
        } => {
            let record = PatternRecord::new(pattern, category, level, message);
            let index = shared.write(|catalog| catalog.add(record))?;
            info!(index, "Pattern added");
        }
        PatternAction::Update {
            index,
            pattern,
            category,
            level,
            message,
        } => {
            let record = PatternRecord::new(pattern, category, level, message);
            let previous = shared.write(|catalog| catalog.update(index, record))?;
            info!(index, previous = %previous.pattern, "Pattern updated");
        }
        PatternAction::Delete { index } => {
            let deleted = shared.write(|catalog| catalog.delete(index))?;
            info!(index, deleted = %deleted.pattern, "Pattern deleted");
        }
    }

    if autosave {
        shared.save(path)?;
    } else {
        info!("Autosave disabled, catalog changes were not written");
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("Normalized text: {}", report.normalized_text);
    println!("Algorithm:       {}", report.algorithm);
    println!(
        "Patterns found:  {}/{}",
        report.patterns_found, report.total_patterns_checked
    );
    println!(
        "Alert levels:    high={} medium={} low={}",
        report.alert_levels.high, report.alert_levels.medium, report.alert_levels.low
    );
    println!("Elapsed:         {:.4} ms", report.elapsed_ms);

    if !report.has_complaints {
        println!("No complaints detected.");
        return;
    }

    for detection in &report.detections {
        print_detection(detection);
    }
}

fn print_detection(detection: &DetectionRecord) {
    println!(
        "  [{}] {} ({}): {} at {:?}",
        detection.alert_level,
        detection.pattern,
        detection.category,
        detection.alert_message,
        detection.positions
    );
}

fn generate_config(output: &Path) -> anyhow::Result<()> {
    info!("Generating default configuration");
    let default_config = DetectorConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {parent:?}"))?;
    }

    let toml = toml::to_string_pretty(&default_config).context("Failed to serialize config")?;
    std::fs::write(output, toml).with_context(|| format!("Failed to write {output:?}"))?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}
