//! Crate-level test suites for the complaint detector.
//!
//! Unit tests for individual algorithms live next to the code they test;
//! this module holds suites that cut across modules:
//! - Configuration loading and validation
//! - Error types and error reporting
//! - Catalog persistence
//! - Detector-level algorithm agreement
//! - Shared fixtures and proptest strategies

pub mod error_tests;
