// Copyright (c) 2025 Complaint Detector Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the matching engine.

/// Error types for matching engine operations
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// Algorithm selector outside the supported set
    #[error("Unknown algorithm '{0}': expected 'linear' or 'bad_character'")]
    UnknownAlgorithm(String),
}

/// Result type for matching engine operations
pub type Result<T> = std::result::Result<T, MatchingError>;
