//! Error types for the stride_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride_core operations
///
/// Malformed sheet content never produces one of these: the parser degrades
/// to an empty result instead. Errors are reserved for I/O, configuration and
/// caller mistakes such as asking for a phase that does not exist.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested phase is not in the configured phase table
    #[error("Unknown training phase: {0}")]
    UnknownPhase(String),

    /// Sheet URL could not be turned into a CSV export URL
    #[error("Sheet URL error: {0}")]
    SheetUrl(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
