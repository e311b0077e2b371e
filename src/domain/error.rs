use std::io;

use thiserror::Error;

/// Library-wide error type for adaudit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Campaign dataset file does not exist.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Campaign dataset could not be read or decoded.
    #[error("Failed to read dataset: {0}")]
    Dataset(#[from] csv::Error),

    /// Metric derivation failed.
    #[error(transparent)]
    Metrics(#[from] crate::domain::metrics::MetricsError),

    /// Prompt template rendering failed.
    #[error("Failed to render {template} prompt: {details}")]
    PromptRender { template: String, details: String },

    /// Completion service request failed. Displays the bare detail so the
    /// "Error generating response: {detail}" sentinel stays clean.
    #[error("{0}")]
    Completion(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}
