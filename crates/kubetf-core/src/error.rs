//! Error types for kubetf-core

use thiserror::Error;

/// Core error
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
