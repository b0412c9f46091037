//! Error types for the conversion pipeline
//!
//! The variants split along the fault-isolation boundary: `Io` and `Yaml` can
//! be fatal to a run depending on where they occur, while `Validation`,
//! `TransformerNotFound` and `ExecutionFailed` are always per-document and
//! never abort the batch.

use thiserror::Error;

/// Conversion error
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document is not a mapping or lacks apiVersion/kind
    #[error("Invalid resource document: {0}")]
    Validation(String),

    /// External converter binary is not installed / not on PATH
    #[error("'{0}' not found. Please ensure it is installed and in PATH")]
    TransformerNotFound(String),

    /// External converter ran but exited non-zero
    #[error("'{transformer}' failed{}: {stderr}", exit_code_suffix(.code))]
    ExecutionFailed {
        transformer: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
