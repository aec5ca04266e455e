//! Unified Error Type
//!
//! Centralized error type for the generator and its command-line caller.
//!
//! ## Design Principles
//!
//! - Single error type (`DocError`) for the whole crate
//! - Structured variants carry the offending path or setting
//! - Documentation mismatches are normal outcomes, never errors
//! - No panic/unwrap in library code

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// The supplied root does not exist or is not a directory
    #[error("Directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DocError>;

impl DocError {
    /// Create a not-found error for a root path
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Check if this error means the requested root is missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<regex::Error> for DocError {
    fn from(err: regex::Error) -> Self {
        DocError::Pattern(err.to_string())
    }
}

impl From<glob::PatternError> for DocError {
    fn from(err: glob::PatternError) -> Self {
        DocError::Config(format!("Invalid exclude pattern: {}", err))
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error, reported as a configuration problem
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| DocError::Config(format!("{}: {}", context.into(), e)))
    }
}
