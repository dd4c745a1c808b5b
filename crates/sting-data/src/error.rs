//! Error types for C4.5 parsing
//!
//! Every error is fatal for the parse that raised it and carries the file
//! and 1-based line needed to find the offending input.

use thiserror::Error;

use crate::config::ConfigError;
use crate::feature::FeatureError;

/// Errors that can occur while locating or parsing a C4.5 dataset
#[derive(Debug, Error)]
pub enum C45Error {
    #[error("File not found: {name} (searched {searched})")]
    FileNotFound { name: String, searched: String },

    #[error("{path}:{line}: schema parse error: {message}")]
    SchemaParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("{path}:{line}: row {row}: {message}")]
    RowParse {
        path: String,
        row: usize,
        line: usize,
        message: String,
    },

    #[error("Invalid feature: {0}")]
    Feature(#[from] FeatureError),

    #[error("Invalid parse options: {0}")]
    Config(#[from] ConfigError),

    #[error("Matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl C45Error {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        C45Error::Io {
            path: path.into(),
            source,
        }
    }

    /// 1-based line of the offending input, when known
    pub fn line(&self) -> Option<usize> {
        match self {
            C45Error::SchemaParse { line, .. } | C45Error::RowParse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for C4.5 operations
pub type C45Result<T> = Result<T, C45Error>;
