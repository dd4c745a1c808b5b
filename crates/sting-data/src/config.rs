//! Parse options for C4.5 readers
//!
//! Options can be built in code or loaded from TOML/JSON, e.g.
//!
//! ```toml
//! comment = "#"
//! missing_tokens = ["?", ""]
//! negative_labels = ["0", "false", "-"]
//! positive_labels = ["1", "true", "+"]
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options controlling how `.names` and `.data` lines are read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Marker starting a comment that runs to end of line
    pub comment: char,
    /// Tokens denoting a missing value (encoded as NaN)
    pub missing_tokens: Vec<String>,
    /// Class label tokens mapped to `0` (case-insensitive)
    pub negative_labels: Vec<String>,
    /// Class label tokens mapped to `1` (case-insensitive)
    pub positive_labels: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comment: '#',
            missing_tokens: vec!["?".to_string(), String::new()],
            negative_labels: vec!["0".to_string(), "false".to_string()],
            positive_labels: vec!["1".to_string(), "true".to_string()],
        }
    }
}

impl ParseOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize options to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load options from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize options to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether a raw data token denotes a missing value
    pub fn is_missing(&self, token: &str) -> bool {
        self.missing_tokens.iter().any(|m| m == token)
    }

    /// Validate option values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.comment, ',' | '.' | ':') || self.comment.is_whitespace() {
            return Err(ConfigError::InvalidComment(self.comment));
        }

        if self.negative_labels.is_empty() || self.positive_labels.is_empty() {
            return Err(ConfigError::MissingLabels);
        }

        if let Some(label) = self
            .negative_labels
            .iter()
            .find(|n| self.positive_labels.iter().any(|p| p.eq_ignore_ascii_case(n)))
        {
            return Err(ConfigError::OverlappingLabels(label.clone()));
        }

        Ok(())
    }
}

/// Option validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Comment marker {0:?} would clash with the C4.5 syntax")]
    InvalidComment(char),

    #[error("Both negative and positive label tokens are required")]
    MissingLabels,

    #[error("Label token '{0}' is both negative and positive")]
    OverlappingLabels(String),
}
