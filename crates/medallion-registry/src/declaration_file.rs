//! TOML declaration files
//!
//! A declaration file holds a list of `[[source]]` tables:
//!
//! ```toml
//! [[source]]
//! database = "bigquery-public-data"
//! schema = "stackoverflow"
//! name = "badges"
//! ```

use medallion_core::{DeclarationError, SourceDescriptor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed declaration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclarationFile {
    /// Declared sources, in file order
    #[serde(rename = "source", default)]
    pub sources: Vec<SourceDescriptor>,
}

impl DeclarationFile {
    /// Load a declaration file from disk
    pub fn from_file(path: &Path) -> Result<Self, DeclarationFileError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DeclarationFileError::IoError(path.display().to_string(), e.to_string()))?;

        Self::from_toml(&contents)
    }

    /// Parse a declaration file from a TOML string
    ///
    /// Missing required fields are reported by name by the TOML parser.
    pub fn from_toml(toml: &str) -> Result<Self, DeclarationFileError> {
        toml::from_str(toml).map_err(|e| DeclarationFileError::ParseError(e.to_string()))
    }

    /// Declare every source in this file into a registry
    ///
    /// Returns the number of declarations applied. File order is preserved.
    pub fn apply(&self, registry: &mut super::SourceRegistry) -> Result<usize, DeclarationError> {
        for descriptor in &self.sources {
            tracing::debug!(table = %descriptor.table_ref(), "declaring source");
            registry.declare(descriptor.clone())?;
        }
        Ok(self.sources.len())
    }
}

/// Declaration file parsing errors
#[derive(Debug, thiserror::Error)]
pub enum DeclarationFileError {
    #[error("failed to read declaration file {0}: {1}")]
    IoError(String, String),

    #[error("failed to parse declaration TOML: {0}")]
    ParseError(String),
}
