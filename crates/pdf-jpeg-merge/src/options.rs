//! Merge configuration and input selection

use crate::constants::DEFAULT_OUTPUT_FILE;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the input images come from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Recursively scan a folder for `.jpg` / `.jpeg` files
    Folder(PathBuf),
    /// Comma-separated list of image paths
    List(String),
}

/// Merge configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MergeOptions {
    /// Root folder to scan; takes precedence over `files`
    pub folder: Option<PathBuf>,
    /// Comma-separated list of image paths
    pub files: Option<String>,
    /// Destination PDF
    pub output: PathBuf,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            folder: None,
            files: None,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl MergeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| MergeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Pick the input mode. A non-empty folder wins over the file list;
    /// with neither set this is a usage error.
    pub fn input_source(&self) -> Result<InputSource> {
        if let Some(folder) = self.folder.as_ref().filter(|f| !f.as_os_str().is_empty()) {
            return Ok(InputSource::Folder(folder.clone()));
        }
        if let Some(files) = self.files.as_ref().filter(|f| !f.is_empty()) {
            return Ok(InputSource::List(files.clone()));
        }
        Err(MergeError::Usage)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.input_source()?;

        if self.output.as_os_str().is_empty() {
            return Err(MergeError::Config("No output file specified".to_string()));
        }

        Ok(())
    }
}
