//! YAML configuration file support.
//!
//! This module loads the whole preparation run (source directory, output
//! path, parallelism, and the normalization section) from a single YAML
//! file, so a corpus's removal rules live in a reviewable configuration
//! value instead of an inline literal list.
//!
//! ## Example configuration
//!
//! ```yaml
//! # Intertext corpus preparation
//! source_dir: corpus
//! output_path: corpus.json
//! parallel: false
//!
//! normalize:
//!   version: 1
//!   strip_ascii_punctuation: true
//!   strip_cjk_punctuation: true
//!   strip_box_and_geometry: true
//!   strip_latin_letters: true
//!   extra: []
//! ```
//!
//! Every field has a default; an absent file means "prepare ./corpus into
//! ./corpus.json with the built-in removal groups".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use normalize::NormalizeConfig;

/// Errors that can occur when loading a configuration file.
///
/// These are start-up issues, surfaced before any corpus work begins.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level configuration for a preparation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Root directory of raw source files.
    pub source_dir: PathBuf,

    /// Destination of the serialized corpus artifact.
    pub output_path: PathBuf,

    /// Fan out the per-file read+normalize step across threads.
    pub parallel: bool,

    /// Normalization stage configuration.
    pub normalize: NormalizeConfig,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("corpus"),
            output_path: PathBuf::from("corpus.json"),
            parallel: false,
            normalize: NormalizeConfig::default(),
        }
    }
}

impl PrepConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PrepConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration, including the removal set it implies.
    ///
    /// Call at start-up: a bad removal entry should fail the run before
    /// any file is read.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "source_dir must not be empty".into(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "output_path must not be empty".into(),
            ));
        }
        self.normalize
            .removal_set()
            .map(|_| ())
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}
