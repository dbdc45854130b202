// Data-driven analyzer configuration.
//
// `FlowConfig` is loaded from JSON (every field optional, so `{}` is a valid
// config) and turned into a ready analyzer by `FlowAnalyzer::from_config()`
// in `analyzer.rs`. The CLI layers its flags on top of a loaded config.
//
// Only one locale is supported at a time; the locale picks the hyphenation
// rules and must agree with the pronouncing dictionary in use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// Settings for building a `FlowAnalyzer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Locale tag for hyphenation (only English is supported).
    pub locale: String,
    /// CMUdict (or JSON) dictionary file replacing the embedded excerpt.
    pub dictionary_path: Option<PathBuf>,
    /// Strip leading/trailing punctuation from words before lookup.
    pub trim_punctuation: bool,
    /// Maximum number of words kept in the lookup cache. 0 disables it.
    pub cache_capacity: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        FlowConfig {
            locale: "en".to_string(),
            dictionary_path: None,
            trim_punctuation: false,
            cache_capacity: 10_000,
        }
    }
}

impl FlowConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        serde_json::from_str(json).map_err(|source| FlowError::ConfigJson { source })
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, FlowError> {
        let text = std::fs::read_to_string(path).map_err(|source| FlowError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), "loaded flow config");
        Ok(config)
    }
}
