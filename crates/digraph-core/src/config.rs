use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cycles::DEFAULT_CYCLE_LIMIT;
use crate::graph::ReadOptions;

/// Analysis settings, usually loaded from a TOML file:
///
/// ```toml
/// [input]
/// reject_empty = true
/// one_based = true
///
/// [cycles]
/// limit = 10
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub cycles: CycleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_true")]
    pub reject_empty: bool,
    #[serde(default = "default_true")]
    pub one_based: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            reject_empty: default_true(),
            one_based: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    #[serde(default = "default_cycle_limit")]
    pub limit: usize,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            limit: default_cycle_limit(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid TOML for this schema.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse analysis config")
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` when given, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Reader options for the text format.
    #[must_use]
    pub const fn read_options(&self) -> ReadOptions {
        ReadOptions {
            reject_empty: self.input.reject_empty,
            one_based: self.input.one_based,
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_cycle_limit() -> usize {
    DEFAULT_CYCLE_LIMIT
}
