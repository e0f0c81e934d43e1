use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::diagnostics::NumkitError;
use crate::sequence::DEFAULT_SEQUENCE_COUNT;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "numkit.toml";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub demo: DemoConfig,
    pub sequence: SequenceConfig,
}

/// Operands and greeting for the demo driver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub greeting: String,
    pub a: i32,
    pub b: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { greeting: "Hello, World!".to_string(), a: 5, b: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceConfig {
    pub count: u32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { count: DEFAULT_SEQUENCE_COUNT }
    }
}

impl Config {
    /// Parse a config from TOML text. `path` is only used for error reporting.
    pub fn from_toml_str(src: &str, path: &Path) -> Result<Self, NumkitError> {
        toml::from_str(src)
            .map_err(|e| NumkitError::config(format!("failed to parse {}: {e}", path.display()), path))
    }

    pub fn load(path: &Path) -> Result<Self, NumkitError> {
        let src = std::fs::read_to_string(path)
            .map_err(|e| NumkitError::config(format!("failed to read {}: {e}", path.display()), path))?;
        Self::from_toml_str(&src, path)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `numkit.toml` in `dir` is used
    /// when present, and the built-in defaults when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, NumkitError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading discovered config");
            Self::load(&candidate)
        } else {
            debug!(dir = %dir.display(), "no config file found, using defaults");
            Ok(Self::default())
        }
    }
}
