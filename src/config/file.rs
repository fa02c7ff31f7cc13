//! Configuration file data structures

use super::thresholds::ScoreThresholds;
use crate::error::DomSlimError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".dom-slim.toml";

/// dom-slim configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Score thresholds (all fields optional, defaults applied per field)
    #[serde(default)]
    pub thresholds: ScoreThresholds,
}

impl ConfigFile {
    /// Check whether a config file exists in the given directory
    pub fn exists(dir: &Path) -> bool {
        dir.join(CONFIG_FILE_NAME).exists()
    }

    /// Load config from `.dom-slim.toml` in the given directory
    ///
    /// Returns the default configuration when no file exists. A file that
    /// exists but fails to parse is an error; thresholds are validated by
    /// the caller after CLI overrides are applied.
    pub fn load(dir: &Path) -> Result<ConfigFile, DomSlimError> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(DomSlimError::Io {
                    context: config_path.display().to_string(),
                    source: e,
                });
            }
        };

        toml_edit::de::from_str(&contents).map_err(|e| DomSlimError::ConfigParse {
            path: config_path,
            message: e.to_string(),
        })
    }

    /// Default config file contents written by `dom-slim init`
    pub fn default_template() -> &'static str {
        r#"# dom-slim configuration
#
# Thresholds shift the 0-100 score curve and control when structural
# recommendations fire. Each warning value must exceed its good value.

[thresholds]
# Node count kept below this scores the full 50 node points
node-good = 1000
# Node count above this triggers the steep penalty and a critical finding
node-warning = 1500
# Tree depth kept below this scores the full 50 depth points
depth-good = 20
# Tree depth above this triggers the steep penalty and a critical finding
depth-warning = 32
"#
    }

    /// Write the default template into the given directory
    ///
    /// The caller is responsible for refusing to overwrite an existing file
    /// (see the `init` command).
    pub fn write_template(dir: &Path) -> Result<PathBuf, DomSlimError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, Self::default_template()).map_err(|e| DomSlimError::Io {
            context: config_path.display().to_string(),
            source: e,
        })?;
        Ok(config_path)
    }
}
