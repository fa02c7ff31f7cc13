//! Configuration file and threshold management
//!
//! dom-slim reads an optional `.dom-slim.toml` from the working directory
//! and merges CLI flag overrides on top before validating the result.

pub mod file;
pub mod thresholds;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use thresholds::{ScoreThresholds, ThresholdOverrides};
