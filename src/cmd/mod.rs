//! Command handlers for the dom-slim CLI
//!
//! This module contains all command implementations, organized by
//! functionality. Each submodule handles a specific CLI command.

pub mod compare;
pub mod completions;
pub mod init;
pub mod plan;
pub mod scan;
pub mod tree;

// Re-export command functions for convenient access
pub use compare::cmd_compare;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use plan::cmd_plan;
pub use scan::cmd_scan;
pub use tree::cmd_tree;

use crate::config::{ConfigFile, ScoreThresholds, ThresholdOverrides};
use crate::error::DomSlimError;

/// Thresholds for the current invocation: config file (when present) with
/// CLI overrides merged on top
///
/// Validation happens in `DomAnalyzer::new`, after the merge, so a
/// degenerate combination is reported against the effective values.
pub(crate) fn resolve_thresholds(
    overrides: ThresholdOverrides,
) -> Result<ScoreThresholds, DomSlimError> {
    let cwd = std::env::current_dir().map_err(|e| DomSlimError::Io {
        context: "current directory".to_string(),
        source: e,
    })?;
    let config = ConfigFile::load(&cwd)?;
    Ok(overrides.apply(config.thresholds))
}
