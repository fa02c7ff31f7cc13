//! Init command implementation
//!
//! Handles the `dom-slim init` command which creates a default
//! `.dom-slim.toml` configuration file in the current directory.

use anyhow::Result;
use console::style;

use crate::config::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::DomSlimError;
use crate::fmt::{ROCKET, SPARKLES, WARNING};

/// Initialize dom-slim configuration
///
/// Writes the commented default threshold configuration. Refuses to
/// overwrite an existing file.
pub fn cmd_init() -> Result<()> {
    println!("{} {} Initializing dom-slim", ROCKET, style("dom-slim init").bold());
    println!();

    let cwd = std::env::current_dir().map_err(|e| DomSlimError::Io {
        context: "current directory".to_string(),
        source: e,
    })?;

    if ConfigFile::exists(&cwd) {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let path = ConfigFile::write_template(&cwd)?;

    println!(
        "{} Created {}",
        SPARKLES,
        style(path.display()).cyan().bold()
    );
    println!("   Edit the [thresholds] table to tune scoring for your site.");
    Ok(())
}
