//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```
//! use dom_slim::config::ScoreThresholds;
//! use dom_slim::error::DomSlimError;
//!
//! let thresholds = ScoreThresholds {
//!     nodes_good: 1500,
//!     nodes_warning: 1000,
//!     ..ScoreThresholds::default()
//! };
//!
//! match thresholds.validate() {
//!     Ok(()) => unreachable!("inverted thresholds must be rejected"),
//!     Err(e) => assert!(matches!(e, DomSlimError::InvalidThresholds { .. })),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Enhanced dom-slim errors with contextual suggestions
#[derive(Error, Debug)]
pub enum DomSlimError {
    /// Threshold configuration violates the warning > good > 0 precondition
    #[error("invalid threshold configuration: {field} ({message})")]
    InvalidThresholds {
        /// Threshold pair that failed validation
        field: String,
        /// What is wrong with the configured values
        message: String,
    },

    /// Input HTML file missing or unreadable
    #[error("input file not found: {path}")]
    InputNotFound {
        /// Path to the missing document
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Configuration file exists but could not be parsed
    #[error("failed to parse {path}")]
    ConfigParse {
        /// Path to the config file
        path: PathBuf,
        /// Parser error message
        message: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl DomSlimError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dom_slim::error::DomSlimError;
    ///
    /// let error = DomSlimError::InvalidThresholds {
    ///     field: "nodes".to_string(),
    ///     message: "warning (900) must exceed good (1000)".to_string(),
    /// };
    ///
    /// let suggestion = error.suggestion();
    /// assert!(suggestion.is_some());
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidThresholds { .. } => Some(
                "Thresholds must be positive with warning > good.\n  \
                 Check the [thresholds] table in .dom-slim.toml or the \
                 --node-*/--depth-* flags"
                    .to_string(),
            ),
            Self::InputNotFound { path, .. } => Some(format!(
                "Ensure {} exists and is readable, or pass a different file",
                path.display()
            )),
            Self::ConfigParse { .. } => {
                Some("Run 'dom-slim init' in an empty directory to see a valid example".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidThresholds { .. } | Self::ConfigParse { .. } => 78, // EX_CONFIG
            Self::InputNotFound { .. } => 66,                                // EX_NOINPUT
            Self::Io { .. } => 74,                                           // EX_IOERR
        }
    }
}

/// Formats errors for terminal display with suggestions
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format an error chain for terminal display
    ///
    /// Includes the suggestion block when the underlying error is a
    /// [`DomSlimError`] that carries one.
    pub fn format(error: &anyhow::Error) -> String {
        let mut output = format!("Error: {}", error);

        for cause in error.chain().skip(1) {
            output.push_str(&format!("\n  Caused by: {}", cause));
        }

        if let Some(dom_error) = error.downcast_ref::<DomSlimError>() {
            if let Some(suggestion) = dom_error.suggestion() {
                output.push_str(&format!("\n\n💡 Suggestion: {}", suggestion));
            }
        }

        output
    }

    /// Exit code for an error chain (1 unless a [`DomSlimError`] says otherwise)
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        error
            .downcast_ref::<DomSlimError>()
            .map(DomSlimError::exit_code)
            .unwrap_or(1)
    }
}
