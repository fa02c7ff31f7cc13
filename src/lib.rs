#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! dom-slim library
//!
//! This library provides the core functionality for DOM structural-health
//! analysis. It can be used programmatically in addition to the CLI
//! interface. The core is pure: one HTML document in, plain owned report
//! data out, with no I/O and no shared state, so it is safe to call
//! concurrently on independent documents.
//!
//! # Basic Example
//!
//! Scanning a document:
//!
//! ```
//! use dom_slim::analyzer::DomAnalyzer;
//!
//! let analyzer = DomAnalyzer::default();
//! let report = analyzer.analyze("<html><body><p>hello</p></body></html>");
//!
//! // html, head (implied), body, p
//! assert_eq!(report.stats.total_nodes, 4);
//! assert_eq!(report.score, 100);
//! assert_eq!(report.recommendations[0].title, "Good DOM Structure");
//! ```
//!
//! # Advanced Example: Custom Thresholds
//!
//! Thresholds are validated up front; degenerate configurations are
//! rejected instead of corrupting the score math:
//!
//! ```
//! use dom_slim::analyzer::DomAnalyzer;
//! use dom_slim::config::ScoreThresholds;
//!
//! let strict = ScoreThresholds {
//!     nodes_good: 200,
//!     nodes_warning: 400,
//!     depth_good: 8,
//!     depth_warning: 12,
//! };
//! let analyzer = DomAnalyzer::new(strict)?;
//!
//! let html = format!("<html><body>{}</body></html>", "<div></div>".repeat(300));
//! let report = analyzer.analyze(&html);
//! assert!(report.score < 100);
//! # Ok::<(), dom_slim::error::DomSlimError>(())
//! ```
//!
//! # Advanced Example: Remediation Plan
//!
//! The fix engine combines the census with raw-markup signature scanning:
//!
//! ```
//! use dom_slim::analyzer::DomAnalyzer;
//! use dom_slim::fixes::FixEngine;
//!
//! let html = format!(
//!     "<html><body>{}</body></html>",
//!     "<div class=\"elementor-section\"><span></span></div>".repeat(120)
//! );
//! let report = DomAnalyzer::default().analyze(&html);
//! let plan = FixEngine::new().generate(&html, &report.stats);
//!
//! assert!(!plan.theme_specific.is_empty());
//! assert!(plan.impact_summary.estimated_node_reduction > 0);
//! ```

/// DOM structure analysis: census, scoring, recommendations
pub mod analyzer;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and threshold management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Remediation plan engine with theme/plugin signature matching
pub mod fixes;
/// Shared formatting utilities
pub mod fmt;
/// Markup parser adapter
pub mod parser;
