//! DOM structure analysis
//!
//! Single-pass structural census, 0-100 scoring, and threshold
//! recommendations over a parsed document:
//! - Census and traversal (`stats`, `traverse`)
//! - Score calculation (`score`)
//! - Threshold recommendations (`recommend`)
//! - Depth-limited tree explorer (`tree`)
//!
//! # Examples
//!
//! ```
//! use dom_slim::analyzer::DomAnalyzer;
//!
//! let analyzer = DomAnalyzer::default();
//! let report = analyzer.analyze("<html><body><p>hello</p></body></html>");
//!
//! assert_eq!(report.score, 100);
//! assert_eq!(report.stats.tag_count("p"), 1);
//! ```

pub mod recommend;
pub mod report;
pub mod score;
pub mod stats;
pub mod traverse;
pub mod tree;

pub use recommend::{Recommendation, Severity};
pub use score::ScoreStatus;
pub use stats::{LargeNode, StructuralStats};
pub use tree::{NodeIssue, TreeNode};

use crate::config::ScoreThresholds;
use crate::error::DomSlimError;
use crate::parser;
use serde::{Deserialize, Serialize};

/// Full scan output for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Performance score in 0-100
    pub score: u8,
    /// Health classification of the score
    pub status: ScoreStatus,
    /// Structural census
    pub stats: StructuralStats,
    /// Threshold recommendations, rule order
    pub recommendations: Vec<Recommendation>,
}

/// Main analyzer: validated thresholds plus the scan pipeline
#[derive(Debug, Clone)]
pub struct DomAnalyzer {
    thresholds: ScoreThresholds,
}

impl Default for DomAnalyzer {
    /// Analyzer with the documented default thresholds (1000/1500, 20/32)
    fn default() -> Self {
        Self {
            thresholds: ScoreThresholds::default(),
        }
    }
}

impl DomAnalyzer {
    /// Create an analyzer, validating the thresholds up front
    ///
    /// Rejects degenerate configurations (warning ≤ good, zero values) so
    /// the score interpolation can never divide by zero.
    pub fn new(thresholds: ScoreThresholds) -> Result<Self, DomSlimError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Thresholds this analyzer scores against
    pub fn thresholds(&self) -> &ScoreThresholds {
        &self.thresholds
    }

    /// Analyze a document: parse, traverse, score, recommend
    ///
    /// Never fails: the parser repairs malformed markup and the thresholds
    /// were validated at construction. Empty input yields the synthesized
    /// html/head/body scaffolding and a perfect score.
    pub fn analyze(&self, html: &str) -> ScanReport {
        let doc = parser::parse_document(html);
        let stats = match parser::root_element(&doc) {
            Some(root) => traverse::traverse(root),
            // Unreachable with parse_document, but a rootless tree is a
            // defined empty census rather than a panic.
            None => StructuralStats {
                total_nodes: 0,
                max_depth: 0,
                element_counts: Default::default(),
                node_distribution: Default::default(),
                large_nodes: Vec::new(),
            },
        };

        let score = score::score_validated(stats.total_nodes, stats.max_depth, &self.thresholds);
        let recommendations = recommend::recommend(&stats, &self.thresholds);

        log::debug!(
            "analyzed document: {} nodes, depth {}, score {}",
            stats.total_nodes,
            stats.max_depth,
            score
        );

        ScanReport {
            score,
            status: ScoreStatus::from_score(score),
            stats,
            recommendations,
        }
    }
}

/// Structural deltas between two scans of the same page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanComparison {
    /// Score before the change
    pub before_score: u8,
    /// Score after the change
    pub after_score: u8,
    /// Score delta (positive = improvement)
    pub score_delta: i16,
    /// Node total before the change
    pub before_nodes: u64,
    /// Node total after the change
    pub after_nodes: u64,
    /// Node delta (negative = fewer nodes)
    pub node_delta: i64,
    /// Depth before the change
    pub before_depth: u32,
    /// Depth after the change
    pub after_depth: u32,
    /// Depth delta (negative = flatter tree)
    pub depth_delta: i64,
}

/// Compare two scan reports (typically before/after a remediation)
pub fn compare(before: &ScanReport, after: &ScanReport) -> ScanComparison {
    ScanComparison {
        before_score: before.score,
        after_score: after.score,
        score_delta: i16::from(after.score) - i16::from(before.score),
        before_nodes: before.stats.total_nodes,
        after_nodes: after.stats.total_nodes,
        node_delta: after.stats.total_nodes as i64 - before.stats.total_nodes as i64,
        before_depth: before.stats.max_depth,
        after_depth: after.stats.max_depth,
        depth_delta: i64::from(after.stats.max_depth) - i64::from(before.stats.max_depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_rejects_degenerate_thresholds() {
        let thresholds = ScoreThresholds {
            nodes_good: 1500,
            nodes_warning: 1000,
            ..ScoreThresholds::default()
        };
        assert!(DomAnalyzer::new(thresholds).is_err());
    }

    #[test]
    fn test_minimal_document_scores_perfect_with_success_recommendation() {
        let report = DomAnalyzer::default().analyze("<html><body></body></html>");
        assert_eq!(report.score, 100);
        assert_eq!(report.status, ScoreStatus::Good);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].severity, Severity::Success);
    }

    #[test]
    fn test_empty_input_yields_scaffolding_census() {
        let report = DomAnalyzer::default().analyze("");
        assert_eq!(report.stats.total_nodes, 3); // html, head, body
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_compare_tracks_score_and_node_deltas() {
        let analyzer = DomAnalyzer::default();
        let divs_before = "<div></div>".repeat(1600);
        let before = analyzer.analyze(&format!("<html><body>{}</body></html>", divs_before));
        let after = analyzer.analyze("<html><body><div></div></body></html>");

        let diff = compare(&before, &after);
        assert!(diff.score_delta > 0);
        assert!(diff.node_delta < 0);
        assert_eq!(diff.after_nodes, 4);
        assert_eq!(diff.depth_delta, 0);
    }
}
