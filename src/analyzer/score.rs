//! Performance score calculation
//!
//! Maps (total nodes, max depth) to a 0-100 score: two independently
//! clamped 0-50 sub-scores, linear between the good and warning thresholds,
//! steeper beyond warning. Pure and deterministic; thresholds must satisfy
//! [`ScoreThresholds::validate`] before the math runs.

use crate::config::ScoreThresholds;
use crate::error::DomSlimError;
use serde::{Deserialize, Serialize};

/// Compute the 0-100 performance score
///
/// Validates the thresholds first; degenerate configurations (warning ≤
/// good) are rejected instead of producing NaN.
///
/// # Examples
///
/// ```
/// use dom_slim::analyzer::score::performance_score;
/// use dom_slim::config::ScoreThresholds;
///
/// let thresholds = ScoreThresholds::default();
/// assert_eq!(performance_score(100, 5, &thresholds)?, 100);
/// assert_eq!(performance_score(1600, 10, &thresholds)?, 98);
/// # Ok::<(), dom_slim::error::DomSlimError>(())
/// ```
pub fn performance_score(
    total_nodes: u64,
    max_depth: u32,
    thresholds: &ScoreThresholds,
) -> Result<u8, DomSlimError> {
    thresholds.validate()?;
    Ok(score_validated(total_nodes, max_depth, thresholds))
}

/// Score with thresholds the caller has already validated
pub(crate) fn score_validated(total_nodes: u64, max_depth: u32, t: &ScoreThresholds) -> u8 {
    let total = node_subscore(total_nodes, t) + depth_subscore(max_depth, t);
    total.round() as u8
}

/// Node sub-score (0-50)
fn node_subscore(total_nodes: u64, t: &ScoreThresholds) -> f64 {
    if total_nodes > t.nodes_warning {
        let excess = (total_nodes - t.nodes_warning) as f64;
        (50.0 - excess / 50.0).max(0.0)
    } else if total_nodes > t.nodes_good {
        let range = (t.nodes_warning - t.nodes_good) as f64;
        let excess = (total_nodes - t.nodes_good) as f64;
        50.0 - (excess / range) * 25.0
    } else {
        50.0
    }
}

/// Depth sub-score (0-50); the over-warning penalty is steeper than the
/// node penalty (5 points per level)
fn depth_subscore(max_depth: u32, t: &ScoreThresholds) -> f64 {
    if max_depth > t.depth_warning {
        let excess = (max_depth - t.depth_warning) as f64;
        (50.0 - excess * 5.0).max(0.0)
    } else if max_depth > t.depth_good {
        let range = (t.depth_warning - t.depth_good) as f64;
        let excess = (max_depth - t.depth_good) as f64;
        50.0 - (excess / range) * 25.0
    } else {
        50.0
    }
}

/// Health classification derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    /// Score 80-100
    Good,
    /// Score 50-79
    Warning,
    /// Score 0-49
    Critical,
}

impl ScoreStatus {
    /// Classify a score
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreStatus::Good
        } else if score >= 50 {
            ScoreStatus::Warning
        } else {
            ScoreStatus::Critical
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            ScoreStatus::Good => "good",
            ScoreStatus::Warning => "warning",
            ScoreStatus::Critical => "critical",
        }
    }
}
