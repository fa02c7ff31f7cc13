//! Score threshold configuration
//!
//! The four thresholds shift the score curve breakpoints and control when
//! the threshold recommendations fire. Callers must keep each warning
//! threshold strictly above its good threshold; [`ScoreThresholds::validate`]
//! enforces this before any scoring so the interpolation math can never
//! divide by zero.

use crate::error::DomSlimError;
use serde::{Deserialize, Serialize};

/// Node-count and depth thresholds driving scoring and recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// Node count below which the node sub-score stays at its maximum
    #[serde(rename = "node-good", default = "default_nodes_good")]
    pub nodes_good: u64,

    /// Node count above which the steep node penalty applies
    #[serde(rename = "node-warning", default = "default_nodes_warning")]
    pub nodes_warning: u64,

    /// Depth below which the depth sub-score stays at its maximum
    #[serde(rename = "depth-good", default = "default_depth_good")]
    pub depth_good: u32,

    /// Depth above which the steep depth penalty applies
    #[serde(rename = "depth-warning", default = "default_depth_warning")]
    pub depth_warning: u32,
}

fn default_nodes_good() -> u64 {
    1000
}

fn default_nodes_warning() -> u64 {
    1500
}

fn default_depth_good() -> u32 {
    20
}

fn default_depth_warning() -> u32 {
    32
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            nodes_good: default_nodes_good(),
            nodes_warning: default_nodes_warning(),
            depth_good: default_depth_good(),
            depth_warning: default_depth_warning(),
        }
    }
}

impl ScoreThresholds {
    /// Validate that thresholds are positive and properly ordered
    ///
    /// Ensures: `0 < good < warning` for both the node and depth pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use dom_slim::config::ScoreThresholds;
    ///
    /// assert!(ScoreThresholds::default().validate().is_ok());
    ///
    /// let inverted = ScoreThresholds {
    ///     depth_good: 32,
    ///     depth_warning: 20,
    ///     ..ScoreThresholds::default()
    /// };
    /// assert!(inverted.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DomSlimError> {
        if self.nodes_good == 0 || self.depth_good == 0 {
            return Err(DomSlimError::InvalidThresholds {
                field: if self.nodes_good == 0 { "nodes" } else { "depth" }.to_string(),
                message: "thresholds must be positive".to_string(),
            });
        }

        if self.nodes_warning <= self.nodes_good {
            return Err(DomSlimError::InvalidThresholds {
                field: "nodes".to_string(),
                message: format!(
                    "warning ({}) must exceed good ({})",
                    self.nodes_warning, self.nodes_good
                ),
            });
        }

        if self.depth_warning <= self.depth_good {
            return Err(DomSlimError::InvalidThresholds {
                field: "depth".to_string(),
                message: format!(
                    "warning ({}) must exceed good ({})",
                    self.depth_warning, self.depth_good
                ),
            });
        }

        Ok(())
    }
}

/// Optional per-field overrides applied on top of the configured thresholds
///
/// Populated from CLI flags; `None` leaves the config/default value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdOverrides {
    /// Override for [`ScoreThresholds::nodes_good`]
    pub nodes_good: Option<u64>,
    /// Override for [`ScoreThresholds::nodes_warning`]
    pub nodes_warning: Option<u64>,
    /// Override for [`ScoreThresholds::depth_good`]
    pub depth_good: Option<u32>,
    /// Override for [`ScoreThresholds::depth_warning`]
    pub depth_warning: Option<u32>,
}

impl ThresholdOverrides {
    /// Merge these overrides onto a base configuration
    ///
    /// The result still needs [`ScoreThresholds::validate`]; overrides can
    /// produce a degenerate combination just like a config file can.
    pub fn apply(self, base: ScoreThresholds) -> ScoreThresholds {
        ScoreThresholds {
            nodes_good: self.nodes_good.unwrap_or(base.nodes_good),
            nodes_warning: self.nodes_warning.unwrap_or(base.nodes_warning),
            depth_good: self.depth_good.unwrap_or(base.depth_good),
            depth_warning: self.depth_warning.unwrap_or(base.depth_warning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_only_set_fields() {
        let overrides = ThresholdOverrides {
            nodes_good: Some(500),
            ..ThresholdOverrides::default()
        };
        let merged = overrides.apply(ScoreThresholds::default());
        assert_eq!(merged.nodes_good, 500);
        assert_eq!(merged.nodes_warning, 1500);
        assert_eq!(merged.depth_warning, 32);
    }

    #[test]
    fn test_default_thresholds_match_documented_values() {
        let t = ScoreThresholds::default();
        assert_eq!(t.nodes_good, 1000);
        assert_eq!(t.nodes_warning, 1500);
        assert_eq!(t.depth_good, 20);
        assert_eq!(t.depth_warning, 32);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_equal_good_and_warning() {
        let t = ScoreThresholds {
            nodes_good: 1000,
            nodes_warning: 1000,
            ..ScoreThresholds::default()
        };
        let err = t.validate().unwrap_err();
        assert!(err.to_string().contains("nodes"));
    }

    #[test]
    fn test_validate_rejects_inverted_depth_pair() {
        let t = ScoreThresholds {
            depth_good: 32,
            depth_warning: 20,
            ..ScoreThresholds::default()
        };
        let err = t.validate().unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_validate_rejects_zero_thresholds() {
        let t = ScoreThresholds {
            nodes_good: 0,
            ..ScoreThresholds::default()
        };
        assert!(t.validate().is_err());
    }
}
