//! Remediation plan types
//!
//! Tagged records for the tiered fix engine: enhanced fixes with estimated
//! node reductions, theme/plugin signature matches, and the aggregated
//! impact summary.

use crate::analyzer::Severity;
use serde::{Deserialize, Serialize};

/// Before/after markup example attached to a fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    /// Markup pattern causing the bloat
    pub before: String,
    /// Optimized replacement
    pub after: String,
    /// CSS that makes the replacement work, when needed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_changes: Option<String>,
}

/// A prioritized, actionable fix with estimated impact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedFix {
    /// Stable rule identifier (e.g. `excessive_divs`)
    pub id: String,
    /// How urgent this fix is
    pub severity: Severity,
    /// Short fix title
    pub title: String,
    /// Description with the measured values
    pub description: String,
    /// Estimated DOM nodes removed by applying the fix
    pub estimated_reduction: u64,
    /// Free-text effort range, e.g. "30-45 minutes"
    pub time_to_fix: String,
    /// Optional before/after example for UI rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<CodeExample>,
    /// Concrete remediation steps, in order
    pub steps: Vec<String>,
}

/// A theme/plugin signature hit in the raw markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Stable identifier: `<signature>_<issue>`
    pub key: String,
    /// Human name of the detected theme or plugin
    pub display_name: String,
    /// Issue title derived from the issue key
    pub issue_title: String,
    /// What the signature implies structurally
    pub description: String,
    /// How to address it
    pub fix_text: String,
    /// Vendor documentation, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

/// Estimated Core-Web-Vitals improvement from the planned reduction
///
/// Fixed linear-with-cap heuristics, not measured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceImprovement {
    /// Largest Contentful Paint improvement, percent (capped at 30)
    pub lcp_pct: u32,
    /// First Input Delay improvement, percent (capped at 25)
    pub fid_pct: u32,
    /// Cumulative Layout Shift improvement, percent (capped at 20)
    pub cls_pct: u32,
}

/// Aggregated impact of all fixes in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactSummary {
    /// Sum of estimated reductions across the three priority tiers
    pub estimated_node_reduction: u64,
    /// Sum of the lower bound parsed from each fix's effort range
    pub estimated_time_minutes: u64,
    /// Derived Core-Web-Vitals estimate
    pub estimated_performance_improvement: PerformanceImprovement,
}

/// Complete remediation plan for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    /// Fixes targeting ≥35% DOM reduction
    pub high_priority: Vec<EnhancedFix>,
    /// Fixes targeting 15-35% DOM reduction
    pub medium_priority: Vec<EnhancedFix>,
    /// Fixes targeting <15% DOM reduction
    pub low_priority: Vec<EnhancedFix>,
    /// Issues specific to the detected theme
    pub theme_specific: Vec<PatternMatch>,
    /// Issues specific to detected plugins
    pub plugin_specific: Vec<PatternMatch>,
    /// Aggregated impact of the tiers above
    pub impact_summary: ImpactSummary,
}

impl RecommendationBundle {
    /// Total number of fixes across the three priority tiers
    pub fn fix_count(&self) -> usize {
        self.high_priority.len() + self.medium_priority.len() + self.low_priority.len()
    }

    /// True when no tier fired and no signature matched
    pub fn is_empty(&self) -> bool {
        self.fix_count() == 0 && self.theme_specific.is_empty() && self.plugin_specific.is_empty()
    }
}
