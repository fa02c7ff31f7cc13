//! Impact aggregation
//!
//! Sums estimated reductions and effort lower bounds across the three
//! priority tiers, then derives the capped Core-Web-Vitals estimate.
//! Signature matches are advisory and carry no reduction of their own.

use crate::fixes::types::{EnhancedFix, ImpactSummary, PerformanceImprovement};

/// Aggregate the plan's impact
pub(crate) fn impact_summary(
    high: &[EnhancedFix],
    medium: &[EnhancedFix],
    low: &[EnhancedFix],
) -> ImpactSummary {
    let all = high.iter().chain(medium).chain(low);

    let mut total_reduction: u64 = 0;
    let mut total_minutes: u64 = 0;
    for fix in all {
        total_reduction += fix.estimated_reduction;
        total_minutes += first_minutes(&fix.time_to_fix);
    }

    ImpactSummary {
        estimated_node_reduction: total_reduction,
        estimated_time_minutes: total_minutes,
        estimated_performance_improvement: performance_improvement(total_reduction),
    }
}

/// Lower bound of an effort range: the first integer in the string, 0 when
/// none is present
fn first_minutes(time_to_fix: &str) -> u64 {
    let digits: String = time_to_fix
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Capped linear heuristics mapping node reduction to metric improvement
fn performance_improvement(node_reduction: u64) -> PerformanceImprovement {
    let estimate = |divisor: f64, cap: u32| -> u32 {
        ((node_reduction as f64 / divisor).round() as u32).min(cap)
    };
    PerformanceImprovement {
        lcp_pct: estimate(50.0, 30),
        fid_pct: estimate(60.0, 25),
        cls_pct: estimate(80.0, 20),
    }
}
