//! Threshold-based structural recommendations
//!
//! Each rule inspects the census independently and may emit one
//! recommendation; emission order is rule order. When nothing fires, a
//! single `success` recommendation confirms the structure is healthy.

use crate::analyzer::stats::StructuralStats;
use crate::config::ScoreThresholds;
use serde::{Deserialize, Serialize};

/// Severity of a recommendation or fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Structural problem with significant performance impact
    Critical,
    /// Should be addressed but not blocking
    Warning,
    /// Worth reviewing
    Info,
    /// Healthy structure, nothing to do
    Success,
}

/// A single structural recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// How urgent this finding is
    pub severity: Severity,
    /// Short finding title
    pub title: String,
    /// Finding description with the measured value and threshold
    pub description: String,
    /// Remediation suggestions, most effective first
    pub suggestions: Vec<String>,
}

fn suggestions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Evaluate all threshold rules against a census
///
/// # Examples
///
/// ```
/// use dom_slim::analyzer::{recommend, DomAnalyzer};
///
/// let analyzer = DomAnalyzer::default();
/// let report = analyzer.analyze("<html><body><p>hi</p></body></html>");
/// let recs = recommend::recommend(&report.stats, analyzer.thresholds());
///
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].title, "Good DOM Structure");
/// ```
pub fn recommend(stats: &StructuralStats, thresholds: &ScoreThresholds) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // Rule 1: total node count (two tiers, higher severity wins).
    if stats.total_nodes > thresholds.nodes_warning {
        recommendations.push(Recommendation {
            severity: Severity::Critical,
            title: "Excessive DOM Size".to_string(),
            description: format!(
                "The page has {} DOM nodes, which exceeds the recommended maximum of {}. \
                 This can significantly impact performance.",
                stats.total_nodes, thresholds.nodes_warning
            ),
            suggestions: suggestions(&[
                "Consider lazy loading content below the fold",
                "Remove unnecessary wrapper elements",
                "Use virtual scrolling for long lists",
                "Review components that may add excessive markup",
            ]),
        });
    } else if stats.total_nodes > thresholds.nodes_good {
        recommendations.push(Recommendation {
            severity: Severity::Warning,
            title: "High DOM Node Count".to_string(),
            description: format!(
                "The page has {} DOM nodes. Consider reducing this below {} for optimal \
                 performance.",
                stats.total_nodes, thresholds.nodes_good
            ),
            suggestions: suggestions(&[
                "Audit the page structure for unnecessary elements",
                "Consider component-based loading for complex sections",
            ]),
        });
    }

    // Rule 2: maximum depth, independent of rule 1.
    if stats.max_depth > thresholds.depth_warning {
        recommendations.push(Recommendation {
            severity: Severity::Critical,
            title: "Excessive DOM Depth".to_string(),
            description: format!(
                "The DOM tree has a maximum depth of {} levels, exceeding the recommended \
                 {} levels.",
                stats.max_depth, thresholds.depth_warning
            ),
            suggestions: suggestions(&[
                "Flatten the HTML structure where possible",
                "Review page builder output for excessive nesting",
                "Use CSS Grid or Flexbox instead of nested containers",
            ]),
        });
    } else if stats.max_depth > thresholds.depth_good {
        recommendations.push(Recommendation {
            severity: Severity::Warning,
            title: "Deep DOM Nesting".to_string(),
            description: format!(
                "The DOM tree has a depth of {} levels. Consider reducing this below {}.",
                stats.max_depth, thresholds.depth_good
            ),
            suggestions: suggestions(&[
                "Review nested container elements",
                "Simplify component hierarchies",
            ]),
        });
    }

    // Rule 3: oversized containers.
    if let Some(largest) = stats.large_nodes.first() {
        recommendations.push(Recommendation {
            severity: Severity::Warning,
            title: "Elements with Many Children".to_string(),
            description: format!(
                "Found {} elements with more than 50 direct children. The largest has {} \
                 children.",
                stats.large_nodes.len(),
                largest.children_count
            ),
            suggestions: suggestions(&[
                "Consider pagination for long lists",
                "Implement infinite scroll or load-more patterns",
                "Use content virtualization for large data sets",
            ]),
        });
    }

    // Rule 4: per-tag volume checks, each independent.
    let div_count = stats.tag_count("div");
    if div_count > 100 {
        recommendations.push(Recommendation {
            severity: Severity::Info,
            title: "High Div Count".to_string(),
            description: format!(
                "The page contains {} div elements. This might indicate wrapper div bloat.",
                div_count
            ),
            suggestions: suggestions(&[
                "Use semantic HTML elements where appropriate",
                "Remove unnecessary wrapper divs",
                "Review CSS to reduce the need for structural markup",
            ]),
        });
    }

    let span_count = stats.tag_count("span");
    if span_count > 50 {
        recommendations.push(Recommendation {
            severity: Severity::Info,
            title: "High Span Count".to_string(),
            description: format!(
                "The page contains {} span elements. Consider if all are necessary.",
                span_count
            ),
            suggestions: suggestions(&[
                "Review inline styling elements",
                "Consider using CSS classes instead of wrapper spans",
            ]),
        });
    }

    let img_count = stats.tag_count("img");
    if img_count > 30 {
        recommendations.push(Recommendation {
            severity: Severity::Info,
            title: "Many Images Detected".to_string(),
            description: format!(
                "The page has {} images. This can impact initial load time and DOM complexity.",
                img_count
            ),
            suggestions: suggestions(&[
                "Implement lazy loading for images below the fold",
                "Consider using CSS sprites for icons",
                "Use responsive images with srcset",
            ]),
        });
    }

    let form_elements = stats.tag_count_sum(&["input", "select", "textarea", "button"]);
    if form_elements > 50 {
        recommendations.push(Recommendation {
            severity: Severity::Info,
            title: "Complex Forms Detected".to_string(),
            description: format!(
                "The page has {} form elements. Complex forms can slow down rendering.",
                form_elements
            ),
            suggestions: suggestions(&[
                "Consider splitting long forms into multiple steps",
                "Lazy load form sections that are not immediately visible",
                "Remove hidden or unused form fields",
            ]),
        });
    }

    let svg_count = stats.tag_count("svg");
    if svg_count > 20 {
        recommendations.push(Recommendation {
            severity: Severity::Info,
            title: "Many SVG Elements".to_string(),
            description: format!(
                "The page has {} SVG elements. Inline SVGs add to DOM complexity.",
                svg_count
            ),
            suggestions: suggestions(&[
                "Consider using an SVG sprite sheet",
                "Use icon fonts for simple icons",
                "Reference external SVG files where possible",
            ]),
        });
    }

    let table_count = stats.tag_count("table");
    if table_count > 5 {
        recommendations.push(Recommendation {
            severity: Severity::Info,
            title: "Multiple Tables Detected".to_string(),
            description: format!(
                "The page has {} table elements. Ensure tables are used for tabular data only.",
                table_count
            ),
            suggestions: suggestions(&[
                "Use CSS Grid or Flexbox for layouts instead of tables",
                "Consider responsive table alternatives for mobile",
            ]),
        });
    }

    let iframe_count = stats.tag_count("iframe");
    if iframe_count > 0 {
        recommendations.push(Recommendation {
            severity: Severity::Info,
            title: "Iframe Elements Detected".to_string(),
            description: format!(
                "The page has {} iframe(s). Iframes can significantly impact performance.",
                iframe_count
            ),
            suggestions: suggestions(&[
                "Lazy load iframes that are below the fold",
                "Consider using facade patterns for video embeds",
                "Remove unnecessary third-party embeds",
            ]),
        });
    }

    let script_count = stats.tag_count("script");
    if script_count > 15 {
        recommendations.push(Recommendation {
            severity: Severity::Warning,
            title: "Many Script Tags".to_string(),
            description: format!(
                "The page has {} script tags. Too many scripts can delay page interactivity.",
                script_count
            ),
            suggestions: suggestions(&[
                "Combine and minify JavaScript files",
                "Defer non-critical scripts",
                "Review and remove unused JavaScript",
                "Consider using a JavaScript bundler",
            ]),
        });
    }

    // Rule 5: elements in the deepest bucket.
    let deep_count = stats.node_distribution.get("31+").copied().unwrap_or(0);
    if deep_count > 10 {
        recommendations.push(Recommendation {
            severity: Severity::Warning,
            title: "Deeply Nested Elements".to_string(),
            description: format!(
                "{} elements are nested more than 31 levels deep. This severely impacts \
                 rendering performance.",
                deep_count
            ),
            suggestions: suggestions(&[
                "Review page builder or theme structure for excessive nesting",
                "Flatten nested sections using CSS Grid",
                "Consider custom CSS solutions instead of nested containers",
            ]),
        });
    }

    // Rule 6: everything healthy.
    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            severity: Severity::Success,
            title: "Good DOM Structure".to_string(),
            description: "The page has a healthy DOM structure that should perform well."
                .to_string(),
            suggestions: suggestions(&[
                "Continue monitoring as content grows",
                "Consider scanning again after significant layout changes",
            ]),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::stats::LargeNode;
    use indexmap::IndexMap;

    fn empty_stats() -> StructuralStats {
        StructuralStats {
            total_nodes: 0,
            max_depth: 0,
            element_counts: IndexMap::new(),
            node_distribution: IndexMap::new(),
            large_nodes: Vec::new(),
        }
    }

    fn stats_with(total: u64, depth: u32, counts: &[(&str, u64)]) -> StructuralStats {
        let mut stats = empty_stats();
        stats.total_nodes = total;
        stats.max_depth = depth;
        for (tag, count) in counts {
            stats.element_counts.insert(tag.to_string(), *count);
        }
        stats
    }

    #[test]
    fn test_healthy_stats_emit_single_success() {
        let recs = recommend(&stats_with(100, 8, &[]), &ScoreThresholds::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Success);
    }

    #[test]
    fn test_node_count_over_warning_fires_critical_only() {
        let recs = recommend(&stats_with(1600, 8, &[]), &ScoreThresholds::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Critical);
        assert_eq!(recs[0].title, "Excessive DOM Size");
        assert!(recs[0].description.contains("1600"));
        assert!(recs[0].description.contains("1500"));
        assert_eq!(recs[0].suggestions.len(), 4);
    }

    #[test]
    fn test_node_count_between_good_and_warning_fires_warning() {
        let recs = recommend(&stats_with(1200, 8, &[]), &ScoreThresholds::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Warning);
        assert_eq!(recs[0].title, "High DOM Node Count");
    }

    #[test]
    fn test_depth_rule_fires_independently_of_node_rule() {
        let recs = recommend(&stats_with(1600, 40, &[]), &ScoreThresholds::default());
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Excessive DOM Size");
        assert_eq!(recs[1].title, "Excessive DOM Depth");
        assert_eq!(recs[1].severity, Severity::Critical);
    }

    #[test]
    fn test_large_nodes_cite_count_and_largest() {
        let mut stats = stats_with(100, 5, &[]);
        stats.large_nodes = vec![
            LargeNode {
                tag: "ul".to_string(),
                id: String::new(),
                class: String::new(),
                children_count: 80,
                depth: 4,
            },
            LargeNode {
                tag: "div".to_string(),
                id: String::new(),
                class: String::new(),
                children_count: 60,
                depth: 3,
            },
        ];

        let recs = recommend(&stats, &ScoreThresholds::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Elements with Many Children");
        assert!(recs[0].description.contains("2 elements"));
        assert!(recs[0].description.contains("80"));
    }

    #[test]
    fn test_script_volume_is_a_warning_unlike_other_tag_checks() {
        let recs = recommend(
            &stats_with(100, 5, &[("script", 16), ("div", 101)]),
            &ScoreThresholds::default(),
        );
        let script = recs.iter().find(|r| r.title == "Many Script Tags").unwrap();
        assert_eq!(script.severity, Severity::Warning);
        let div = recs.iter().find(|r| r.title == "High Div Count").unwrap();
        assert_eq!(div.severity, Severity::Info);
    }

    #[test]
    fn test_single_iframe_is_reported() {
        let recs = recommend(
            &stats_with(50, 5, &[("iframe", 1)]),
            &ScoreThresholds::default(),
        );
        assert!(recs.iter().any(|r| r.title == "Iframe Elements Detected"));
    }

    #[test]
    fn test_form_elements_are_summed_across_tags() {
        let recs = recommend(
            &stats_with(200, 5, &[("input", 30), ("select", 11), ("button", 10)]),
            &ScoreThresholds::default(),
        );
        let form = recs
            .iter()
            .find(|r| r.title == "Complex Forms Detected")
            .unwrap();
        assert!(form.description.contains("51"));
    }

    #[test]
    fn test_deep_bucket_rule_requires_more_than_ten() {
        let mut stats = stats_with(100, 35, &[]);
        stats
            .node_distribution
            .insert("31+".to_string(), 11);

        let recs = recommend(&stats, &ScoreThresholds::default());
        assert!(recs.iter().any(|r| r.title == "Deeply Nested Elements"));

        stats.node_distribution.insert("31+".to_string(), 10);
        let recs = recommend(&stats, &ScoreThresholds::default());
        assert!(!recs.iter().any(|r| r.title == "Deeply Nested Elements"));
    }

    #[test]
    fn test_boundary_values_do_not_fire() {
        // Exactly at each threshold nothing fires.
        let recs = recommend(
            &stats_with(
                1000,
                20,
                &[
                    ("div", 100),
                    ("span", 50),
                    ("img", 30),
                    ("svg", 20),
                    ("table", 5),
                    ("script", 15),
                ],
            ),
            &ScoreThresholds::default(),
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Success);
    }
}
