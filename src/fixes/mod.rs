//! Remediation plan engine
//!
//! Turns a census plus the raw markup into a prioritized plan:
//! theme/plugin signature detection, three tiers of estimated-impact fixes,
//! and the aggregated impact summary. The engine never errors: empty markup
//! degrades to census-based counts and an all-empty plan is a valid result.
//!
//! # Examples
//!
//! ```
//! use dom_slim::analyzer::DomAnalyzer;
//! use dom_slim::fixes::FixEngine;
//!
//! let html = "<html><body><p>small page</p></body></html>";
//! let report = DomAnalyzer::default().analyze(html);
//! let plan = FixEngine::new().generate(html, &report.stats);
//!
//! assert!(plan.is_empty());
//! assert_eq!(plan.impact_summary.estimated_node_reduction, 0);
//! ```

pub mod examples;
pub mod impact;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod tiers;
pub mod types;

pub use scan::{DetectedTheme, MarkupScan};
pub use types::{
    CodeExample, EnhancedFix, ImpactSummary, PatternMatch, PerformanceImprovement,
    RecommendationBundle,
};

use crate::analyzer::stats::StructuralStats;
use crate::fixes::patterns::PluginSignature;
use crate::fmt::title_from_key;

/// Remediation plan generator
#[derive(Debug, Clone, Copy, Default)]
pub struct FixEngine;

impl FixEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Generate the full plan for a document
    ///
    /// `html` is the raw markup the census was computed from; pass an empty
    /// string when only stored statistics are available and the engine will
    /// fall back to census counts (signature detection then finds nothing).
    pub fn generate(&self, html: &str, stats: &StructuralStats) -> RecommendationBundle {
        let scan = MarkupScan::new(html);

        let theme = scan.detect_theme();
        let plugins = scan.detect_plugins();
        log::debug!(
            "signature detection: theme={:?}, {} plugins",
            theme.as_ref().map(|t| t.key.as_str()),
            plugins.len()
        );

        let high_priority = tiers::high_priority_fixes(stats, &scan, theme.as_ref());
        let medium_priority = tiers::medium_priority_fixes(stats, &scan);
        let low_priority = tiers::low_priority_fixes(stats, &scan);

        let theme_specific = theme
            .as_ref()
            .map(|t| theme_matches(t, &scan))
            .unwrap_or_default();
        let plugin_specific = plugin_matches(&plugins, &scan);

        let impact_summary = impact::impact_summary(&high_priority, &medium_priority, &low_priority);

        RecommendationBundle {
            high_priority,
            medium_priority,
            low_priority,
            theme_specific,
            plugin_specific,
            impact_summary,
        }
    }
}

/// Probe the detected theme's known issues against the markup
fn theme_matches(theme: &DetectedTheme, scan: &MarkupScan<'_>) -> Vec<PatternMatch> {
    theme
        .issues
        .iter()
        .filter(|issue| scan.contains(issue.pattern))
        .map(|issue| PatternMatch {
            key: format!("{}_{}", theme.key, issue.key),
            display_name: theme.name.clone(),
            issue_title: title_from_key(issue.key),
            description: issue.description.to_string(),
            fix_text: issue.fix.to_string(),
            documentation_url: theme.docs_url.map(|url| url.to_string()),
        })
        .collect()
}

/// Probe each detected plugin's known issues against the markup
fn plugin_matches(
    plugins: &[&'static PluginSignature],
    scan: &MarkupScan<'_>,
) -> Vec<PatternMatch> {
    plugins
        .iter()
        .flat_map(|plugin| {
            plugin
                .issues
                .iter()
                .filter(|issue| scan.contains(issue.pattern))
                .map(|issue| PatternMatch {
                    key: format!("{}_{}", plugin.key, issue.key),
                    display_name: plugin.name.to_string(),
                    issue_title: title_from_key(issue.key),
                    description: issue.description.to_string(),
                    fix_text: issue.fix.to_string(),
                    documentation_url: None,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn stats_with(total: u64, depth: u32, counts: &[(&str, u64)]) -> StructuralStats {
        let mut element_counts = IndexMap::new();
        for (tag, count) in counts {
            element_counts.insert(tag.to_string(), *count);
        }
        StructuralStats {
            total_nodes: total,
            max_depth: depth,
            element_counts,
            node_distribution: IndexMap::new(),
            large_nodes: Vec::new(),
        }
    }

    #[test]
    fn test_empty_markup_yields_fully_populated_empty_bundle() {
        let plan = FixEngine::new().generate("", &stats_with(10, 3, &[]));
        assert!(plan.is_empty());
        assert!(plan.theme_specific.is_empty());
        assert!(plan.plugin_specific.is_empty());
        assert_eq!(plan.impact_summary.estimated_node_reduction, 0);
    }

    #[test]
    fn test_elementor_section_markup_produces_theme_match() {
        let html = r#"<div class="elementor-section elementor-top-section"><p>x</p></div>"#;
        let plan = FixEngine::new().generate(html, &stats_with(10, 3, &[]));

        assert_eq!(plan.theme_specific.len(), 1);
        let hit = &plan.theme_specific[0];
        assert_eq!(hit.key, "elementor_section_wrappers");
        assert_eq!(hit.display_name, "Elementor");
        assert_eq!(hit.issue_title, "Section Wrappers");
        assert!(hit.documentation_url.is_some());
    }

    #[test]
    fn test_detected_theme_without_issue_patterns_matches_nothing() {
        // Detector present, but no issue pattern in the markup.
        let html = r#"<span class="elementor-icon"></span>"#;
        let plan = FixEngine::new().generate(html, &stats_with(10, 3, &[]));
        assert!(plan.theme_specific.is_empty());
    }

    #[test]
    fn test_plugin_matches_collect_across_plugins() {
        let html = r#"
            <div class="woocommerce"><ul class="products"><li></li></ul></div>
            <div class="wpcf7"><div class="wpcf7-form"></div></div>
        "#;
        let plan = FixEngine::new().generate(html, &stats_with(10, 3, &[]));

        let keys: Vec<_> = plan.plugin_specific.iter().map(|m| m.key.as_str()).collect();
        assert!(keys.contains(&"woocommerce_product_loops"));
        assert!(keys.contains(&"contact-form-7_form_structure"));
        assert!(plan
            .plugin_specific
            .iter()
            .all(|m| m.documentation_url.is_none()));
    }

    #[test]
    fn test_signature_matches_do_not_count_toward_impact() {
        let html = r#"<div class="elementor-section"></div>"#;
        let plan = FixEngine::new().generate(html, &stats_with(10, 3, &[]));
        assert_eq!(plan.theme_specific.len(), 1);
        assert_eq!(plan.impact_summary.estimated_node_reduction, 0);
        assert_eq!(plan.impact_summary.estimated_time_minutes, 0);
    }

    #[test]
    fn test_bloated_document_fills_multiple_tiers() {
        let html = format!(
            "<html><body>{}{}{}{}</body></html>",
            "<div><span></span></div>".repeat(150),
            "<ul>".to_string() + &"<li></li>".repeat(60) + "</ul>",
            "<iframe></iframe>".repeat(3),
            "<p></p>".repeat(10)
        );
        let stats = stats_with(400, 5, &[]);
        let plan = FixEngine::new().generate(&html, &stats);

        assert!(plan
            .high_priority
            .iter()
            .any(|f| f.id == "excessive_divs"));
        assert!(plan
            .medium_priority
            .iter()
            .any(|f| f.id == "excessive_spans"));
        assert!(plan
            .low_priority
            .iter()
            .any(|f| f.id == "list_optimization"));
        assert!(plan.impact_summary.estimated_node_reduction > 0);
        assert!(plan.impact_summary.estimated_time_minutes > 0);
    }
}
