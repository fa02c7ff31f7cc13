//! Priority-tier fix generators
//!
//! Each tier inspects the census and the raw-markup scan independently.
//! Markup counts fall back to the census when the raw text is empty or the
//! scan finds nothing, so the engine still produces a plan from stored
//! statistics alone.

use crate::analyzer::stats::StructuralStats;
use crate::analyzer::Severity;
use crate::fixes::examples;
use crate::fixes::scan::{DetectedTheme, MarkupScan};
use crate::fixes::types::EnhancedFix;

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Markup count with census fallback when the scan comes up empty
fn counted(scan: &MarkupScan<'_>, stats: &StructuralStats, tag: &str) -> u64 {
    let from_markup = scan.open_tags(tag);
    if from_markup > 0 {
        from_markup
    } else {
        stats.tag_count(tag)
    }
}

fn round(value: f64) -> u64 {
    value.round() as u64
}

/// High-priority fixes: targeting at least a 35% DOM reduction
pub(crate) fn high_priority_fixes(
    stats: &StructuralStats,
    scan: &MarkupScan<'_>,
    theme: Option<&DetectedTheme>,
) -> Vec<EnhancedFix> {
    let mut fixes = Vec::new();

    let total_nodes = stats.total_nodes.max(1);
    let div_count = counted(scan, stats, "div");
    let div_share = div_count as f64 / total_nodes as f64;
    if div_count > 0 && div_share > 0.35 {
        fixes.push(EnhancedFix {
            id: "excessive_divs".to_string(),
            severity: Severity::Critical,
            title: "Excessive Div Elements".to_string(),
            description: format!(
                "Found {} div elements ({:.1}% of all elements). This significantly impacts \
                 rendering performance.",
                div_count,
                div_share * 100.0
            ),
            estimated_reduction: round(div_count as f64 * 0.3),
            time_to_fix: "30-45 minutes".to_string(),
            code_example: Some(examples::div_reduction_example()),
            steps: steps(&[
                "Identify wrapper divs that can be removed",
                "Replace nested divs with semantic HTML elements",
                "Use CSS Grid/Flexbox instead of wrapper divs for layout",
                "Remove framework grid wrapper divs where possible",
            ]),
        });
    }

    if stats.max_depth > 15 {
        fixes.push(EnhancedFix {
            id: "deep_nesting".to_string(),
            severity: Severity::Critical,
            title: "Excessive DOM Depth".to_string(),
            description: format!(
                "DOM tree is {} levels deep (recommended: 15 or fewer). Deep nesting severely \
                 impacts browser rendering.",
                stats.max_depth
            ),
            estimated_reduction: round((stats.max_depth as f64 - 15.0) * 10.0),
            time_to_fix: "45-60 minutes".to_string(),
            code_example: Some(examples::flattening_example()),
            steps: steps(&[
                "Identify the deepest nested elements using browser DevTools",
                "Flatten the DOM structure by removing unnecessary containers",
                "Consider component restructuring for deeply nested areas",
                "Use CSS positioning instead of nested wrapper elements",
            ]),
        });
    }

    if let Some(theme) = theme {
        let builder_nodes = scan.class_occurrences(&theme.detector);
        if builder_nodes > 200 {
            fixes.push(EnhancedFix {
                id: "builder_bloat".to_string(),
                severity: Severity::Critical,
                title: format!("{} DOM Bloat", theme.name),
                description: format!(
                    "{} is adding approximately {} wrapper elements to the page.",
                    theme.name, builder_nodes
                ),
                estimated_reduction: round(builder_nodes as f64 * 0.4),
                time_to_fix: "20-30 minutes".to_string(),
                code_example: examples::builder_example(&theme.key),
                steps: examples::builder_steps(&theme.key),
            });
        }
    }

    fixes
}

/// Medium-priority fixes: targeting a 15-35% DOM reduction
pub(crate) fn medium_priority_fixes(
    stats: &StructuralStats,
    scan: &MarkupScan<'_>,
) -> Vec<EnhancedFix> {
    let mut fixes = Vec::new();

    let span_count = counted(scan, stats, "span");
    if span_count > 100 {
        fixes.push(EnhancedFix {
            id: "excessive_spans".to_string(),
            severity: Severity::Warning,
            title: "Excessive Span Elements".to_string(),
            description: format!(
                "Found {} span elements. Many can be replaced with CSS styling.",
                span_count
            ),
            estimated_reduction: round(span_count as f64 * 0.5),
            time_to_fix: "20-30 minutes".to_string(),
            code_example: Some(examples::span_reduction_example()),
            steps: steps(&[
                "Replace decorative spans with CSS pseudo-elements",
                "Remove spans used only for styling - apply styles to parent",
                "Combine adjacent inline elements where possible",
            ]),
        });
    }

    let svg_count = counted(scan, stats, "svg");
    if svg_count > 10 {
        // Inline SVGs carry their own subtree; estimate it from path/group
        // tags, or assume 5 nodes per SVG when only the census is available.
        let svg_nodes = if scan.is_empty() {
            svg_count * 5
        } else {
            scan.open_tags("svg") + scan.open_tags("path") + scan.open_tags("g")
        };
        fixes.push(EnhancedFix {
            id: "svg_optimization".to_string(),
            severity: Severity::Warning,
            title: "Unoptimized SVG Usage".to_string(),
            description: format!(
                "Found {} inline SVGs adding approximately {} DOM nodes.",
                svg_count, svg_nodes
            ),
            estimated_reduction: round(svg_nodes as f64 * 0.6),
            time_to_fix: "15-20 minutes".to_string(),
            code_example: Some(examples::svg_optimization_example()),
            steps: steps(&[
                "Use SVG sprite sheets instead of inline SVGs",
                "Optimize SVGs with SVGO to remove unnecessary elements",
                "Consider using icon fonts for simple icons",
                "Use <img> tags for decorative SVGs",
            ]),
        });
    }

    let form_count = counted(scan, stats, "form");
    if form_count > 0 {
        let form_nodes = if scan.is_empty() {
            form_count * 20
        } else {
            // Inputs and labels plus an assumed 10 wrapper divs per form.
            scan.open_tags("input") + scan.open_tags("label") + form_count * 10
        };
        if form_nodes > 50 {
            fixes.push(EnhancedFix {
                id: "form_optimization".to_string(),
                severity: Severity::Warning,
                title: "Form Structure Optimization".to_string(),
                description: format!(
                    "Found {} form(s) with approximately {} DOM nodes. Forms often have \
                     excessive wrapper elements.",
                    form_count, form_nodes
                ),
                estimated_reduction: round(form_nodes as f64 * 0.3),
                time_to_fix: "15-20 minutes".to_string(),
                code_example: Some(examples::form_optimization_example()),
                steps: steps(&[
                    "Remove unnecessary wrapper divs around form fields",
                    "Use CSS Grid for form layout instead of wrapper elements",
                    "Consider lighter form components or native HTML forms",
                ]),
            });
        }
    }

    fixes
}

/// Low-priority fixes: targeting less than a 15% DOM reduction
pub(crate) fn low_priority_fixes(
    stats: &StructuralStats,
    scan: &MarkupScan<'_>,
) -> Vec<EnhancedFix> {
    let mut fixes = Vec::new();

    let li_count = counted(scan, stats, "li");
    if li_count > 50 {
        fixes.push(EnhancedFix {
            id: "list_optimization".to_string(),
            severity: Severity::Info,
            title: "List Element Optimization".to_string(),
            description: format!(
                "Found {} list items. Consider pagination or lazy loading for long lists.",
                li_count
            ),
            estimated_reduction: round(li_count as f64 * 0.3),
            time_to_fix: "10-15 minutes".to_string(),
            code_example: None,
            steps: steps(&[
                "Implement pagination for long lists",
                "Use virtual scrolling for very long lists",
                "Lazy load list items as user scrolls",
            ]),
        });
    }

    let table_count = counted(scan, stats, "table");
    if table_count > 0 {
        let table_cells = counted(scan, stats, "td") + counted(scan, stats, "th");
        if table_cells > 100 {
            fixes.push(EnhancedFix {
                id: "table_optimization".to_string(),
                severity: Severity::Info,
                title: "Table Structure Optimization".to_string(),
                description: format!(
                    "Found {} table cells. Large tables significantly increase DOM size.",
                    table_cells
                ),
                estimated_reduction: round(table_cells as f64 * 0.2),
                time_to_fix: "15-20 minutes".to_string(),
                code_example: None,
                steps: steps(&[
                    "Implement table pagination",
                    "Use virtual scrolling for large data tables",
                    "Consider using CSS Grid instead of tables for layouts",
                ]),
            });
        }
    }

    let iframe_count = counted(scan, stats, "iframe");
    if iframe_count > 2 {
        fixes.push(EnhancedFix {
            id: "iframe_optimization".to_string(),
            severity: Severity::Info,
            title: "Iframe Usage".to_string(),
            description: format!(
                "Found {} iframes. Each iframe loads additional DOM content.",
                iframe_count
            ),
            estimated_reduction: 0,
            time_to_fix: "10-15 minutes".to_string(),
            code_example: None,
            steps: steps(&[
                "Lazy load iframes using loading=\"lazy\" attribute",
                "Use facade patterns for embeds (video players, maps)",
                "Load iframes only on user interaction",
            ]),
        });
    }

    fixes
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
    fn test_div_share_fix_fires_above_thirty_five_percent() {
        let html = "<div></div>".repeat(40) + "<p></p>";
        let scan = MarkupScan::new(&html);
        let stats = stats_with(100, 5, &[("div", 40)]);

        let fixes = high_priority_fixes(&stats, &scan, None);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].id, "excessive_divs");
        assert_eq!(fixes[0].estimated_reduction, 12); // round(40 * 0.3)
        assert!(fixes[0].code_example.is_some());
    }

    #[test]
    fn test_div_share_fix_stays_quiet_at_thirty_five_percent() {
        let html = "<div></div>".repeat(35);
        let scan = MarkupScan::new(&html);
        let stats = stats_with(100, 5, &[("div", 35)]);
        assert!(high_priority_fixes(&stats, &scan, None).is_empty());
    }

    #[test]
    fn test_div_count_falls_back_to_census_for_empty_markup() {
        let scan = MarkupScan::new("");
        let stats = stats_with(100, 5, &[("div", 50)]);

        let fixes = high_priority_fixes(&stats, &scan, None);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].estimated_reduction, 15);
    }

    #[test]
    fn test_deep_nesting_reduction_scales_with_excess_depth() {
        let scan = MarkupScan::new("");
        let stats = stats_with(10, 22, &[]);

        let fixes = high_priority_fixes(&stats, &scan, None);
        let nesting = fixes.iter().find(|f| f.id == "deep_nesting").unwrap();
        assert_eq!(nesting.estimated_reduction, 70); // (22 - 15) * 10
        assert_eq!(nesting.time_to_fix, "45-60 minutes");
    }

    #[test]
    fn test_builder_bloat_requires_over_two_hundred_occurrences() {
        let many = "<div class=\"elementor-widget\"></div>".repeat(201);
        let scan = MarkupScan::new(&many);
        let theme = scan.detect_theme().unwrap();
        let stats = stats_with(10, 5, &[]);

        let fixes = high_priority_fixes(&stats, &scan, Some(&theme));
        let bloat = fixes.iter().find(|f| f.id == "builder_bloat").unwrap();
        assert_eq!(bloat.title, "Elementor DOM Bloat");
        assert_eq!(bloat.estimated_reduction, 80); // round(201 * 0.4)
        assert_eq!(bloat.steps.len(), 5);
    }

    #[test]
    fn test_span_fix_uses_half_count_reduction() {
        let html = "<span></span>".repeat(101);
        let scan = MarkupScan::new(&html);
        let stats = stats_with(300, 5, &[]);

        let fixes = medium_priority_fixes(&stats, &scan);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].id, "excessive_spans");
        assert_eq!(fixes[0].estimated_reduction, 51); // round(101 * 0.5)
    }

    #[test]
    fn test_svg_fix_estimates_subtree_from_paths_and_groups() {
        let html = format!(
            "{}{}{}",
            "<svg>".repeat(11),
            "<path d=\"\"/>".repeat(20),
            "<g>".repeat(5)
        );
        let scan = MarkupScan::new(&html);
        let stats = stats_with(300, 5, &[]);

        let fixes = medium_priority_fixes(&stats, &scan);
        let svg = fixes.iter().find(|f| f.id == "svg_optimization").unwrap();
        // 11 + 20 + 5 = 36 estimated nodes -> round(36 * 0.6) = 22
        assert!(svg.description.contains("36"));
        assert_eq!(svg.estimated_reduction, 22);
    }

    #[test]
    fn test_svg_fix_assumes_five_nodes_per_svg_without_markup() {
        let scan = MarkupScan::new("");
        let stats = stats_with(300, 5, &[("svg", 12)]);

        let fixes = medium_priority_fixes(&stats, &scan);
        let svg = fixes.iter().find(|f| f.id == "svg_optimization").unwrap();
        assert_eq!(svg.estimated_reduction, 36); // round(60 * 0.6)
    }

    #[test]
    fn test_form_fix_needs_enough_estimated_nodes() {
        // 1 form, 20 inputs, 21 labels -> 20 + 21 + 10 = 51 nodes.
        let html = format!(
            "<form>{}{}</form>",
            "<input>".repeat(20),
            "<label></label>".repeat(21)
        );
        let scan = MarkupScan::new(&html);
        let stats = stats_with(300, 5, &[]);

        let fixes = medium_priority_fixes(&stats, &scan);
        let form = fixes.iter().find(|f| f.id == "form_optimization").unwrap();
        assert!(form.description.contains("51"));
        assert_eq!(form.estimated_reduction, 15); // round(51 * 0.3)

        // One input fewer -> exactly 50 nodes -> no fix.
        let html = format!(
            "<form>{}{}</form>",
            "<input>".repeat(19),
            "<label></label>".repeat(21)
        );
        let scan = MarkupScan::new(&html);
        assert!(medium_priority_fixes(&stats_with(300, 5, &[]), &scan).is_empty());
    }

    #[test]
    fn test_list_and_table_fixes_fire_on_volume() {
        let html = format!(
            "<ul>{}</ul><table>{}</table>",
            "<li></li>".repeat(60),
            "<tr><td></td><th></th></tr>".repeat(51)
        );
        let scan = MarkupScan::new(&html);
        let stats = stats_with(600, 5, &[]);

        let fixes = low_priority_fixes(&stats, &scan);
        let list = fixes.iter().find(|f| f.id == "list_optimization").unwrap();
        assert_eq!(list.estimated_reduction, 18); // round(60 * 0.3)
        let table = fixes.iter().find(|f| f.id == "table_optimization").unwrap();
        assert_eq!(table.estimated_reduction, 20); // round(102 * 0.2)
    }

    #[test]
    fn test_iframe_fix_is_informational_with_zero_reduction() {
        let html = "<iframe></iframe>".repeat(3);
        let scan = MarkupScan::new(&html);
        let stats = stats_with(50, 5, &[]);

        let fixes = low_priority_fixes(&stats, &scan);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].id, "iframe_optimization");
        assert_eq!(fixes[0].estimated_reduction, 0);

        let scan = MarkupScan::new("<iframe></iframe><iframe></iframe>");
        assert!(low_priority_fixes(&stats_with(50, 5, &[]), &scan).is_empty());
    }
}
