//! Console report formatting for scan, comparison, and tree output

use crate::analyzer::recommend::Severity;
use crate::analyzer::tree::TreeNode;
use crate::analyzer::{ScanComparison, ScanReport, ScoreStatus};
use crate::fmt::format_number;
use console::style;

fn status_color(status: ScoreStatus) -> console::Color {
    match status {
        ScoreStatus::Good => console::Color::Green,
        ScoreStatus::Warning => console::Color::Yellow,
        ScoreStatus::Critical => console::Color::Red,
    }
}

fn severity_color(severity: Severity) -> console::Color {
    match severity {
        Severity::Critical => console::Color::Red,
        Severity::Warning => console::Color::Yellow,
        Severity::Info => console::Color::Blue,
        Severity::Success => console::Color::Green,
    }
}

/// Print the full scan report to the console
pub fn print_scan_report(label: &str, report: &ScanReport) {
    println!();
    println!("{}", style("DOM Structure Analysis").bold().underlined());
    println!();

    println!("📄 {} {}", style("Document:").bold(), label);
    println!(
        "🏅 {} {} ({})",
        style("Score:").bold(),
        style(report.score)
            .fg(status_color(report.status))
            .bold(),
        report.status.label()
    );
    println!(
        "📊 {} {} nodes, max depth {}",
        style("Structure:").bold(),
        format_number(report.stats.total_nodes),
        report.stats.max_depth
    );
    println!();

    // Element breakdown
    if !report.stats.element_counts.is_empty() {
        let display_count = report.stats.element_counts.len().min(10);
        println!(
            "{}",
            style(format!("TOP ELEMENTS ({} tags):", report.stats.element_counts.len())).bold()
        );
        println!("{}", style("─".repeat(70)).dim());
        for (tag, count) in report.stats.element_counts.iter().take(display_count) {
            println!(
                "  {:>8}  {}",
                style(format_number(*count)).cyan().bold(),
                style(format!("<{}>", tag)).dim()
            );
        }
        if report.stats.element_counts.len() > display_count {
            println!(
                "      {} {} more tags...",
                style("...").dim(),
                report.stats.element_counts.len() - display_count
            );
        }
        println!();
    }

    // Depth distribution
    if !report.stats.node_distribution.is_empty() {
        println!("{}", style("DEPTH DISTRIBUTION:").bold());
        println!("{}", style("─".repeat(70)).dim());
        for (bucket, count) in &report.stats.node_distribution {
            println!(
                "  {:>6}  {}",
                style(bucket).bold(),
                format_number(*count)
            );
        }
        println!();
    }

    // Oversized containers
    if !report.stats.large_nodes.is_empty() {
        println!(
            "{}",
            style(format!(
                "LARGE NODES ({} over 50 children):",
                report.stats.large_nodes.len()
            ))
            .bold()
            .yellow()
        );
        println!("{}", style("─".repeat(70)).dim());
        for node in report.stats.large_nodes.iter().take(5) {
            let identity = if !node.id.is_empty() {
                format!("<{} id=\"{}\">", node.tag, node.id)
            } else if !node.class.is_empty() {
                format!("<{} class=\"{}\">", node.tag, node.class)
            } else {
                format!("<{}>", node.tag)
            };
            println!(
                "  {:>4} children at depth {:>2}  {}",
                style(node.children_count).cyan().bold(),
                node.depth,
                style(identity).dim()
            );
        }
        println!();
    }

    // Recommendations
    println!("{}", style("RECOMMENDATIONS:").bold().yellow());
    println!("{}", style("─".repeat(70)).dim());
    println!();
    for rec in &report.recommendations {
        println!(
            "  {} {}",
            style(format!("[{:?}]", rec.severity).to_uppercase())
                .fg(severity_color(rec.severity))
                .bold(),
            style(&rec.title).bold()
        );
        println!("      {}", rec.description);
        for suggestion in &rec.suggestions {
            println!("      {} {}", style("→").dim(), style(suggestion).dim());
        }
        println!();
    }

    println!(
        "{}",
        style("💡 Tip: Run 'dom-slim plan <file>' for a prioritized remediation plan").dim()
    );
    println!();
}

/// Print a one-line batch summary entry
pub fn print_scan_summary_line(label: &str, report: &ScanReport) {
    println!(
        "  {:>3} ({:^8})  {:>9} nodes  depth {:>3}  {}",
        style(report.score)
            .fg(status_color(report.status))
            .bold(),
        report.status.label(),
        format_number(report.stats.total_nodes),
        report.stats.max_depth,
        style(label).dim()
    );
}

/// Print the before/after comparison report
pub fn print_comparison_report(results: &ScanComparison) {
    println!();
    println!("{}", style("DOM Scan Comparison").bold().underlined());
    println!();

    println!(
        "📊 {} score {}, {} nodes, depth {}",
        style("Before:").bold(),
        results.before_score,
        format_number(results.before_nodes),
        results.before_depth
    );
    println!(
        "📊 {} score {}, {} nodes, depth {}",
        style("After:").bold(),
        results.after_score,
        format_number(results.after_nodes),
        results.after_depth
    );
    println!();

    let improved = results.node_delta < 0 || results.score_delta > 0;
    let delta_color = if improved {
        console::Color::Green
    } else {
        console::Color::Red
    };

    println!(
        "{}  {} {} nodes, {} score points, {} depth levels",
        if improved { "📉" } else { "📈" },
        style("Delta:").bold(),
        style(format_signed(results.node_delta)).fg(delta_color).bold(),
        style(format_signed(i64::from(results.score_delta)))
            .fg(delta_color)
            .bold(),
        format_signed(results.depth_delta)
    );
    println!();
}

fn format_signed(n: i64) -> String {
    if n > 0 {
        format!("+{}", format_number(n as u64))
    } else if n < 0 {
        format!("-{}", format_number(n.unsigned_abs()))
    } else {
        "±0".to_string()
    }
}

/// Print the depth-limited tree view
pub fn print_tree(node: &TreeNode) {
    print_tree_node(node, 0);
    println!();
}

fn print_tree_node(node: &TreeNode, indent: usize) {
    let mut line = format!("{}<{}>", "  ".repeat(indent), node.tag.to_uppercase());
    if !node.id.is_empty() {
        line.push_str(&format!(" #{}", node.id));
    }
    if !node.classes.is_empty() {
        line.push_str(&format!(" .{}", node.classes.split_whitespace().collect::<Vec<_>>().join(".")));
    }

    let annotation = match node.issue {
        Some(issue) => format!(
            " {} ({} children)",
            style(format!("[{:?}]", issue)).red(),
            node.child_count
        ),
        None => format!(" ({} children)", node.child_count),
    };

    println!("{}{}", line, style(annotation).dim());

    for child in &node.children {
        print_tree_node(child, indent + 1);
    }
    if node.children.is_empty() && node.child_count > 0 {
        println!(
            "{}{}",
            "  ".repeat(indent + 1),
            style(format!("... {} children below depth limit", node.child_count)).dim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_signed_marks_direction() {
        assert_eq!(format_signed(5), "+5");
        assert_eq!(format_signed(-1200), "-1,200");
        assert_eq!(format_signed(0), "±0");
    }
}
