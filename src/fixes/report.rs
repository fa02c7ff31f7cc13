//! Console report formatting for the remediation plan

use crate::analyzer::Severity;
use crate::fixes::types::{EnhancedFix, PatternMatch, RecommendationBundle};
use crate::fmt::format_number;
use console::style;

fn severity_color(severity: Severity) -> console::Color {
    match severity {
        Severity::Critical => console::Color::Red,
        Severity::Warning => console::Color::Yellow,
        Severity::Info => console::Color::Blue,
        Severity::Success => console::Color::Green,
    }
}

/// Print the full remediation plan to the console
pub fn print_plan_report(label: &str, plan: &RecommendationBundle) {
    println!();
    println!("{}", style("DOM Remediation Plan").bold().underlined());
    println!();
    println!("📄 {} {}", style("Document:").bold(), label);
    println!();

    if plan.is_empty() {
        println!(
            "{}",
            style("✨ No structural fixes needed. The document is in good shape!").green()
        );
        println!();
        return;
    }

    print_tier("HIGH PRIORITY (≥35% DOM reduction)", &plan.high_priority);
    print_tier("MEDIUM PRIORITY (15-35% DOM reduction)", &plan.medium_priority);
    print_tier("LOW PRIORITY (<15% DOM reduction)", &plan.low_priority);

    print_pattern_matches("THEME-SPECIFIC FINDINGS", &plan.theme_specific);
    print_pattern_matches("PLUGIN-SPECIFIC FINDINGS", &plan.plugin_specific);

    // Impact footer
    let impact = &plan.impact_summary;
    println!("{}", style("─".repeat(70)).dim());
    println!(
        "  {} ~{} nodes across {} fixes, ~{} minutes of work",
        style("Estimated impact:").bold(),
        style(format_number(impact.estimated_node_reduction))
            .green()
            .bold(),
        plan.fix_count(),
        format_number(impact.estimated_time_minutes)
    );
    let perf = &impact.estimated_performance_improvement;
    println!(
        "  {} LCP ~{}%, FID ~{}%, CLS ~{}%",
        style("Projected improvement:").bold(),
        perf.lcp_pct,
        perf.fid_pct,
        perf.cls_pct
    );
    println!();
}

fn print_tier(heading: &str, fixes: &[EnhancedFix]) {
    if fixes.is_empty() {
        return;
    }

    println!("{}", style(heading).bold().yellow());
    println!("{}", style("─".repeat(70)).dim());
    println!();

    for fix in fixes {
        println!(
            "  {} {}",
            style(format!("[{:?}]", fix.severity).to_uppercase())
                .fg(severity_color(fix.severity))
                .bold(),
            style(&fix.title).bold()
        );
        println!("      {}", fix.description);
        if fix.estimated_reduction > 0 {
            println!(
                "      {} ~{} nodes, {}",
                style("→ Estimated reduction:").dim(),
                format_number(fix.estimated_reduction),
                fix.time_to_fix
            );
        } else {
            println!("      {} {}", style("→ Effort:").dim(), fix.time_to_fix);
        }
        for step in &fix.steps {
            println!("      {} {}", style("•").dim(), style(step).dim());
        }
        println!();
    }
}

fn print_pattern_matches(heading: &str, matches: &[PatternMatch]) {
    if matches.is_empty() {
        return;
    }

    println!("{}", style(heading).bold().cyan());
    println!("{}", style("─".repeat(70)).dim());
    println!();

    for hit in matches {
        println!(
            "  {} {}: {}",
            style("◆").cyan(),
            style(&hit.display_name).bold(),
            style(&hit.issue_title).bold()
        );
        println!("      {}", hit.description);
        println!("      {} {}", style("Fix:").dim(), hit.fix_text);
        if let Some(url) = &hit.documentation_url {
            println!("      {} {}", style("Docs:").dim(), style(url).dim());
        }
        println!();
    }
}
