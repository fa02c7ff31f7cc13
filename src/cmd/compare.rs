//! Compare command implementation
//!
//! Scans two HTML files (typically before/after a remediation) and reports
//! the node, depth, and score deltas.

use anyhow::{Context, Result};
use console::style;

use crate::analyzer::{compare, report, DomAnalyzer};
use crate::config::ThresholdOverrides;
use crate::fmt::CHART;

/// Compare two HTML documents
pub fn cmd_compare(
    before: &str,
    after: &str,
    json: bool,
    overrides: ThresholdOverrides,
) -> Result<()> {
    let thresholds = super::resolve_thresholds(overrides)?;
    let analyzer = DomAnalyzer::new(thresholds)?;

    if !json {
        println!("{} {} Scan Comparison", CHART, style("dom-slim").bold());
    }

    let before_html = super::scan::read_document(before)?;
    let after_html = super::scan::read_document(after)?;

    let before_scan = analyzer.analyze(&before_html);
    let after_scan = analyzer.analyze(&after_html);
    let results = compare(&before_scan, &after_scan);

    if json {
        let output = serde_json::to_string_pretty(&results)
            .context("Failed to serialize comparison to JSON")?;
        println!("{}", output);
        return Ok(());
    }

    report::print_comparison_report(&results);
    Ok(())
}
