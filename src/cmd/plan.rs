//! Plan command implementation
//!
//! Generates the prioritized remediation plan for a document: tiered fixes
//! with estimated reductions, theme/plugin signature findings, and the
//! aggregated impact summary.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::analyzer::{DomAnalyzer, ScanReport};
use crate::config::ThresholdOverrides;
use crate::fixes::{report, FixEngine, RecommendationBundle};
use crate::fmt::WRENCH;

/// Combined plan output, as serialized with `--json`
#[derive(Debug, Serialize)]
pub struct PlanOutput {
    /// Scanned file path
    pub file: String,
    /// Scan the plan was derived from
    pub scan: ScanReport,
    /// The remediation plan
    pub plan: RecommendationBundle,
}

/// Generate the remediation plan for a single HTML file
pub fn cmd_plan(file: &str, json: bool, overrides: ThresholdOverrides) -> Result<()> {
    let thresholds = super::resolve_thresholds(overrides)?;
    let analyzer = DomAnalyzer::new(thresholds)?;

    if !json {
        println!("{} {} Remediation Plan", WRENCH, style("dom-slim").bold());
    }

    let html = super::scan::read_document(file)?;
    let scan = analyzer.analyze(&html);
    let plan = FixEngine::new().generate(&html, &scan.stats);

    if json {
        let output = PlanOutput {
            file: file.to_string(),
            scan,
            plan,
        };
        let serialized =
            serde_json::to_string_pretty(&output).context("Failed to serialize plan to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!(
        "   {} score {} with {} nodes at depth {}",
        style("Baseline:").dim(),
        scan.score,
        scan.stats.total_nodes,
        scan.stats.max_depth
    );
    report::print_plan_report(file, &plan);
    Ok(())
}
