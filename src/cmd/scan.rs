//! Scan command implementation
//!
//! Analyzes one or more HTML documents: census, score, and threshold
//! recommendations. Multiple files are scanned in parallel with a summary
//! table; a single file gets the full sectioned report.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

use crate::analyzer::{report, DomAnalyzer, ScanReport};
use crate::config::ThresholdOverrides;
use crate::error::DomSlimError;
use crate::fmt::MICROSCOPE;

/// One entry of a batch scan, as serialized with `--json`
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    /// Scanned file path
    pub file: String,
    /// Scan result
    pub report: ScanReport,
}

/// Read an HTML document, mapping missing files to a typed error
pub(crate) fn read_document(path: &str) -> Result<String, DomSlimError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DomSlimError::InputNotFound {
            path: Path::new(path).to_path_buf(),
            source: e,
        },
        _ => DomSlimError::Io {
            context: path.to_string(),
            source: e,
        },
    })
}

/// Scan one or more HTML files
pub fn cmd_scan(files: &[String], json: bool, overrides: ThresholdOverrides) -> Result<()> {
    let thresholds = super::resolve_thresholds(overrides)?;
    let analyzer = DomAnalyzer::new(thresholds)?;

    if files.len() == 1 {
        return scan_single(&files[0], json, &analyzer);
    }
    scan_batch(files, json, &analyzer)
}

fn scan_single(file: &str, json: bool, analyzer: &DomAnalyzer) -> Result<()> {
    if !json {
        println!("{} {} Structure Scan", MICROSCOPE, style("dom-slim").bold());
    }

    let html = read_document(file)?;
    let scan = analyzer.analyze(&html);

    if json {
        let output = serde_json::to_string_pretty(&scan)
            .context("Failed to serialize scan report to JSON")?;
        println!("{}", output);
        return Ok(());
    }

    report::print_scan_report(file, &scan);
    Ok(())
}

fn scan_batch(files: &[String], json: bool, analyzer: &DomAnalyzer) -> Result<()> {
    if !json {
        println!(
            "{} {} Structure Scan ({} files)",
            MICROSCOPE,
            style("dom-slim").bold(),
            files.len()
        );
        println!();
    }

    let progress = if json {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/dim} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let results: Vec<(String, Result<ScanReport, DomSlimError>)> = files
        .par_iter()
        .map(|file| {
            let result = read_document(file).map(|html| analyzer.analyze(&html));
            progress.inc(1);
            (file.clone(), result)
        })
        .collect();
    progress.finish_and_clear();

    if json {
        let entries: Vec<BatchEntry> = results
            .iter()
            .filter_map(|(file, result)| {
                result.as_ref().ok().map(|report| BatchEntry {
                    file: file.clone(),
                    report: report.clone(),
                })
            })
            .collect();
        let output = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize batch results to JSON")?;
        println!("{}", output);
    } else {
        for (file, result) in &results {
            match result {
                Ok(scan) => report::print_scan_summary_line(file, scan),
                Err(e) => println!("  {} {}", style("FAILED").red().bold(), style(e).dim()),
            }
        }

        let scanned: Vec<&ScanReport> =
            results.iter().filter_map(|(_, r)| r.as_ref().ok()).collect();
        if !scanned.is_empty() {
            let average: u64 = scanned.iter().map(|r| u64::from(r.score)).sum::<u64>()
                / scanned.len() as u64;
            println!();
            println!(
                "  {} {} files scanned, average score {}",
                style("Summary:").bold(),
                scanned.len(),
                style(average).bold()
            );
        }
        println!();
    }

    let failures = results.iter().filter(|(_, r)| r.is_err()).count();
    if failures > 0 {
        anyhow::bail!("{} of {} files failed to scan", failures, files.len());
    }
    Ok(())
}
