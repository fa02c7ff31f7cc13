//! HTML fixture builders for integration tests
//!
//! Generates synthetic documents with known structural properties and
//! writes them into temp directories for CLI-driven tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// A minimal healthy page
pub fn healthy_page() -> String {
    "<html><head><title>ok</title></head><body><main><p>hello</p></main></body></html>"
        .to_string()
}

/// A page with `total` elements overall (html + head + body + fillers)
///
/// Panics if `total` is below the three scaffolding elements.
pub fn page_with_total_nodes(total: usize) -> String {
    assert!(total >= 3, "html/head/body already contribute 3 elements");
    format!(
        "<html><head></head><body>{}</body></html>",
        "<div></div>".repeat(total - 3)
    )
}

/// A single-child chain reaching exactly `depth` levels (html = 1)
///
/// Panics if `depth` is below 2 (html > body is the minimum chain).
pub fn page_with_depth(depth: usize) -> String {
    assert!(depth >= 2, "html > body is the minimum chain");
    let divs = depth - 2;
    format!(
        "<html><head></head><body>{}{}</body></html>",
        "<div>".repeat(divs),
        "</div>".repeat(divs)
    )
}

/// A page with `count` wide containers holding `children` spans each
pub fn page_with_wide_containers(count: usize, children: usize) -> String {
    let mut body = String::new();
    for i in 0..count {
        body.push_str(&format!(
            "<div id=\"wide-{}\">{}</div>",
            i,
            "<span></span>".repeat(children)
        ));
    }
    format!("<html><head></head><body>{}</body></html>", body)
}

/// An Elementor-styled page with enough sections to trip the fix engine
pub fn elementor_page(sections: usize) -> String {
    let section =
        "<div class=\"elementor-section elementor-top-section\"><span>x</span></div>";
    format!(
        "<html><head></head><body class=\"theme-default\">{}</body></html>",
        section.repeat(sections)
    )
}

/// Write a fixture file into a fresh temp dir, returning (dir, path)
pub fn write_fixture(name: &str, html: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join(name);
    fs::write(&path, html)?;
    Ok((dir, path))
}
