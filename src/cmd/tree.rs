//! Tree command implementation
//!
//! Renders a depth-limited view of the document tree below `<body>`,
//! flagging single-child wrappers, deep nesting, and oversized containers.

use anyhow::{Context, Result};
use console::style;

use crate::analyzer::{report, tree};
use crate::fmt::MICROSCOPE;

/// Print the depth-limited DOM tree of an HTML file
pub fn cmd_tree(file: &str, depth: u32, json: bool) -> Result<()> {
    let html = super::scan::read_document(file)?;
    let doc = crate::parser::parse_document(&html);

    let Some(root) = tree::dom_tree(&doc, depth.max(1)) else {
        anyhow::bail!("document has no <body> element");
    };

    if json {
        let output =
            serde_json::to_string_pretty(&root).context("Failed to serialize tree to JSON")?;
        println!("{}", output);
        return Ok(());
    }

    println!("{} {} DOM Tree", MICROSCOPE, style("dom-slim").bold());
    println!(
        "   {} {} (depth limit {})",
        style("Document:").dim(),
        file,
        depth.max(1)
    );
    println!();
    report::print_tree(&root);
    Ok(())
}
