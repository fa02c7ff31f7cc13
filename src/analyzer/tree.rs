//! Depth-limited DOM tree explorer
//!
//! Builds a display-oriented view of the tree below `<body>`, flagging
//! nodes that match common structural smells. Recursion here is bounded by
//! the caller-supplied depth limit, not by document depth.

use crate::parser;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

/// Default depth limit for the explorer
pub const DEFAULT_TREE_DEPTH: u32 = 5;

/// Heuristic structural smell attached to a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeIssue {
    /// A `div` wrapping exactly one element child
    SingleChildWrapper,
    /// Node sits more than 10 levels below `<body>`
    DeepNesting,
    /// More than 50 direct element children
    TooManyChildren,
}

/// One node of the depth-limited tree view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Lowercased tag name
    pub tag: String,
    /// `id` attribute, empty when absent
    pub id: String,
    /// `class` attribute, empty when absent
    pub classes: String,
    /// Number of direct element children (also counts children beyond the
    /// depth limit)
    pub child_count: u32,
    /// Levels below `<body>` (body itself = 0)
    pub depth: u32,
    /// Structural smell, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<NodeIssue>,
    /// Children within the depth limit
    pub children: Vec<TreeNode>,
}

/// Build the explorer view for a document
///
/// Returns `None` when the document has no `<body>` (only possible for
/// trees not produced by [`parser::parse_document`]).
pub fn dom_tree(doc: &Html, max_depth: u32) -> Option<TreeNode> {
    parser::body_element(doc).map(|body| build_node(body, 0, max_depth))
}

fn build_node(element: ElementRef<'_>, depth: u32, max_depth: u32) -> TreeNode {
    let child_elements: Vec<ElementRef<'_>> = element
        .children()
        .filter_map(ElementRef::wrap)
        .collect();
    let child_count = child_elements.len() as u32;

    let children = if depth + 1 < max_depth {
        child_elements
            .iter()
            .map(|child| build_node(*child, depth + 1, max_depth))
            .collect()
    } else {
        Vec::new()
    };

    let tag = element.value().name().to_ascii_lowercase();
    let issue = classify(&tag, child_count, depth);

    TreeNode {
        tag,
        id: element.value().attr("id").unwrap_or_default().to_string(),
        classes: element
            .value()
            .attr("class")
            .unwrap_or_default()
            .to_string(),
        child_count,
        depth,
        issue,
        children,
    }
}

fn classify(tag: &str, child_count: u32, depth: u32) -> Option<NodeIssue> {
    if tag == "div" && child_count == 1 {
        Some(NodeIssue::SingleChildWrapper)
    } else if depth > 10 {
        Some(NodeIssue::DeepNesting)
    } else if child_count > 50 {
        Some(NodeIssue::TooManyChildren)
    } else {
        None
    }
}
