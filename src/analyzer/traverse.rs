//! Single-pass structural traversal
//!
//! Iterative pre-order depth-first walk over the parsed element tree. An
//! explicit work stack keeps traversal depth off the call stack, so
//! pathologically nested documents cannot exhaust it. Non-element nodes
//! (text, comments) are visited but contribute nothing, and nothing below
//! them is descended into.

use crate::analyzer::stats::{
    DepthBucket, LargeNode, StructuralStats, LARGE_NODE_CAP, LARGE_NODE_CHILD_LIMIT,
};
use indexmap::IndexMap;
use scraper::ElementRef;

/// Compute [`StructuralStats`] for the tree rooted at `root`
///
/// Pure function of the input tree: no side effects, deterministic output,
/// safe to call concurrently on independent documents.
///
/// # Examples
///
/// ```
/// use dom_slim::{parser, analyzer::traverse};
///
/// let doc = parser::parse_document("<html><body><div></div></body></html>");
/// let root = parser::root_element(&doc).expect("document root");
/// let stats = traverse::traverse(root);
///
/// assert_eq!(stats.tag_count("div"), 1);
/// assert_eq!(stats.element_counts.values().sum::<u64>(), stats.total_nodes);
/// ```
pub fn traverse(root: ElementRef<'_>) -> StructuralStats {
    let mut total_nodes: u64 = 0;
    let mut max_depth: u32 = 0;
    let mut element_counts: IndexMap<String, u64> = IndexMap::new();
    let mut buckets = [0u64; 7];
    let mut large_nodes: Vec<LargeNode> = Vec::new();

    // (node, depth) work stack; children pushed in reverse to preserve
    // pre-order visitation.
    let mut stack = vec![(*root, 1u32)];

    while let Some((node, depth)) = stack.pop() {
        let Some(element) = node.value().as_element() else {
            // Text/comment node: counts for nothing, descends into nothing.
            continue;
        };

        total_nodes += 1;
        max_depth = max_depth.max(depth);

        let tag = element.name().to_ascii_lowercase();
        *element_counts.entry(tag.clone()).or_insert(0) += 1;
        buckets[DepthBucket::of(depth).index()] += 1;

        let children_count = node
            .children()
            .filter(|child| child.value().is_element())
            .count();
        if children_count > LARGE_NODE_CHILD_LIMIT {
            large_nodes.push(LargeNode {
                tag,
                id: element.attr("id").unwrap_or_default().to_string(),
                class: element.attr("class").unwrap_or_default().to_string(),
                children_count: children_count as u32,
                depth,
            });
        }

        for child in node.children().rev() {
            stack.push((child, depth + 1));
        }
    }

    // Presentation order: counts descending; ties keep first-seen order.
    element_counts.sort_by(|_, a, _, b| b.cmp(a));

    let mut node_distribution = IndexMap::new();
    for bucket in DepthBucket::ALL {
        let count = buckets[bucket.index()];
        if count > 0 {
            node_distribution.insert(bucket.label().to_string(), count);
        }
    }

    // Stable sort: equal child counts keep traversal (document) order.
    large_nodes.sort_by(|a, b| b.children_count.cmp(&a.children_count));
    large_nodes.truncate(LARGE_NODE_CAP);

    log::debug!(
        "traversed {} elements, max depth {}, {} large nodes",
        total_nodes,
        max_depth,
        large_nodes.len()
    );

    StructuralStats {
        total_nodes,
        max_depth,
        element_counts,
        node_distribution,
        large_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use proptest::prelude::*;

    fn stats_for(html: &str) -> StructuralStats {
        let doc = parser::parse_document(html);
        traverse(parser::root_element(&doc).unwrap())
    }

    #[test]
    fn test_traverse_counts_scaffolding_of_minimal_document() {
        // html5ever materializes <head>, so the minimal document has three
        // elements: html, head, body.
        let stats = stats_for("<html><body></body></html>");
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.tag_count("html"), 1);
        assert_eq!(stats.tag_count("head"), 1);
        assert_eq!(stats.tag_count("body"), 1);
        assert!(stats.large_nodes.is_empty());
    }

    #[test]
    fn test_traverse_ignores_text_and_comment_nodes() {
        let stats = stats_for("<html><body><!-- note --><p>text here</p>more text</body></html>");
        assert_eq!(stats.total_nodes, 4); // html, head, body, p
        assert_eq!(stats.tag_count("p"), 1);
    }

    #[test]
    fn test_traverse_tracks_depth_of_nested_chain() {
        // html(1) body(2) + 5 nested divs -> depth 7
        let html = format!(
            "<html><body>{}{}</body></html>",
            "<div>".repeat(5),
            "</div>".repeat(5)
        );
        let stats = stats_for(&html);
        assert_eq!(stats.max_depth, 7);
        assert_eq!(stats.tag_count("div"), 5);
    }

    #[test]
    fn test_traverse_sum_invariants_hold() {
        let stats = stats_for("<html><body><ul><li>a</li><li>b</li></ul><p></p></body></html>");
        assert_eq!(
            stats.element_counts.values().sum::<u64>(),
            stats.total_nodes
        );
        assert_eq!(
            stats.node_distribution.values().sum::<u64>(),
            stats.total_nodes
        );
    }

    #[test]
    fn test_traverse_records_large_nodes_above_fifty_children() {
        let children = "<span></span>".repeat(51);
        let html = format!(
            "<html><body><div id=\"wide\" class=\"list\">{}</div></body></html>",
            children
        );
        let stats = stats_for(&html);
        assert_eq!(stats.large_nodes.len(), 1);
        let large = &stats.large_nodes[0];
        assert_eq!(large.tag, "div");
        assert_eq!(large.id, "wide");
        assert_eq!(large.class, "list");
        assert_eq!(large.children_count, 51);
        assert_eq!(large.depth, 3);
    }

    #[test]
    fn test_traverse_excludes_nodes_at_exactly_fifty_children() {
        let children = "<span></span>".repeat(50);
        let html = format!("<html><body><div>{}</div></body></html>", children);
        let stats = stats_for(&html);
        assert!(stats.large_nodes.is_empty());
    }

    #[test]
    fn test_large_nodes_sorted_descending_and_truncated_to_twenty() {
        // 30 containers with 51..=80 children; only the 20 largest survive.
        let mut body = String::new();
        for extra in 0..30 {
            body.push_str(&format!(
                "<div id=\"c{}\">{}</div>",
                extra,
                "<i></i>".repeat(51 + extra)
            ));
        }
        let stats = stats_for(&format!("<html><body>{}</body></html>", body));

        assert_eq!(stats.large_nodes.len(), 20);
        assert_eq!(stats.large_nodes[0].children_count, 80);
        assert!(stats
            .large_nodes
            .windows(2)
            .all(|w| w[0].children_count >= w[1].children_count));
        assert_eq!(stats.large_nodes[19].children_count, 61);
    }

    #[test]
    fn test_large_node_ties_keep_traversal_order() {
        let wide = "<b></b>".repeat(51);
        let html = format!(
            "<html><body><div id=\"first\">{w}</div><div id=\"second\">{w}</div></body></html>",
            w = wide
        );
        let stats = stats_for(&html);
        assert_eq!(stats.large_nodes.len(), 2);
        assert_eq!(stats.large_nodes[0].id, "first");
        assert_eq!(stats.large_nodes[1].id, "second");
    }

    #[test]
    fn test_depth_bucket_boundary_at_thirty_one() {
        // html(1) body(2) + 29 divs -> depths 1..=31.
        let html = format!(
            "<html><body>{}{}</body></html>",
            "<div>".repeat(29),
            "</div>".repeat(29)
        );
        let stats = stats_for(&html);
        assert_eq!(stats.max_depth, 31);
        assert_eq!(stats.node_distribution.get("26-30").copied(), Some(5));
        assert_eq!(stats.node_distribution.get("31+").copied(), Some(1));
    }

    #[test]
    fn test_element_counts_sorted_by_count_descending() {
        let html = "<html><body><span></span><span></span><span></span><p></p></body></html>";
        let stats = stats_for(html);
        let counts: Vec<u64> = stats.element_counts.values().copied().collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(stats.element_counts.first().unwrap().0, "span");
    }

    #[test]
    fn test_traverse_is_idempotent_over_the_same_tree() {
        let doc = parser::parse_document("<html><body><div><p>x</p></div></body></html>");
        let root = parser::root_element(&doc).unwrap();
        assert_eq!(traverse(root), traverse(root));
    }

    #[test]
    fn test_uppercase_markup_is_counted_under_lowercase_tags() {
        let stats = stats_for("<HTML><BODY><DIV></DIV></BODY></HTML>");
        assert_eq!(stats.tag_count("div"), 1);
        assert_eq!(stats.tag_count("DIV"), 0);
    }

    // Random small trees: render nested/sibling divs from a shape vector and
    // check the census invariants against a straight count.
    proptest! {
        #[test]
        fn prop_sum_invariants_hold_for_generated_trees(shape in proptest::collection::vec(0u8..6, 0..40)) {
            let mut body = String::new();
            let mut open = 0usize;
            for n in &shape {
                if *n == 0 && open > 0 {
                    body.push_str("</div>");
                    open -= 1;
                } else {
                    body.push_str("<div>");
                    open += 1;
                }
            }
            for _ in 0..open {
                body.push_str("</div>");
            }

            let stats = stats_for(&format!("<html><body>{}</body></html>", body));
            prop_assert_eq!(stats.element_counts.values().sum::<u64>(), stats.total_nodes);
            prop_assert_eq!(stats.node_distribution.values().sum::<u64>(), stats.total_nodes);
            prop_assert!(stats.max_depth as u64 <= stats.total_nodes);
        }
    }
}
