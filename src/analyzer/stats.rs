//! Structural census types
//!
//! Output of the single-pass traversal: node/depth totals, per-tag counts,
//! the depth-bucket histogram, and the oversized-container list. All types
//! are plain owned data with no references into the parsed tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Direct-element-child count above which a node is recorded as "large"
pub const LARGE_NODE_CHILD_LIMIT: usize = 50;

/// Maximum number of large nodes kept after sorting
pub const LARGE_NODE_CAP: usize = 20;

/// Aggregate structural statistics for one document
///
/// Invariants: the values of `element_counts` and of `node_distribution`
/// each sum to `total_nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralStats {
    /// Total element nodes in the tree
    pub total_nodes: u64,

    /// Deepest element level (root `<html>` = depth 1; 0 for an empty tree)
    pub max_depth: u32,

    /// Per-tag element counts, sorted by count descending
    pub element_counts: IndexMap<String, u64>,

    /// Elements per depth bucket, ascending bucket order, empty buckets omitted
    pub node_distribution: IndexMap<String, u64>,

    /// Elements with more than [`LARGE_NODE_CHILD_LIMIT`] direct element
    /// children, sorted by `children_count` descending (ties keep traversal
    /// order), truncated to [`LARGE_NODE_CAP`] entries
    pub large_nodes: Vec<LargeNode>,
}

impl StructuralStats {
    /// Count for a single tag (0 when the tag never occurred)
    pub fn tag_count(&self, tag: &str) -> u64 {
        self.element_counts.get(tag).copied().unwrap_or(0)
    }

    /// Summed count over several tags
    pub fn tag_count_sum(&self, tags: &[&str]) -> u64 {
        tags.iter().map(|tag| self.tag_count(tag)).sum()
    }
}

/// An element with an oversized direct-child list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeNode {
    /// Lowercased tag name
    pub tag: String,
    /// `id` attribute, empty string when absent
    pub id: String,
    /// `class` attribute, empty string when absent
    pub class: String,
    /// Number of direct element children
    pub children_count: u32,
    /// Depth at which the element was found
    pub depth: u32,
}

/// Fixed depth histogram buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBucket {
    /// Depths 1-5
    D1To5,
    /// Depths 6-10
    D6To10,
    /// Depths 11-15
    D11To15,
    /// Depths 16-20
    D16To20,
    /// Depths 21-25
    D21To25,
    /// Depths 26-30
    D26To30,
    /// Depths 31 and beyond
    D31Plus,
}

impl DepthBucket {
    /// All buckets in ascending depth order
    pub const ALL: [DepthBucket; 7] = [
        DepthBucket::D1To5,
        DepthBucket::D6To10,
        DepthBucket::D11To15,
        DepthBucket::D16To20,
        DepthBucket::D21To25,
        DepthBucket::D26To30,
        DepthBucket::D31Plus,
    ];

    /// Bucket containing the given depth (depth 0 never occurs; it would
    /// land in the first bucket)
    pub fn of(depth: u32) -> Self {
        match depth {
            0..=5 => DepthBucket::D1To5,
            6..=10 => DepthBucket::D6To10,
            11..=15 => DepthBucket::D11To15,
            16..=20 => DepthBucket::D16To20,
            21..=25 => DepthBucket::D21To25,
            26..=30 => DepthBucket::D26To30,
            _ => DepthBucket::D31Plus,
        }
    }

    /// Histogram label for this bucket
    pub fn label(self) -> &'static str {
        match self {
            DepthBucket::D1To5 => "1-5",
            DepthBucket::D6To10 => "6-10",
            DepthBucket::D11To15 => "11-15",
            DepthBucket::D16To20 => "16-20",
            DepthBucket::D21To25 => "21-25",
            DepthBucket::D26To30 => "26-30",
            DepthBucket::D31Plus => "31+",
        }
    }

    /// Position of this bucket in [`DepthBucket::ALL`]
    pub fn index(self) -> usize {
        match self {
            DepthBucket::D1To5 => 0,
            DepthBucket::D6To10 => 1,
            DepthBucket::D11To15 => 2,
            DepthBucket::D16To20 => 3,
            DepthBucket::D21To25 => 4,
            DepthBucket::D26To30 => 5,
            DepthBucket::D31Plus => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_bucket_boundaries_split_at_multiples_of_five() {
        assert_eq!(DepthBucket::of(1).label(), "1-5");
        assert_eq!(DepthBucket::of(5).label(), "1-5");
        assert_eq!(DepthBucket::of(6).label(), "6-10");
        assert_eq!(DepthBucket::of(10).label(), "6-10");
        assert_eq!(DepthBucket::of(15).label(), "11-15");
        assert_eq!(DepthBucket::of(16).label(), "16-20");
        assert_eq!(DepthBucket::of(25).label(), "21-25");
        assert_eq!(DepthBucket::of(30).label(), "26-30");
        assert_eq!(DepthBucket::of(31).label(), "31+");
        assert_eq!(DepthBucket::of(4000).label(), "31+");
    }

    #[test]
    fn test_depth_bucket_index_matches_all_order() {
        for (i, bucket) in DepthBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
    }

    #[test]
    fn test_tag_count_sum_over_missing_tags_is_zero() {
        let stats = StructuralStats {
            total_nodes: 0,
            max_depth: 0,
            element_counts: IndexMap::new(),
            node_distribution: IndexMap::new(),
            large_nodes: Vec::new(),
        };
        assert_eq!(stats.tag_count("div"), 0);
        assert_eq!(stats.tag_count_sum(&["input", "select"]), 0);
    }
}
