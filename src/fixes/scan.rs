//! Raw markup scanning
//!
//! Substring-level counters and signature detection over the original HTML
//! text, independent of the parsed tree. The markup is lowercased once; tag
//! counting then runs `memmem` per needle. Class-attribute scans use
//! precompiled regexes.

use crate::fixes::patterns::{
    IssueSignature, PluginSignature, PLUGIN_SIGNATURES, THEME_SIGNATURES,
};
use memchr::memmem;
use regex::Regex;
use std::sync::LazyLock;

static THEME_CLASS_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="[^"]*theme-([A-Za-z0-9_-]+)"#).expect("hardcoded pattern compiles")
});

/// A detected theme: either a known signature or one synthesized from a
/// `theme-xyz` body class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedTheme {
    /// Signature key or the captured class suffix
    pub key: String,
    /// Human name (capitalized class suffix for synthesized detections)
    pub name: String,
    /// Substring used to count builder-generated elements
    pub detector: String,
    /// Known issues to probe for (empty for synthesized detections)
    pub issues: &'static [IssueSignature],
    /// Vendor documentation, when known
    pub docs_url: Option<&'static str>,
}

/// One-pass view over the raw markup
pub struct MarkupScan<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> MarkupScan<'a> {
    /// Prepare a scan; lowercases the markup once for tag counting
    pub fn new(html: &'a str) -> Self {
        Self {
            raw: html,
            lower: html.to_ascii_lowercase(),
        }
    }

    /// True when there is no markup to scan
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-sensitive substring check against the raw markup
    pub fn contains(&self, needle: &str) -> bool {
        memmem::find(self.raw.as_bytes(), needle.as_bytes()).is_some()
    }

    /// Count `<tag` open-tag occurrences (case-insensitive)
    ///
    /// Prefix matching: `<li` also counts `<link`. This mirrors the census
    /// fallback closely enough for the ratio heuristics that consume it.
    pub fn open_tags(&self, tag: &str) -> u64 {
        let needle = format!("<{}", tag.to_ascii_lowercase());
        memmem::find_iter(self.lower.as_bytes(), needle.as_bytes()).count() as u64
    }

    /// Count class attributes containing the given marker
    pub fn class_occurrences(&self, marker: &str) -> u64 {
        let pattern = format!(r#"class="[^"]*{}[^"]*""#, regex::escape(marker));
        Regex::new(&pattern)
            .map(|re| re.find_iter(self.raw).count() as u64)
            .unwrap_or(0)
    }

    /// Detect the active theme: first signature whose detector occurs in
    /// the markup wins; otherwise fall back to a `theme-xyz` body class
    pub fn detect_theme(&self) -> Option<DetectedTheme> {
        for theme in THEME_SIGNATURES {
            if self.contains(theme.detector) {
                return Some(DetectedTheme {
                    key: theme.key.to_string(),
                    name: theme.name.to_string(),
                    detector: theme.detector.to_string(),
                    issues: theme.issues,
                    docs_url: theme.docs_url,
                });
            }
        }

        THEME_CLASS_FALLBACK.captures(self.raw).map(|caps| {
            let slug = &caps[1];
            DetectedTheme {
                key: slug.to_string(),
                name: capitalize(slug),
                detector: slug.to_string(),
                issues: &[],
                docs_url: None,
            }
        })
    }

    /// Detect plugins: every signature whose detector occurs is collected
    pub fn detect_plugins(&self) -> Vec<&'static PluginSignature> {
        PLUGIN_SIGNATURES
            .iter()
            .filter(|plugin| self.contains(plugin.detector))
            .collect()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
