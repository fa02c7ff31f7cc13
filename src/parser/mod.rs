//! Markup parser adapter
//!
//! Thin adapter over `scraper` (html5ever). The parser follows the HTML5
//! parsing algorithm: it tolerates malformed markup (unclosed tags, missing
//! DOCTYPE) without failing and always materializes implied elements, so a
//! root `<html>` element exists even for empty input. The rest of the crate
//! only sees the parsed tree through this module.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("hardcoded selector parses"));

/// Parse an HTML document into a navigable element tree
///
/// Never fails: html5ever repairs malformed input and synthesizes the
/// `<html>`/`<head>`/`<body>` scaffolding required by the HTML5 algorithm.
///
/// # Examples
///
/// ```
/// use dom_slim::parser;
///
/// let doc = parser::parse_document("<p>unclosed");
/// assert!(parser::root_element(&doc).is_some());
/// ```
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Root `<html>` element of a parsed document
///
/// `None` only for trees without any element node, which
/// [`parse_document`] cannot produce; fragment trees built elsewhere may.
pub fn root_element(doc: &Html) -> Option<ElementRef<'_>> {
    doc.tree.root().children().find_map(ElementRef::wrap)
}

/// The document's `<body>` element, if present
pub fn body_element(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&BODY_SELECTOR).next()
}
