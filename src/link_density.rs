//! Link Density
//!
//! Measures how much of an element's rendered text sits inside anchors.
//! Link-dominated regions are navigation menus and link directories, not
//! article bodies.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::selector::visibility::StyleOracle;

/// Sum of the visible-text lengths of every anchor descendant of `node`.
#[must_use]
pub fn link_text_len(node: &NodeRef<'_>, oracle: &dyn StyleOracle) -> usize {
    Selection::from(*node)
        .select("a")
        .nodes()
        .iter()
        .map(|link| dom::visible_text_len(link, oracle))
        .sum()
}

/// Ratio of link text to total text, guarding against division by zero.
#[must_use]
pub fn link_ratio(link_len: usize, total_len: usize) -> f64 {
    link_len as f64 / total_len.max(1) as f64
}
