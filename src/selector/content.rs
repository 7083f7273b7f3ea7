//! Content Root Locator
//!
//! Two-tier search for the element holding the article body:
//!
//! 1. the curated [`CONTENT_ROOT_SELECTORS`] (common CMS containers), first
//!    match per selector, scored if visible;
//! 2. when that finds nothing, or nothing scoring at least
//!    `Options::min_root_score`, every visible non-noisy
//!    `div`/`section`/`article`/`main` in document order.
//!
//! The strictly-best score across both tiers wins (ties keep the earlier
//! candidate, so a lone zero-score candidate still beats the body); with no
//! visible candidate at all the body is returned.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::patterns::{CANDIDATE_CONTAINER_SELECTOR, CONTENT_ROOT_SELECTORS};
use crate::scoring::score;
use crate::selector::noise::is_noisy;
use crate::selector::visibility::{is_visible, StyleOracle};
use crate::Options;

/// How the content root was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// Matched a curated selector.
    Selector(&'static str),
    /// Found by scanning generic containers.
    ContainerScan,
    /// Nothing qualified; the document body.
    Body,
}

/// The located content root.
#[derive(Debug, Clone, Copy)]
pub struct ContentRoot<'a> {
    pub node: NodeRef<'a>,
    pub score: u64,
    pub source: RootSource,
}

struct Best<'a> {
    node: NodeRef<'a>,
    score: u64,
    source: RootSource,
}

fn consider<'a>(best: &mut Option<Best<'a>>, node: NodeRef<'a>, score: u64, source: RootSource) {
    if best.as_ref().is_none_or(|b| score > b.score) {
        *best = Some(Best { node, score, source });
    }
}

/// Locate the content root of `doc`.
///
/// Returns `None` only for a document without any element (not even `<html>`).
#[must_use]
pub fn find_root<'a>(doc: &'a Document, oracle: &dyn StyleOracle, options: &Options) -> Option<ContentRoot<'a>> {
    let mut best: Option<Best<'a>> = None;

    for &selector in CONTENT_ROOT_SELECTORS {
        let Some(node) = doc.select(selector).nodes().first().copied() else {
            continue;
        };
        if !is_visible(&node, oracle) {
            continue;
        }
        let s = score(&node, oracle, options);
        consider(&mut best, node, s, RootSource::Selector(selector));
    }

    if best.as_ref().is_none_or(|b| b.score < options.min_root_score) {
        for node in doc.select(CANDIDATE_CONTAINER_SELECTOR).nodes() {
            if !is_visible(node, oracle) || is_noisy(node) {
                continue;
            }
            let s = score(node, oracle, options);
            consider(&mut best, *node, s, RootSource::ContainerScan);
        }
    }

    if let Some(b) = best {
        tracing::debug!(
            "content root: <{}> score={} via {:?}",
            dom::tag_name(&b.node),
            b.score,
            b.source
        );
        return Some(ContentRoot { node: b.node, score: b.score, source: b.source });
    }

    dom::body(doc).map(|node| ContentRoot { node, score: 0, source: RootSource::Body })
}
