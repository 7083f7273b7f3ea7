//! Noise Classifier
//!
//! Decides whether an element is structurally irrelevant to the article:
//! navigation, ads, consent banners, social widgets and similar chrome.
//! The decision is a pure function of tag, class, id and ARIA role; the
//! policy itself lives in [`crate::patterns`].

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::{NOISE_PATTERNS, NOISE_ROLES, NOISE_TAGS, NOISE_TOKENS};

/// Why an element was classified as noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseReason {
    Tag(&'static str),
    Pattern(&'static str),
    Token(&'static str),
    Role(&'static str),
}

/// True if `node` is noise by tag, class/id pattern, or ARIA role.
#[must_use]
pub fn is_noisy(node: &NodeRef<'_>) -> bool {
    noise_reason(node).is_some()
}

/// The first rule that classifies `node` as noise, if any.
#[must_use]
pub fn noise_reason(node: &NodeRef<'_>) -> Option<NoiseReason> {
    let tag = dom::tag_name(node);
    if let Some(t) = NOISE_TAGS.iter().copied().find(|t| *t == tag) {
        return Some(NoiseReason::Tag(t));
    }

    let class = dom::class_name(node).unwrap_or_default().to_lowercase();
    let id = dom::id(node).unwrap_or_default().to_lowercase();
    let combined = format!("{class} {id}");

    if let Some(pattern) = NOISE_PATTERNS
        .iter()
        .map(|p| p.pattern)
        .find(|pattern| combined.contains(*pattern))
    {
        return Some(NoiseReason::Pattern(pattern));
    }

    if let Some(token) = combined
        .split_whitespace()
        .find_map(|tok| NOISE_TOKENS.iter().copied().find(|t| *t == tok))
    {
        return Some(NoiseReason::Token(token));
    }

    let role = dom::get_attribute(node, "role").unwrap_or_default().to_lowercase();
    let role = role.trim();
    NOISE_ROLES
        .iter()
        .copied()
        .find(|r| *r == role)
        .map(NoiseReason::Role)
}
