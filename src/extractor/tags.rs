//! Block classification for the structural walk.
//!
//! Every element the walker meets is either a leaf block that yields at most
//! one [`ContentNode`](crate::ContentNode) or a transparent container the walk
//! descends into.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::HEADING_TAG;

/// How the walker treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `h1`..`h6` with its level.
    Heading(u8),
    Paragraph,
    /// `pre`, usually wrapping a `code`.
    Preformatted,
    /// `code` outside any `pre`.
    StandaloneCode,
    Blockquote,
    List { ordered: bool },
    Table,
    Rule,
    /// `img`, or `figure` (which may or may not hold an image).
    Image,
    /// Anything else: descend into children.
    Container,
}

impl BlockKind {
    /// True for kinds the walker never descends into.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        self != Self::Container
    }
}

/// Heading level of an `h1`..`h6` tag name.
#[must_use]
pub fn heading_level(tag: &str) -> Option<u8> {
    HEADING_TAG
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Classify an element by its tag.
#[must_use]
pub fn classify(node: &NodeRef<'_>) -> BlockKind {
    let tag = dom::tag_name(node);
    if let Some(level) = heading_level(&tag) {
        return BlockKind::Heading(level);
    }
    match tag.as_str() {
        "p" => BlockKind::Paragraph,
        "pre" => BlockKind::Preformatted,
        "code" if !dom::has_ancestor_tag(node, "pre") => BlockKind::StandaloneCode,
        "blockquote" => BlockKind::Blockquote,
        "ul" => BlockKind::List { ordered: false },
        "ol" => BlockKind::List { ordered: true },
        "table" => BlockKind::Table,
        "hr" => BlockKind::Rule,
        "img" | "figure" => BlockKind::Image,
        _ => BlockKind::Container,
    }
}
