//! Result types for extraction output.
//!
//! This module defines the structured content model produced by the
//! structural walk, the page metadata, and the per-context extraction result
//! that the frame arbiter and the renderers consume.

use serde::{Deserialize, Serialize};

/// One block of readable content.
///
/// Text fields are whitespace-normalized and trimmed. `Code.code` is only
/// trimmed, its line structure is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    /// `<h1>`..`<h6>`.
    Heading {
        /// Heading level, 1 through 6.
        level: u8,
        text: String,
    },

    /// `<p>`, or a raw-text fallback block.
    Paragraph {
        text: String,
        /// Original inner HTML, used only by term extraction in [`crate::summary`].
        #[serde(default, rename = "rawMarkup", skip_serializing_if = "String::is_empty")]
        raw_markup: String,
    },

    /// `<pre>` block or a long standalone `<code>`.
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },

    /// `<blockquote>`.
    Blockquote { text: String },

    /// `<ul>` / `<ol>`, one entry per direct `<li>`.
    List { ordered: bool, items: Vec<String> },

    /// `<table>`; row 0 is the header.
    Table { rows: Vec<Vec<String>> },

    /// `<img>` or `<figure>` with an image.
    Image { src: String, alt: String },

    /// `<hr>`.
    HorizontalRule,
}

impl ContentNode {
    /// Short lowercase name of the variant, used in logs and renderers.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph { .. } => "paragraph",
            Self::Code { .. } => "code",
            Self::Blockquote { .. } => "blockquote",
            Self::List { .. } => "list",
            Self::Table { .. } => "table",
            Self::Image { .. } => "image",
            Self::HorizontalRule => "hr",
        }
    }
}

/// Metadata describing the extracted page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// `og:title`, then `<title>`, then "Untitled".
    pub title: String,

    /// Page address; may be empty when the host supplied none and the
    /// document declares none.
    #[serde(rename = "url")]
    pub canonical_url: String,

    /// Extraction date as `YYYY-MM-DD`.
    pub date: String,

    /// `og:description` or `<meta name="description">`, possibly empty.
    pub description: String,
}

/// Which tier of the pipeline produced the nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtractionStrategy {
    /// Content root located and walked directly.
    #[default]
    DirectWalk,
    /// The readability extractor's output was re-walked.
    Readability,
    /// Visible page text split on blank lines.
    RawText,
}

/// Result of one extraction context (main document or a frame).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub metadata: PageMetadata,
    pub nodes: Vec<ContentNode>,
    /// Frame the result came from; 0 is the top-level document.
    #[serde(rename = "frameId")]
    pub origin_frame_id: u32,
    #[serde(default)]
    pub strategy: ExtractionStrategy,
}

impl ExtractionResult {
    /// Number of content nodes; the arbiter ranks candidates by it.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when no content node was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Headings in document order, as `(level, text)`.
    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> {
        self.nodes.iter().filter_map(|node| match node {
            ContentNode::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_node_serializes_with_type_tag() {
        let node = ContentNode::Heading { level: 2, text: "Intro".into() };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);

        let hr = serde_json::to_value(ContentNode::HorizontalRule).unwrap();
        assert_eq!(hr["type"], "horizontalRule");
    }

    #[test]
    fn paragraph_raw_markup_is_optional_on_the_wire() {
        let node: ContentNode =
            serde_json::from_str(r#"{"type":"paragraph","text":"hello there"}"#).unwrap();
        assert_eq!(
            node,
            ContentNode::Paragraph { text: "hello there".into(), raw_markup: String::new() }
        );
    }

    #[test]
    fn headings_iterates_in_order() {
        let result = ExtractionResult {
            nodes: vec![
                ContentNode::Heading { level: 1, text: "A".into() },
                ContentNode::Paragraph { text: "body text".into(), raw_markup: String::new() },
                ContentNode::Heading { level: 3, text: "B".into() },
            ],
            ..ExtractionResult::default()
        };
        let headings: Vec<_> = result.headings().collect();
        assert_eq!(headings, vec![(1, "A"), (3, "B")]);
        assert_eq!(result.node_count(), 3);
    }
}
