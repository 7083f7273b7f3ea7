//! Fallback extraction.
//!
//! Two tiers back up the direct walk:
//!
//! 1. a [`ReadabilityExtractor`] (by default `dom_smoothie`) whose article
//!    HTML is walked again;
//! 2. [`raw_text_paragraphs`]: the page's rendered text split on blank lines.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::error::Result;
use crate::patterns::BLANK_LINE_SPLIT;
use crate::result::ContentNode;
use crate::selector::visibility::StyleOracle;

/// Article produced by a readability extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadableArticle {
    /// Article title; empty when the extractor found none.
    pub title: String,
    /// Article body as HTML.
    pub content: String,
}

/// Generic "reader mode" extractor used when the direct walk finds too little.
pub trait ReadabilityExtractor: Send + Sync {
    /// Parse `doc`; `Ok(None)` when no article was recognized.
    ///
    /// Implementations must not mutate `doc`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReadabilityFallback` when the extractor fails.
    fn parse(&self, doc: &Document) -> Result<Option<ReadableArticle>>;
}

/// [`ReadabilityExtractor`] backed by `dom_smoothie`.
#[cfg(feature = "readability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSmoothieReadability;

#[cfg(feature = "readability")]
impl ReadabilityExtractor for DomSmoothieReadability {
    fn parse(&self, doc: &Document) -> Result<Option<ReadableArticle>> {
        use crate::error::Error;
        use dom_smoothie::Readability;

        let mut reader = Readability::with_document(dom::clone_document(doc), None, None)
            .map_err(|e| Error::ReadabilityFallback(e.to_string()))?;
        let article = reader
            .parse()
            .map_err(|e| Error::ReadabilityFallback(e.to_string()))?;

        let content = article.content.to_string();
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(ReadableArticle {
            title: article.title.trim().to_string(),
            content,
        }))
    }
}

/// The default extractor for this build, if any.
#[must_use]
pub fn default_readability() -> Option<Box<dyn ReadabilityExtractor>> {
    #[cfg(feature = "readability")]
    {
        Some(Box::new(DomSmoothieReadability))
    }
    #[cfg(not(feature = "readability"))]
    {
        None
    }
}

/// Split the rendered text of `root` on blank lines into paragraphs.
///
/// Blocks of `min_len` characters or fewer are dropped.
#[must_use]
pub fn raw_text_paragraphs(root: &NodeRef<'_>, oracle: &dyn StyleOracle, min_len: usize) -> Vec<ContentNode> {
    let text = dom::inner_text(root, oracle);
    BLANK_LINE_SPLIT
        .split(&text)
        .map(dom::normalize_text)
        .filter(|block| block.chars().count() > min_len)
        .map(|text| ContentNode::Paragraph {
            text,
            raw_markup: String::new(),
        })
        .collect()
}
