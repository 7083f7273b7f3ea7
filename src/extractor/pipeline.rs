//! Content extraction pipeline.
//!
//! [`ExtractionContext`] owns one parsed document (the top-level page or a
//! frame) and drives it through the [`ExtractionStage`] machine: metadata and
//! root location, the structural walk, then the readability and raw-text
//! tiers when the walk comes up short. Extraction never fails; a page with no
//! readable content yields an empty node list.

use dom_query::Document;

use crate::dom;
use crate::metadata::build_metadata;
use crate::result::{ContentNode, ExtractionResult, ExtractionStrategy, PageMetadata};
use crate::selector::content::find_root;
use crate::selector::visibility::{InlineStyleOracle, StyleOracle};
use crate::url_utils::document_base;
use crate::Options;

use super::fallback::{default_readability, raw_text_paragraphs, ReadabilityExtractor};
use super::state::{ExtractionStage, StageInput};
use super::walker::{walk_root, WalkContext};

/// One extraction context: a parsed document plus its collaborators.
pub struct ExtractionContext {
    frame_id: u32,
    document: Document,
    options: Options,
    oracle: Box<dyn StyleOracle>,
    readability: Option<Box<dyn ReadabilityExtractor>>,
}

/// Mutable state threaded through the stages of one run.
struct Progress {
    metadata: PageMetadata,
    nodes: Vec<ContentNode>,
    strategy: ExtractionStrategy,
}

impl ExtractionContext {
    /// Parse `html` as the document of frame `frame_id`.
    ///
    /// Uses [`InlineStyleOracle`] and, when `options.use_readability_fallback`
    /// is set, the build's default readability extractor.
    #[must_use]
    pub fn new(frame_id: u32, html: &str, options: Options) -> Self {
        let readability = if options.use_readability_fallback {
            default_readability()
        } else {
            None
        };
        Self {
            frame_id,
            document: dom::parse(html),
            options,
            oracle: Box::new(InlineStyleOracle),
            readability,
        }
    }

    /// Replace the style oracle.
    #[must_use]
    pub fn with_style_oracle(mut self, oracle: Box<dyn StyleOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    /// Replace (or remove, with `None`) the readability extractor.
    #[must_use]
    pub fn with_readability(mut self, readability: Option<Box<dyn ReadabilityExtractor>>) -> Self {
        self.readability = readability;
        self
    }

    #[must_use]
    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Run the extraction.
    #[must_use]
    pub fn extract(&self) -> ExtractionResult {
        let base_url = document_base(&self.document, self.options.url.as_deref());
        let walk_ctx = WalkContext {
            oracle: self.oracle.as_ref(),
            options: &self.options,
            base_url: base_url.as_ref(),
        };

        let mut progress = Progress {
            metadata: PageMetadata::default(),
            nodes: Vec::new(),
            strategy: ExtractionStrategy::DirectWalk,
        };
        let mut root = None;
        let mut stage = ExtractionStage::Init;

        while !stage.is_terminal() {
            match stage {
                ExtractionStage::Init => {
                    progress.metadata = build_metadata(&self.document, &self.options);
                    root = find_root(&self.document, self.oracle.as_ref(), &self.options);
                }
                ExtractionStage::RootLocated => {
                    if let Some(root) = &root {
                        progress.nodes = walk_root(&root.node, &walk_ctx);
                        tracing::debug!(
                            frame = self.frame_id,
                            "direct walk produced {} nodes",
                            progress.nodes.len()
                        );
                    }
                }
                ExtractionStage::Walked => {}
                ExtractionStage::FallbackReadability => self.readability_tier(&mut progress, &walk_ctx),
                ExtractionStage::FallbackRawText => self.raw_text_tier(&mut progress),
                ExtractionStage::Done => break,
            }

            let next = stage.next(StageInput {
                node_count: progress.nodes.len(),
                min_node_count: self.options.min_node_count,
                readability_available: self.readability.is_some(),
            });
            tracing::debug!(frame = self.frame_id, "stage {:?} -> {:?}", stage, next);
            stage = next;
        }

        ExtractionResult {
            metadata: progress.metadata,
            nodes: progress.nodes,
            origin_frame_id: self.frame_id,
            strategy: progress.strategy,
        }
    }

    /// Re-walk the readability article; adopt it if it has strictly more nodes.
    fn readability_tier(&self, progress: &mut Progress, walk_ctx: &WalkContext<'_>) {
        let Some(readability) = &self.readability else {
            return;
        };

        let article = match readability.parse(&self.document) {
            Ok(Some(article)) => article,
            Ok(None) => {
                tracing::debug!(frame = self.frame_id, "readability found no article");
                return;
            }
            Err(err) => {
                tracing::warn!(frame = self.frame_id, "readability fallback discarded: {err}");
                return;
            }
        };

        let article_doc = dom::parse(&article.content);
        let Some(article_root) = dom::body(&article_doc) else {
            return;
        };
        let nodes = walk_root(&article_root, walk_ctx);

        if nodes.len() > progress.nodes.len() {
            tracing::debug!(
                frame = self.frame_id,
                "readability tier adopted: {} nodes (was {})",
                nodes.len(),
                progress.nodes.len()
            );
            progress.nodes = nodes;
            progress.strategy = ExtractionStrategy::Readability;
            if !article.title.is_empty() {
                progress.metadata.title = article.title;
            }
        }
    }

    fn raw_text_tier(&self, progress: &mut Progress) {
        let Some(body) = dom::body(&self.document) else {
            return;
        };
        tracing::warn!(frame = self.frame_id, "no structured nodes found, using raw text");
        progress.nodes = raw_text_paragraphs(&body, self.oracle.as_ref(), self.options.min_raw_block_len);
        if !progress.nodes.is_empty() {
            progress.strategy = ExtractionStrategy::RawText;
        }
    }
}
