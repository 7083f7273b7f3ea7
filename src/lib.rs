//! # page-distill
//!
//! Readable-content extraction for web pages.
//!
//! Given an arbitrary, noisy HTML document, page-distill finds the subtree
//! holding the article body, walks it into a structured content model
//! (headings, paragraphs, lists, code, tables, images) and renders that model
//! as Markdown or print-ready HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_distill::{extract_with_options, ContentNode, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav><a href="/">Home</a></nav>
//! <article><h1>Main heading</h1><p>Main content here.</p></article></body></html>"#;
//!
//! let options = Options { use_readability_fallback: false, ..Options::default() };
//! let result = extract_with_options(html, &options);
//! assert_eq!(result.metadata.title, "My Article");
//! assert!(matches!(result.nodes[0], ContentNode::Heading { level: 1, .. }));
//! ```
//!
//! ## Pipeline
//!
//! - **Noise classifier** and **visibility oracle** (`selector`) filter elements
//! - **Element scorer** (`scoring`) rates candidate roots by text density
//! - **Content root locator** (`selector::content`) picks the article root
//! - **Structural walker** (`extractor::walker`) emits content nodes
//! - **Orchestrator** (`extractor::pipeline`) adds readability and raw-text fallbacks
//! - **Arbiter** (`frames`) runs every frame of a page and keeps one result
//!
//! ## Multiple frames
//!
//! ```rust
//! # async fn run() -> page_distill::Result<()> {
//! use page_distill::frames::{Arbiter, FrameDocument, HtmlFrameHost};
//! use page_distill::Options;
//!
//! let host = HtmlFrameHost::new(Options::default())
//!     .with_frame(FrameDocument::new(0, "<p>Top-level page text.</p>", None))
//!     .with_frame(FrameDocument::new(1, "<p>Embedded article text.</p>", None));
//! let best = Arbiter::default().run(&host).await?;
//! println!("frame {} won", best.origin_frame_id);
//! # Ok(())
//! # }
//! ```

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Noise classification, visibility and content root location.
pub mod selector;

/// Structural walk, stage machine, fallbacks and per-context orchestration.
pub mod extractor;

/// Page metadata (Open Graph, `<title>`, canonical link).
pub mod metadata;

/// URL resolution against the document base.
pub mod url_utils;

/// Content-root scoring.
pub mod scoring;

/// Link density measurement.
pub mod link_density;

/// Multi-frame transport, hosts and arbitration.
pub mod frames;

/// Markdown and HTML renderers.
pub mod render;

/// Heuristic summary, key points and definitions.
pub mod summary;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ContentNode, ExtractionResult, ExtractionStrategy, PageMetadata};

/// Extracts readable content from an HTML document using default options.
///
/// Extraction does not fail: a page without readable content yields a
/// result with no nodes.
///
/// # Example
///
/// ```rust
/// let result = page_distill::extract("<html><body><p>Hello readable world</p></body></html>");
/// assert!(!result.is_empty());
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    extract_with_options(html, &Options::default())
}

/// Extracts readable content from an HTML document with custom options.
///
/// The document is treated as the top-level frame (id 0).
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractionResult {
    extractor::ExtractionContext::new(frames::MAIN_FRAME_ID, html, options.clone()).extract()
}
