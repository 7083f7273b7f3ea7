//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `tags`: Block classification of elements
//! - `walker`: Structural walk from a content root into content nodes
//! - `state`: Extraction stage machine
//! - `fallback`: Readability and raw-text tiers
//! - `pipeline`: Per-context orchestration
//!
//! # Usage
//!
//! ```rust
//! use page_distill::extractor::ExtractionContext;
//! use page_distill::Options;
//!
//! let html = "<html><body><article><h1>Title</h1><p>Some body text.</p></article></body></html>";
//! let options = Options { use_readability_fallback: false, ..Options::default() };
//! let result = ExtractionContext::new(0, html, options).extract();
//! assert_eq!(result.node_count(), 2);
//! ```

pub mod fallback;
pub mod pipeline;
pub mod state;
pub mod tags;
pub mod walker;

#[cfg(feature = "readability")]
pub use fallback::DomSmoothieReadability;
pub use fallback::{raw_text_paragraphs, ReadabilityExtractor, ReadableArticle};
pub use pipeline::ExtractionContext;
pub use state::ExtractionStage;
pub use walker::{walk, walk_root, WalkContext};
