//! Error types for page-distill.
//!
//! Only context-level failures reach callers. Per-element failures
//! (`StyleComputation`, `ReadabilityFallback`) are produced by collaborators
//! and recovered inside the pipeline with a safe default.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No extraction context could be established (no responsive frame).
    #[error("No active extraction context: {0}")]
    NoActiveContext(String),

    /// Every context answered, but none produced any content node.
    #[error("No readable content found on this page")]
    EmptyContent,

    /// Computed style could not be evaluated for an element.
    ///
    /// Recovered locally: the element is treated as visible.
    #[error("Style computation failed: {0}")]
    StyleComputation(String),

    /// The external readability extractor failed or returned unusable output.
    ///
    /// Recovered locally: the direct-walk result is kept.
    #[error("Readability fallback failed: {0}")]
    ReadabilityFallback(String),

    /// The frame host could not enumerate or reach its frames.
    #[error("Frame transport failed: {0}")]
    Transport(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
