//! Extraction state tracking.
//!
//! One extraction runs through a fixed sequence of stages:
//!
//! ```text
//! Init -> RootLocated -> Walked -> [FallbackReadability] -> [FallbackRawText] -> Done
//! ```
//!
//! The bracketed stages are entered only when the content found so far is
//! too thin. [`ExtractionStage::next`] is the complete transition table.

/// Stage of a single extraction context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStage {
    /// Metadata not yet built, root not yet located.
    Init,
    /// A content root (or the body) has been chosen.
    RootLocated,
    /// The root has been walked into content nodes.
    Walked,
    /// The readability extractor is being tried.
    FallbackReadability,
    /// Visible text is being split into paragraphs.
    FallbackRawText,
    Done,
}

/// Facts the transition out of a stage depends on.
#[derive(Debug, Clone, Copy)]
pub struct StageInput {
    /// Content nodes collected so far.
    pub node_count: usize,
    /// Below this, the readability tier is tried.
    pub min_node_count: usize,
    /// Whether a readability extractor is configured.
    pub readability_available: bool,
}

impl ExtractionStage {
    /// The stage that follows `self`.
    #[must_use]
    pub fn next(self, input: StageInput) -> Self {
        match self {
            Self::Init => Self::RootLocated,
            Self::RootLocated => Self::Walked,
            Self::Walked if input.node_count < input.min_node_count && input.readability_available => {
                Self::FallbackReadability
            }
            Self::Walked | Self::FallbackReadability if input.node_count == 0 => Self::FallbackRawText,
            Self::Walked | Self::FallbackReadability | Self::FallbackRawText | Self::Done => Self::Done,
        }
    }

    /// True once no further stage follows.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }
}
