//! Wire messages between the arbiter and per-frame extractors.
//!
//! ```text
//! request:  {"command":"extract"}
//! response: {"success":true,"nodes":[...],"metadata":{...}}
//!           {"success":false,"error":"..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::result::{ContentNode, ExtractionResult, ExtractionStrategy, PageMetadata};

/// Command sent to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum FrameCommand {
    Extract,
}

/// A frame's answer to [`FrameCommand::Extract`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<ContentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ExtractionStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractResponse {
    /// Successful response carrying `result`.
    #[must_use]
    pub fn from_result(result: ExtractionResult) -> Self {
        Self {
            success: true,
            nodes: Some(result.nodes),
            metadata: Some(result.metadata),
            strategy: Some(result.strategy),
            error: None,
        }
    }

    /// Failed response with a message.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Extraction result tagged with the frame it came from.
    ///
    /// `None` for failed responses.
    #[must_use]
    pub fn into_result(self, frame_id: u32) -> Option<ExtractionResult> {
        if !self.success {
            return None;
        }
        Some(ExtractionResult {
            metadata: self.metadata.unwrap_or_default(),
            nodes: self.nodes.unwrap_or_default(),
            origin_frame_id: frame_id,
            strategy: self.strategy.unwrap_or_default(),
        })
    }
}
