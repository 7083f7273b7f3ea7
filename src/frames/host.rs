//! Frame hosts: where per-frame extraction actually runs.
//!
//! A [`FrameHost`] enumerates the extraction contexts of a page (the
//! top-level document is frame 0) and answers [`FrameCommand`]s sent to them.
//! [`HtmlFrameHost`] is the in-process implementation over static HTML.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::extractor::ExtractionContext;
use crate::Options;

use super::transport::{ExtractResponse, FrameCommand};

/// Transport to the extraction contexts of one page.
#[async_trait]
pub trait FrameHost: Send + Sync {
    /// Make the extractor available in every frame.
    ///
    /// Idempotent; frames that cannot be prepared simply never answer.
    async fn prepare(&self) -> Result<()>;

    /// Ids of all frames.
    ///
    /// # Errors
    ///
    /// `Error::Transport` when the frames cannot be listed.
    async fn frames(&self) -> Result<Vec<u32>>;

    /// Send `command` to one frame; `None` when the frame does not answer.
    async fn request(&self, frame_id: u32, command: FrameCommand) -> Option<ExtractResponse>;
}

/// One frame's document and per-context state.
#[derive(Debug)]
pub struct FrameDocument {
    pub id: u32,
    html: Arc<str>,
    url: Option<String>,
    initialized: AtomicBool,
}

impl FrameDocument {
    #[must_use]
    pub fn new(id: u32, html: impl Into<Arc<str>>, url: Option<String>) -> Self {
        Self {
            id,
            html: html.into(),
            url,
            initialized: AtomicBool::new(false),
        }
    }

    /// True once [`FrameHost::prepare`] reached this frame.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Mark the frame ready; returns true if it already was.
    fn initialize(&self) -> bool {
        self.initialized.swap(true, Ordering::AcqRel)
    }
}

/// In-process host over a set of HTML documents.
///
/// Extraction runs on the blocking pool since a parsed document cannot
/// cross threads; only the HTML goes in and an owned result comes out.
#[derive(Debug)]
pub struct HtmlFrameHost {
    frames: Vec<FrameDocument>,
    options: Options,
}

impl HtmlFrameHost {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            frames: Vec::new(),
            options,
        }
    }

    /// Host with just the top-level document.
    #[must_use]
    pub fn single(html: impl Into<Arc<str>>, options: Options) -> Self {
        let url = options.url.clone();
        Self::new(options).with_frame(FrameDocument::new(0, html, url))
    }

    /// Add a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: FrameDocument) -> Self {
        self.frames.push(frame);
        self
    }

    #[must_use]
    pub fn frame(&self, frame_id: u32) -> Option<&FrameDocument> {
        self.frames.iter().find(|f| f.id == frame_id)
    }
}

#[async_trait]
impl FrameHost for HtmlFrameHost {
    async fn prepare(&self) -> Result<()> {
        for frame in &self.frames {
            if frame.initialize() {
                tracing::trace!(frame = frame.id, "already prepared");
            }
        }
        Ok(())
    }

    async fn frames(&self) -> Result<Vec<u32>> {
        if self.frames.is_empty() {
            return Err(Error::Transport("host has no frames".to_string()));
        }
        Ok(self.frames.iter().map(|f| f.id).collect())
    }

    async fn request(&self, frame_id: u32, command: FrameCommand) -> Option<ExtractResponse> {
        let frame = self.frame(frame_id)?;
        if !frame.is_initialized() {
            tracing::debug!(frame = frame_id, "request to unprepared frame dropped");
            return None;
        }

        match command {
            FrameCommand::Extract => {
                let html = Arc::clone(&frame.html);
                let options = Options {
                    url: frame.url.clone(),
                    ..self.options.clone()
                };
                let joined = tokio::task::spawn_blocking(move || {
                    ExtractionContext::new(frame_id, &html, options).extract()
                })
                .await;

                Some(match joined {
                    Ok(result) => ExtractResponse::from_result(result),
                    Err(err) => {
                        tracing::warn!(frame = frame_id, "extraction task failed: {err}");
                        ExtractResponse::failure(err.to_string())
                    }
                })
            }
        }
    }
}
