//! Cross-Context Arbiter
//!
//! Extraction runs in every frame of a page at once; the arbiter picks the
//! single result to keep. Content embedded in an iframe (some publishers
//! render articles that way) wins only when the top-level document is not
//! competitive with it.

use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::{sleep, timeout};

use crate::error::{Error, Result};
use crate::result::ExtractionResult;

use super::host::FrameHost;
use super::transport::{ExtractResponse, FrameCommand};

/// Id of the top-level document.
pub const MAIN_FRAME_ID: u32 = 0;

/// Arbitration settings.
#[derive(Debug, Clone)]
pub struct ArbiterConfig {
    /// The main frame wins if it has at least this share of the best count.
    ///
    /// Default: `0.4`
    pub main_frame_ratio: f64,

    /// Upper bound on one frame's answer; slower frames contribute nothing.
    ///
    /// Default: `10s`
    pub frame_timeout: Duration,

    /// Pause after preparing the frames, before the first request.
    ///
    /// Default: `250ms`
    pub settle_delay: Duration,

    /// Pause before the single main-frame retry when every frame came back empty.
    ///
    /// Default: `800ms`
    pub retry_delay: Duration,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            main_frame_ratio: 0.4,
            frame_timeout: Duration::from_secs(10),
            settle_delay: Duration::from_millis(250),
            retry_delay: Duration::from_millis(800),
        }
    }
}

/// Pick the result to keep among per-frame candidates.
///
/// Empty candidates are ignored. With several left, they are ranked by
/// descending node count (ties: lower frame id first) and the main frame is
/// preferred when its count reaches `main_frame_ratio` of the best.
#[must_use]
pub fn select_best(candidates: Vec<ExtractionResult>, main_frame_ratio: f64) -> Option<ExtractionResult> {
    let mut valid: Vec<ExtractionResult> = candidates.into_iter().filter(|c| !c.is_empty()).collect();
    if valid.len() <= 1 {
        return valid.pop();
    }

    valid.sort_by(|a, b| {
        b.node_count()
            .cmp(&a.node_count())
            .then(a.origin_frame_id.cmp(&b.origin_frame_id))
    });
    let best_count = valid.first().map_or(0, ExtractionResult::node_count);

    let main = valid.iter().position(|r| {
        r.origin_frame_id == MAIN_FRAME_ID && r.node_count() as f64 >= best_count as f64 * main_frame_ratio
    });
    let chosen = valid.swap_remove(main.unwrap_or(0));
    tracing::info!(
        frame = chosen.origin_frame_id,
        "selected {} nodes (best {}, {} candidates)",
        chosen.node_count(),
        best_count,
        valid.len() + 1
    );
    Some(chosen)
}

/// Runs extraction across all frames of a host.
#[derive(Debug, Clone, Default)]
pub struct Arbiter {
    config: ArbiterConfig,
}

impl Arbiter {
    #[must_use]
    pub fn new(config: ArbiterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// Extract from every frame of `host` and return the chosen result.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyContent` when frames answered but none found content
    /// - `Error::NoActiveContext` when no frame answered at all
    pub async fn run(&self, host: &dyn FrameHost) -> Result<ExtractionResult> {
        if let Err(err) = host.prepare().await {
            tracing::warn!("frame preparation partial: {err}");
        }
        sleep(self.config.settle_delay).await;

        let frame_ids = match host.frames().await {
            Ok(ids) if !ids.is_empty() => ids,
            Ok(_) => vec![MAIN_FRAME_ID],
            Err(err) => {
                tracing::warn!("frame listing failed, assuming main frame only: {err}");
                vec![MAIN_FRAME_ID]
            }
        };
        tracing::debug!("requesting extraction from {} frame(s)", frame_ids.len());

        let responses = join_all(frame_ids.iter().map(|&id| self.ask(host, id))).await;
        let answered = responses.iter().any(|(_, r)| r.is_some());
        let candidates: Vec<ExtractionResult> = responses
            .into_iter()
            .filter_map(|(id, response)| response.and_then(|r| r.into_result(id)))
            .collect();
        tracing::debug!("{} frame(s) returned a result", candidates.len());

        if let Some(best) = select_best(candidates, self.config.main_frame_ratio) {
            return Ok(best);
        }

        tracing::warn!("no frame produced content, retrying main frame");
        sleep(self.config.retry_delay).await;

        match self.ask(host, MAIN_FRAME_ID).await {
            (id, Some(response)) => match response.into_result(id) {
                Some(result) if !result.is_empty() => Ok(result),
                _ => Err(Error::EmptyContent),
            },
            (_, None) if answered => Err(Error::EmptyContent),
            (_, None) => Err(Error::NoActiveContext(
                "no frame answered the extraction request".to_string(),
            )),
        }
    }

    /// One bounded request; a timeout counts as no answer.
    async fn ask(&self, host: &dyn FrameHost, frame_id: u32) -> (u32, Option<ExtractResponse>) {
        match timeout(self.config.frame_timeout, host.request(frame_id, FrameCommand::Extract)).await {
            Ok(response) => (frame_id, response),
            Err(_) => {
                tracing::debug!(frame = frame_id, "frame timed out");
                (frame_id, None)
            }
        }
    }
}
