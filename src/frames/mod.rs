//! Multi-frame extraction.
//!
//! - `transport`: request/response messages
//! - `host`: the [`FrameHost`] trait and the in-process [`HtmlFrameHost`]
//! - `arbiter`: concurrent fan-out and result selection

pub mod arbiter;
pub mod host;
pub mod transport;

pub use arbiter::{select_best, Arbiter, ArbiterConfig, MAIN_FRAME_ID};
pub use host::{FrameDocument, FrameHost, HtmlFrameHost};
pub use transport::{ExtractResponse, FrameCommand};
