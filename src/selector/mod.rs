//! Element Classification
//!
//! Predicates and searches that decide which parts of a document matter:
//!
//! - `noise`: is an element navigation/ads/widget chrome?
//! - `visibility`: is an element effectively rendered?
//! - `content`: which element is the content root?

pub mod content;
pub mod noise;
pub mod visibility;

pub use content::{find_root, ContentRoot, RootSource};
pub use noise::{is_noisy, noise_reason, NoiseReason};
pub use visibility::{is_visible, ComputedStyle, InlineStyleOracle, StyleOracle};
