//! Configuration options for content extraction.
//!
//! The `Options` struct carries every empirical threshold used by the scorer,
//! the root locator, the structural walker and the fallback tiers. The defaults
//! are the tuned values the heuristics were developed against; override them
//! with struct update syntax rather than editing the traversal code.

use chrono::NaiveDate;

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use page_distill::Options;
///
/// let options = Options {
///     min_root_score: 400,
///     use_readability_fallback: false,
///     ..Options::default()
/// };
/// assert_eq!(options.max_link_ratio, 0.6);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Address of the page being extracted.
    ///
    /// Used as the canonical URL and as the base for resolving relative image
    /// sources (together with any `<base href>` in the document).
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Date stamped into `PageMetadata.date`.
    ///
    /// `None` means "today" in local time at extraction.
    ///
    /// Default: `None`
    pub extraction_date: Option<NaiveDate>,

    /// Elements with less visible text than this score 0.
    ///
    /// Default: `100`
    pub min_scorable_len: usize,

    /// Link-text ratio above which an element scores 0 (navigation-dominated).
    ///
    /// Default: `0.6`
    pub max_link_ratio: f64,

    /// Bonus per structural descendant (p, h1-h6, pre, blockquote, li).
    ///
    /// Default: `40`
    pub structural_bonus: u64,

    /// Best curated-selector score below which the generic container scan runs.
    ///
    /// Default: `200`
    pub min_root_score: u64,

    /// Maximum recursion depth of the structural walk.
    ///
    /// Default: `20`
    pub max_walk_depth: usize,

    /// Heading text must be longer than this (characters).
    ///
    /// Default: `1`
    pub min_heading_len: usize,

    /// Paragraph text must be longer than this (characters).
    ///
    /// Default: `5`
    pub min_paragraph_len: usize,

    /// A standalone `<code>` outside `<pre>` must be longer than this.
    ///
    /// Default: `30`
    pub min_inline_code_len: usize,

    /// The readability tier runs when the direct walk yields fewer nodes.
    ///
    /// Default: `3`
    pub min_node_count: usize,

    /// Raw-text fallback blocks must be longer than this (characters).
    ///
    /// Default: `15`
    pub min_raw_block_len: usize,

    /// Run the readability tier when a readability extractor is configured.
    ///
    /// Default: `true`
    pub use_readability_fallback: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            extraction_date: None,
            min_scorable_len: 100,
            max_link_ratio: 0.6,
            structural_bonus: 40,
            min_root_score: 200,
            max_walk_depth: 20,
            min_heading_len: 1,
            min_paragraph_len: 5,
            min_inline_code_len: 30,
            min_node_count: 3,
            min_raw_block_len: 15,
            use_readability_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert!(opts.url.is_none());
        assert!(opts.extraction_date.is_none());
        assert_eq!(opts.min_scorable_len, 100);
        assert!((opts.max_link_ratio - 0.6).abs() < f64::EPSILON);
        assert_eq!(opts.structural_bonus, 40);
        assert_eq!(opts.min_root_score, 200);
        assert_eq!(opts.max_walk_depth, 20);
        assert_eq!(opts.min_heading_len, 1);
        assert_eq!(opts.min_paragraph_len, 5);
        assert_eq!(opts.min_inline_code_len, 30);
        assert_eq!(opts.min_node_count, 3);
        assert_eq!(opts.min_raw_block_len, 15);
        assert!(opts.use_readability_fallback);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_root_score: 500,
            max_link_ratio: 0.4,
            max_walk_depth: 8,
            ..Options::default()
        };

        assert_eq!(opts.min_root_score, 500);
        assert!((opts.max_link_ratio - 0.4).abs() < f64::EPSILON);
        assert_eq!(opts.max_walk_depth, 8);
        assert_eq!(opts.min_node_count, 3);
    }
}
