//! Policy tables and compiled regex patterns.
//!
//! Every literal list the heuristics depend on lives here, so the lists can be
//! unit-tested and extended without touching traversal logic. Substring tables
//! pair each pattern with the reason it signals noise.
//!
//! Regexes are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Noise Classification
// =============================================================================

/// Tags that are never article content.
pub const NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "svg", "canvas",
    "nav", "header", "footer", "aside", "form",
];

/// A class/id substring that marks an element as noise.
#[derive(Debug, Clone, Copy)]
pub struct NoisePattern {
    pub pattern: &'static str,
    pub rationale: &'static str,
}

const fn noise(pattern: &'static str, rationale: &'static str) -> NoisePattern {
    NoisePattern { pattern, rationale }
}

/// Substrings matched against lower-cased `class + " " + id`.
pub const NOISE_PATTERNS: &[NoisePattern] = &[
    noise("nav", "site navigation"),
    noise("menu", "navigation menus"),
    noise("header", "page/site header chrome"),
    noise("footer", "page/site footer chrome"),
    noise("sidebar", "side column"),
    noise("side-bar", "side column"),
    noise("ad-", "advertising slot prefix"),
    noise("-ad", "advertising slot suffix"),
    noise("advert", "advertising"),
    noise("banner", "banners and ad strips"),
    noise("promo", "promotional blocks"),
    noise("promotion", "promotional blocks"),
    noise("cookie", "cookie consent banner"),
    noise("gdpr", "privacy consent banner"),
    noise("consent", "consent banner"),
    noise("popup", "overlay popups"),
    noise("modal", "modal dialogs"),
    noise("overlay", "full-page overlays"),
    noise("newsletter", "newsletter signup"),
    noise("subscribe", "subscription prompts"),
    noise("signup", "account signup"),
    noise("sign-up", "account signup"),
    noise("comment", "comment threads"),
    noise("disqus", "embedded comment service"),
    noise("share", "share buttons"),
    noise("social", "social widgets"),
    noise("tweet", "embedded tweet buttons"),
    noise("facebook", "facebook widgets"),
    noise("related", "related-content rails"),
    noise("recommend", "recommendation rails"),
    noise("suggested", "suggested-content rails"),
    noise("more-article", "more-articles rails"),
    noise("widget", "generic widgets"),
    noise("toolbar", "toolbar UI"),
    noise("breadcrumb", "breadcrumb trails"),
    noise("pagination", "pagination controls"),
    noise("pager", "pagination controls"),
    noise("toc-float", "floating table of contents"),
    noise("sticky", "sticky UI"),
    noise("fixed-", "fixed-position UI"),
    noise("back-to-top", "scroll-to-top button"),
];

/// Whole class/id tokens too short to match as substrings ("ad" would hit
/// "read", "thread", "download").
pub const NOISE_TOKENS: &[&str] = &["ad", "ads"];

/// ARIA landmark roles that are never the article body.
pub const NOISE_ROLES: &[&str] = &["navigation", "banner", "complementary", "contentinfo"];

// =============================================================================
// Visibility
// =============================================================================

/// Utility classes that mean `display: none` in common CSS frameworks.
pub const HIDDEN_CLASS_TOKENS: &[&str] = &["hidden", "d-none", "is-hidden", "hide"];

/// Tags whose text is never rendered.
pub const NON_RENDERED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "head", "title", "meta", "link",
];

// =============================================================================
// Content Root Location
// =============================================================================

/// Curated content-root selectors, most to least specific.
pub const CONTENT_ROOT_SELECTORS: &[&str] = &[
    r#"article[class*="content"]"#,
    r#"article[class*="post"]"#,
    r#"article[class*="article"]"#,
    "article",
    r#"[role="main"] article"#,
    r#"[role="article"]"#,
    "main article",
    "main",
    r#"[role="main"]"#,
    ".post-content", ".post-body", ".post__content",
    ".article-content", ".article-body", ".article__body",
    ".entry-content", ".entry-body",
    ".content-body", ".page-content", ".page-body",
    ".main-content", ".main__content",
    ".markdown-body", ".prose", ".rich-text",
    ".blog-content", ".blog-post", ".blog__content",
    ".story-body", ".story__body",
    ".text-content", ".body-content",
    "#article-body", "#post-body", "#content-body",
    "#main-content", "#article", "#post",
    ".container > article",
    "section > article",
];

/// Generic containers scanned when the curated selectors under-perform.
pub const CANDIDATE_CONTAINER_SELECTOR: &str = "div, section, article, main";

/// Descendants counted for the structural bonus.
pub const STRUCTURAL_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, pre, blockquote, li";

// =============================================================================
// Text Patterns
// =============================================================================

/// Matches whitespace runs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches blank-line block boundaries in rendered text.
pub static BLANK_LINE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n").expect("BLANK_LINE_SPLIT regex")
});

/// Matches `language-xxx` / `lang-xxx` code classes.
pub static CODE_LANGUAGE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:language|lang)-(.+)$").expect("CODE_LANGUAGE_CLASS regex")
});

/// Matches a heading tag name and captures its level.
pub static HEADING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^h([1-6])$").expect("HEADING_TAG regex")
});

/// Matches breakpoint-prefixed display utilities (`md:block`, `d-lg-flex`)
/// that reveal an element a hidden class hides on small screens.
pub static RESPONSIVE_DISPLAY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:sm|md|lg|xl|2xl):|d-(?:sm|md|lg|xl|xxl)-)(?:block|inline|inline-block|flex|inline-flex|grid|inline-grid|table|table-row|table-cell|contents|flow-root)$",
    )
    .expect("RESPONSIVE_DISPLAY_CLASS regex")
});

// =============================================================================
// Heuristic Notes
// =============================================================================

/// Phrases marking a sentence as a likely key point.
pub const SIGNAL_PHRASES: &[&str] = &[
    "important", "key", "note that", "remember", "definition",
    "defined as", "refers to", "means that", "is called", "known as",
    "in summary", "to summarize", "in conclusion", "therefore",
    "the goal", "the purpose", "the main", "this allows", "this means",
    "step 1", "step 2", "first,", "second,", "finally,", "however",
];

/// A sentence: a run of text up to and including terminal punctuation.
pub static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?]*[.!?]").expect("SENTENCE regex")
});

/// A short bold term in markup; groups: opening tag, term, closing tag.
pub static BOLD_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(strong|b)>([^<]{2,40})</(strong|b)>").expect("BOLD_TERM regex")
});

/// Any markup tag.
pub static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]+>").expect("MARKUP_TAG regex")
});
