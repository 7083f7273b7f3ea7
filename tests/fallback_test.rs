use page_distill::dom::{self, Document, NodeRef};
use page_distill::extractor::{ExtractionContext, ExtractionStage, ReadabilityExtractor, ReadableArticle};
use page_distill::selector::{ComputedStyle, StyleOracle};
use page_distill::{ContentNode, Error, ExtractionStrategy, Options, Result};

fn options() -> Options {
    Options {
        use_readability_fallback: false,
        ..Options::default()
    }
}

fn paragraph_texts(nodes: &[ContentNode]) -> Vec<&str> {
    nodes
        .iter()
        .filter_map(|n| match n {
            ContentNode::Paragraph { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

struct NoArticle;

impl ReadabilityExtractor for NoArticle {
    fn parse(&self, _doc: &Document) -> Result<Option<ReadableArticle>> {
        Ok(None)
    }
}

struct ArticleFrom(&'static str);

impl ReadabilityExtractor for ArticleFrom {
    fn parse(&self, _doc: &Document) -> Result<Option<ReadableArticle>> {
        Ok(Some(ReadableArticle {
            title: String::new(),
            content: self.0.to_string(),
        }))
    }
}

/// Hides anything carrying the `offscreen` class.
struct ClassHidingOracle;

impl StyleOracle for ClassHidingOracle {
    fn computed_style(&self, node: &NodeRef<'_>) -> Result<ComputedStyle> {
        let mut style = ComputedStyle::default();
        if dom::class_tokens(node).iter().any(|c| c == "offscreen") {
            style.display = "none".into();
        }
        Ok(style)
    }
}

struct BrokenOracle;

impl StyleOracle for BrokenOracle {
    fn computed_style(&self, _node: &NodeRef<'_>) -> Result<ComputedStyle> {
        Err(Error::StyleComputation("no style engine".into()))
    }
}

#[test]
fn raw_text_tier_splits_on_blank_lines() {
    let html = "<html><body>First block of body text<br><br>Second block of body text</body></html>";
    let result = ExtractionContext::new(0, html, options()).extract();

    assert_eq!(result.strategy, ExtractionStrategy::RawText);
    assert_eq!(
        paragraph_texts(&result.nodes),
        vec!["First block of body text", "Second block of body text"]
    );
}

#[test]
fn raw_text_tier_drops_short_blocks() {
    let html = "<html><body>Short one<br><br>A block long enough to keep<br><br>tiny</body></html>";
    let result = ExtractionContext::new(0, html, options()).extract();
    assert_eq!(paragraph_texts(&result.nodes), vec!["A block long enough to keep"]);
}

#[test]
fn raw_text_tier_runs_after_readability_finds_nothing() {
    let html = "<html><body>Loose text block number one<br><br>Loose text block number two</body></html>";
    let result = ExtractionContext::new(0, html, Options::default())
        .with_readability(Some(Box::new(NoArticle)))
        .extract();
    assert_eq!(result.strategy, ExtractionStrategy::RawText);
    assert_eq!(result.node_count(), 2);
}

#[test]
fn readability_article_is_walked_with_page_rules() {
    let html = "<html><head><title>Page</title></head><body><p>Lonely paragraph.</p></body></html>";
    let article = r#"<div><h2>Reader heading</h2><nav><p>Should be skipped.</p></nav>
        <p>Reader paragraph one.</p><ul><li>item</li></ul></div>"#;
    let result = ExtractionContext::new(0, html, Options::default())
        .with_readability(Some(Box::new(ArticleFrom(article))))
        .extract();

    assert_eq!(result.strategy, ExtractionStrategy::Readability);
    assert_eq!(result.node_count(), 3);
    assert_eq!(result.metadata.title, "Page");
}

#[test]
fn readability_is_not_consulted_when_walk_is_rich_enough() {
    let html = "<body><h1>Heading text</h1><p>Paragraph one text.</p><p>Paragraph two text.</p></body>";
    let article = "<div><p>a1 text</p><p>a2 text</p><p>a3 text</p><p>a4 text</p></div>";
    let result = ExtractionContext::new(0, html, Options::default())
        .with_readability(Some(Box::new(ArticleFrom(article))))
        .extract();
    assert_eq!(result.strategy, ExtractionStrategy::DirectWalk);
    assert_eq!(result.node_count(), 3);
}

#[test]
fn custom_style_oracle_controls_visibility() {
    let html = r#"<body><p>Visible paragraph text.</p><p class="offscreen">Offscreen paragraph text.</p></body>"#;
    let result = ExtractionContext::new(0, html, options())
        .with_style_oracle(Box::new(ClassHidingOracle))
        .extract();
    assert_eq!(paragraph_texts(&result.nodes), vec!["Visible paragraph text."]);
}

#[test]
fn style_failures_fail_open() {
    let html = r#"<body><p>First paragraph text.</p><p style="display:none">Second paragraph text.</p></body>"#;
    let result = ExtractionContext::new(0, html, options())
        .with_style_oracle(Box::new(BrokenOracle))
        .extract();
    assert_eq!(result.node_count(), 2);
}

#[test]
fn context_exposes_frame_and_document() {
    let ctx = ExtractionContext::new(7, "<body><p>Frame paragraph text.</p></body>", options());
    assert_eq!(ctx.frame_id(), 7);
    assert_eq!(ctx.document().select("p").length(), 1);
    assert_eq!(ctx.extract().origin_frame_id, 7);
}

#[test]
fn stage_machine_terminal_state() {
    assert!(!ExtractionStage::Init.is_terminal());
    assert!(ExtractionStage::Done.is_terminal());
}

#[cfg(feature = "readability")]
#[test]
fn default_readability_never_loses_direct_walk_content() {
    let html = "<html><head><title>Doc</title></head><body><p>Only one paragraph of text.</p></body></html>";
    let result = page_distill::extract(html);
    assert!(!result.is_empty());
}
