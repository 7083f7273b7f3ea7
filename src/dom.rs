//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: attribute access, element
//! children, and the three text views the extractor needs.
//!
//! - [`visible_text`]: rendered text, whitespace-collapsed (scoring, node text)
//! - [`inner_text`]: rendered text keeping block boundaries as line breaks
//!   (raw-text fallback)
//! - [`raw_text`]: literal text content with `<br>` as newline (code blocks)
//!
//! Traversals use an explicit stack so pathological nesting cannot overflow.

pub use dom_query::{Document, NodeRef, Selection};

use crate::patterns::{NON_RENDERED_TAGS, WHITESPACE_NORMALIZE};
use crate::selector::visibility::{is_visible, StyleOracle};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Clone document
///
/// The clone is re-parsed from serialized markup, so mutations on it never
/// reach the original.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// The `<body>` element, falling back to `<html>` for fragment-like input.
#[must_use]
pub fn body<'a>(doc: &'a Document) -> Option<NodeRef<'a>> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .or_else(|| doc.select("html").nodes().first().copied())
}

// === Node Information ===

/// Lowercase tag name, empty for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(node: &NodeRef) -> Option<String> {
    get_attribute(node, "class")
}

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> Option<String> {
    get_attribute(node, "id")
}

/// Whitespace-separated class tokens.
#[must_use]
pub fn class_tokens(node: &NodeRef) -> Vec<String> {
    class_name(node)
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Inner HTML of an element.
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> String {
    Selection::from(*node).inner_html().to_string()
}

// === Tree Navigation ===

/// Direct element children (text and comment nodes skipped).
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// First descendant matching `selector`, in document order.
#[must_use]
pub fn query_first<'a>(node: &NodeRef<'a>, selector: &str) -> Option<NodeRef<'a>> {
    Selection::from(*node).select(selector).nodes().first().copied()
}

/// True if any ancestor of `node` has the given tag.
#[must_use]
pub fn has_ancestor_tag(node: &NodeRef, tag: &str) -> bool {
    node.ancestors(None).into_iter().any(|anc| tag_name(&anc) == tag)
}

// === Text ===

/// Collapse whitespace runs to one space and trim.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

/// Rendered text of an element, whitespace-normalized.
///
/// Skips non-rendered tags and subtrees the oracle reports invisible.
#[must_use]
pub fn visible_text(node: &NodeRef, oracle: &dyn StyleOracle) -> String {
    normalize_text(&inner_text(node, oracle))
}

/// Number of characters in [`visible_text`].
#[must_use]
pub fn visible_text_len(node: &NodeRef, oracle: &dyn StyleOracle) -> usize {
    visible_text(node, oracle).chars().count()
}

/// Line breaks a block-level tag forces around its content.
fn block_breaks(tag: &str) -> usize {
    match tag {
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => 2,
        "div" | "section" | "article" | "main" | "header" | "footer" | "nav" | "aside"
        | "ul" | "ol" | "li" | "dl" | "dt" | "dd" | "table" | "tr" | "blockquote" | "pre"
        | "figure" | "figcaption" | "address" | "form" | "fieldset" | "hr" | "body" => 1,
        _ => 0,
    }
}

enum Step<'a> {
    Visit(NodeRef<'a>, bool),
    Break(usize),
}

/// Accumulates rendered text, merging adjacent break requests.
#[derive(Default)]
struct TextCollector {
    buf: String,
    pending_breaks: usize,
    pending_space: bool,
}

impl TextCollector {
    fn request_break(&mut self, n: usize) {
        self.pending_breaks = self.pending_breaks.max(n);
    }

    fn line_break(&mut self) {
        self.pending_breaks += 1;
    }

    fn flush_separator(&mut self) {
        if self.buf.is_empty() {
            self.pending_breaks = 0;
            self.pending_space = false;
            return;
        }
        if self.pending_breaks > 0 {
            let trimmed = self.buf.trim_end_matches(' ').len();
            self.buf.truncate(trimmed);
            for _ in 0..self.pending_breaks {
                self.buf.push('\n');
            }
        } else if self.pending_space && !self.buf.ends_with(['\n', ' ']) {
            self.buf.push(' ');
        }
        self.pending_breaks = 0;
        self.pending_space = false;
    }

    fn push_text(&mut self, text: &str, preformatted: bool) {
        if preformatted {
            if text.is_empty() {
                return;
            }
            self.flush_separator();
            self.buf.push_str(text);
            return;
        }

        if text.trim().is_empty() {
            if !text.is_empty() {
                self.pending_space = true;
            }
            return;
        }

        if text.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        self.flush_separator();
        self.buf.push_str(&WHITESPACE_NORMALIZE.replace_all(text.trim(), " "));
        if text.ends_with(char::is_whitespace) {
            self.pending_space = true;
        }
    }

    fn finish(self) -> String {
        self.buf.trim().to_string()
    }
}

/// Rendered text of an element with block boundaries as newlines.
///
/// Paragraphs and headings are separated by a blank line, other blocks by a
/// single newline, `<br>` adds one newline. Whitespace inside `<pre>` is kept.
#[must_use]
pub fn inner_text(node: &NodeRef, oracle: &dyn StyleOracle) -> String {
    let mut out = TextCollector::default();
    let mut stack = vec![Step::Visit(*node, false)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Break(n) => out.request_break(n),
            Step::Visit(current, preformatted) => {
                if current.is_text() {
                    out.push_text(&current.text(), preformatted);
                    continue;
                }
                if !current.is_element() {
                    continue;
                }

                let tag = tag_name(&current);
                if NON_RENDERED_TAGS.contains(&tag.as_str()) || !is_visible(&current, oracle) {
                    continue;
                }
                if tag == "br" {
                    out.line_break();
                    continue;
                }

                let breaks = block_breaks(&tag);
                if breaks > 0 {
                    out.request_break(breaks);
                    stack.push(Step::Break(breaks));
                }
                let preformatted = preformatted || tag == "pre";
                for child in current.children().into_iter().rev() {
                    stack.push(Step::Visit(child, preformatted));
                }
            }
        }
    }

    out.finish()
}

/// Literal text content with `<br>` as newline; script/style text skipped.
#[must_use]
pub fn raw_text(node: &NodeRef) -> String {
    let mut buf = String::new();
    let mut stack = vec![*node];

    while let Some(current) = stack.pop() {
        if current.is_text() {
            buf.push_str(&current.text());
            continue;
        }
        if !current.is_element() {
            continue;
        }
        let tag = tag_name(&current);
        if matches!(tag.as_str(), "script" | "style") {
            continue;
        }
        if tag == "br" {
            buf.push('\n');
            continue;
        }
        for child in current.children().into_iter().rev() {
            stack.push(child);
        }
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::visibility::InlineStyleOracle;

    fn first<'a>(doc: &'a Document, sel: &str) -> NodeRef<'a> {
        *doc.select(sel).nodes().first().unwrap()
    }

    #[test]
    fn test_attributes_and_tag_name() {
        let doc = parse(r#"<div id="main" class="container wide">content</div>"#);
        let div = first(&doc, "div");

        assert_eq!(tag_name(&div), "div");
        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container wide".to_string()));
        assert_eq!(class_tokens(&div), vec!["container", "wide"]);
        assert_eq!(get_attribute(&div, "data-x"), None);
    }

    #[test]
    fn test_element_children_skip_text() {
        let doc = parse("<ul> text <li>1</li> <li>2</li><!-- c --></ul>");
        let ul = first(&doc, "ul");
        assert_eq!(element_children(&ul).len(), 2);
    }

    #[test]
    fn test_has_ancestor_tag() {
        let doc = parse("<pre><code>x</code></pre><p><code>y</code></p>");
        let codes = doc.select("code");
        let nodes = codes.nodes();
        assert!(has_ancestor_tag(&nodes[0], "pre"));
        assert!(!has_ancestor_tag(&nodes[1], "pre"));
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  hello \n\t  world  "), "hello world");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_visible_text_skips_hidden_and_scripts() {
        let doc = parse(
            r#"<div>Shown <span style="display:none">secret</span><script>var x;</script> text</div>"#,
        );
        let div = first(&doc, "div");
        assert_eq!(visible_text(&div, &InlineStyleOracle), "Shown text");
    }

    #[test]
    fn test_inner_text_block_structure() {
        let doc = parse("<div><p>First para</p><p>Second para</p>tail<br><br>after</div>");
        let div = first(&doc, "div");
        assert_eq!(
            inner_text(&div, &InlineStyleOracle),
            "First para\n\nSecond para\n\ntail\n\nafter"
        );
    }

    #[test]
    fn test_inner_text_keeps_pre_whitespace() {
        let doc = parse("<div><pre>a  b\n  c</pre></div>");
        let div = first(&doc, "div");
        assert_eq!(inner_text(&div, &InlineStyleOracle), "a  b\n  c");
    }

    #[test]
    fn test_raw_text_br_as_newline() {
        let doc = parse("<code>line one<br>line two</code>");
        let code = first(&doc, "code");
        assert_eq!(raw_text(&code), "line one\nline two");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let html = format!("{}deep{}", "<div>".repeat(1000), "</div>".repeat(1000));
        let doc = parse(&html);
        let body = body(&doc).unwrap();
        assert_eq!(visible_text(&body, &InlineStyleOracle), "deep");
    }

    #[test]
    fn test_clone_document_is_independent() {
        let doc = parse(r#"<div id="original">content</div>"#);
        let cloned = clone_document(&doc);
        cloned.select("#original").set_attr("id", "cloned");
        assert!(doc.select("#original").exists());
        assert!(cloned.select("#cloned").exists());
    }
}
