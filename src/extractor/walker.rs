//! Structural Walker
//!
//! Converts a content root into the ordered [`ContentNode`] model. Element
//! children are visited in document order; noisy and invisible subtrees are
//! skipped, leaf blocks emit at most one node, and containers are descended
//! into until `Options::max_walk_depth` is exceeded.

use dom_query::{NodeRef, Selection};
use url::Url;

use crate::dom;
use crate::patterns::{CODE_LANGUAGE_CLASS, NOISE_TAGS};
use crate::result::ContentNode;
use crate::selector::noise::is_noisy;
use crate::selector::visibility::{is_visible, StyleOracle};
use crate::url_utils::create_absolute_url;
use crate::Options;

use super::tags::{classify, BlockKind};

/// Everything a walk needs besides the tree itself.
pub struct WalkContext<'a> {
    pub oracle: &'a dyn StyleOracle,
    pub options: &'a Options,
    /// Base for resolving relative image sources.
    pub base_url: Option<&'a Url>,
}

/// Walk `root` from depth 0 and return the content nodes.
#[must_use]
pub fn walk_root(root: &NodeRef<'_>, ctx: &WalkContext<'_>) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    walk(root, 0, ctx, &mut nodes);
    nodes
}

/// Append the content nodes under `root` to `out`.
///
/// Returns immediately when `depth` exceeds the configured limit.
pub fn walk(root: &NodeRef<'_>, depth: usize, ctx: &WalkContext<'_>, out: &mut Vec<ContentNode>) {
    if depth > ctx.options.max_walk_depth {
        return;
    }

    for child in dom::element_children(root) {
        let tag = dom::tag_name(&child);
        if NOISE_TAGS.contains(&tag.as_str()) || is_noisy(&child) || !is_visible(&child, ctx.oracle) {
            continue;
        }

        let kind = classify(&child);
        if kind.is_leaf() {
            if let Some(node) = emit(&child, kind, ctx) {
                out.push(node);
            }
        } else {
            walk(&child, depth + 1, ctx, out);
        }
    }
}

/// The node a leaf block yields, if it passes its emission threshold.
fn emit(node: &NodeRef<'_>, kind: BlockKind, ctx: &WalkContext<'_>) -> Option<ContentNode> {
    let opts = ctx.options;
    match kind {
        BlockKind::Heading(level) => {
            let text = dom::visible_text(node, ctx.oracle);
            (text.chars().count() > opts.min_heading_len).then_some(ContentNode::Heading { level, text })
        }
        BlockKind::Paragraph => {
            let text = dom::visible_text(node, ctx.oracle);
            (text.chars().count() > opts.min_paragraph_len).then(|| ContentNode::Paragraph {
                text,
                raw_markup: dom::inner_html(node),
            })
        }
        BlockKind::Preformatted => preformatted(node),
        BlockKind::StandaloneCode => {
            let code = dom::raw_text(node).trim().to_string();
            (code.chars().count() > opts.min_inline_code_len).then_some(ContentNode::Code { language: None, code })
        }
        BlockKind::Blockquote => {
            let text = dom::visible_text(node, ctx.oracle);
            (!text.is_empty()).then_some(ContentNode::Blockquote { text })
        }
        BlockKind::List { ordered } => {
            let items: Vec<String> = dom::element_children(node)
                .iter()
                .filter(|li| dom::tag_name(li) == "li")
                .map(|li| dom::visible_text(li, ctx.oracle))
                .filter(|t| !t.is_empty())
                .collect();
            (!items.is_empty()).then_some(ContentNode::List { ordered, items })
        }
        BlockKind::Table => {
            let rows = table_rows(node, ctx.oracle);
            (rows.len() > 1).then_some(ContentNode::Table { rows })
        }
        BlockKind::Rule => Some(ContentNode::HorizontalRule),
        BlockKind::Image => image(node, ctx),
        BlockKind::Container => None,
    }
}

fn preformatted(pre: &NodeRef<'_>) -> Option<ContentNode> {
    let code_el = dom::query_first(pre, "code");
    let language = code_el
        .as_ref()
        .and_then(code_language)
        .or_else(|| code_language(pre));

    let code = dom::raw_text(code_el.as_ref().unwrap_or(pre)).trim().to_string();
    if code.is_empty() {
        return None;
    }
    Some(ContentNode::Code { language, code })
}

/// Language from a `language-*`/`lang-*` class, then `data-language`/`data-lang`.
fn code_language(node: &NodeRef<'_>) -> Option<String> {
    dom::class_tokens(node)
        .iter()
        .find_map(|token| {
            CODE_LANGUAGE_CLASS
                .captures(token)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .or_else(|| dom::get_attribute(node, "data-language"))
        .or_else(|| dom::get_attribute(node, "data-lang"))
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
}

/// Rows of this table only; rows of nested tables are left out.
fn table_rows(table: &NodeRef<'_>, oracle: &dyn StyleOracle) -> Vec<Vec<String>> {
    Selection::from(*table)
        .select("tr")
        .nodes()
        .iter()
        .filter(|tr| owning_table(tr).is_some_and(|t| t.id == table.id))
        .map(|tr| {
            dom::element_children(tr)
                .iter()
                .filter(|cell| matches!(dom::tag_name(cell).as_str(), "th" | "td"))
                .map(|cell| dom::visible_text(cell, oracle))
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect()
}

fn owning_table<'a>(tr: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    tr.ancestors(None).into_iter().find(|anc| dom::tag_name(anc) == "table")
}

fn image(node: &NodeRef<'_>, ctx: &WalkContext<'_>) -> Option<ContentNode> {
    let img = if dom::tag_name(node) == "img" {
        *node
    } else {
        dom::query_first(node, "img")?
    };

    let src = ["src", "data-src"]
        .iter()
        .filter_map(|attr| dom::get_attribute(&img, attr))
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty() && !s.starts_with("data:"))?;

    let alt = dom::get_attribute(&img, "alt")
        .map(|a| dom::normalize_text(&a))
        .filter(|a| !a.is_empty())
        .or_else(|| dom::query_first(node, "figcaption").map(|cap| dom::visible_text(&cap, ctx.oracle)))
        .unwrap_or_default();

    Some(ContentNode::Image {
        src: create_absolute_url(&src, ctx.base_url),
        alt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;
    use crate::selector::visibility::InlineStyleOracle;

    fn walk_html(html: &str) -> Vec<ContentNode> {
        walk_html_with(html, None)
    }

    fn walk_html_with(html: &str, base: Option<&Url>) -> Vec<ContentNode> {
        let doc = parse(html);
        let body = dom::body(&doc).unwrap();
        let options = Options::default();
        let ctx = WalkContext { oracle: &InlineStyleOracle, options: &options, base_url: base };
        walk_root(&body, &ctx)
    }

    #[test]
    fn test_headings_keep_level_and_skip_short() {
        let nodes = walk_html("<h1>Title</h1><h2>A</h2><h4>Deep  section</h4>");
        assert_eq!(
            nodes,
            vec![
                ContentNode::Heading { level: 1, text: "Title".into() },
                ContentNode::Heading { level: 4, text: "Deep section".into() },
            ]
        );
    }

    #[test]
    fn test_paragraph_threshold_and_markup() {
        let nodes = walk_html("<p>short</p><p>Long <b>enough</b> text</p>");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            ContentNode::Paragraph { text, raw_markup } => {
                assert_eq!(text, "Long enough text");
                assert_eq!(raw_markup, "Long <b>enough</b> text");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pre_language_and_line_structure() {
        let nodes = walk_html(
            "<pre><code class=\"hljs language-rust\">fn main() {\n    run();\n}\n</code></pre>",
        );
        assert_eq!(
            nodes,
            vec![ContentNode::Code {
                language: Some("rust".into()),
                code: "fn main() {\n    run();\n}".into(),
            }]
        );
    }

    #[test]
    fn test_pre_language_from_data_attribute_on_pre() {
        let nodes = walk_html(r#"<pre data-lang="sh">ls -la</pre><pre>   </pre>"#);
        assert_eq!(nodes, vec![ContentNode::Code { language: Some("sh".into()), code: "ls -la".into() }]);
    }

    #[test]
    fn test_standalone_code_needs_length() {
        let long = "let value = compute_everything(now);";
        let nodes = walk_html(&format!("<div><code>x = 1</code><code>{long}</code></div>"));
        assert_eq!(nodes, vec![ContentNode::Code { language: None, code: long.into() }]);
    }

    #[test]
    fn test_list_drops_empty_items_and_empty_lists() {
        let nodes = walk_html("<ul><li>one</li><li>  </li><li>two</li></ul><ol><li></li></ol>");
        assert_eq!(
            nodes,
            vec![ContentNode::List { ordered: false, items: vec!["one".into(), "two".into()] }]
        );
    }

    #[test]
    fn test_table_requires_body_rows() {
        let header_only = walk_html("<table><tr><th>A</th><th>B</th></tr><tr><td></td><td> </td></tr></table>");
        assert!(header_only.is_empty());

        let nodes = walk_html("<table><thead><tr><th>A</th><th>B</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>");
        assert_eq!(
            nodes,
            vec![ContentNode::Table {
                rows: vec![vec!["A".into(), "B".into()], vec!["1".into(), "2".into()]],
            }]
        );
    }

    #[test]
    fn test_nested_table_rows_stay_with_inner_table() {
        let nodes = walk_html(
            "<table><tr><td>outer</td></tr><tr><td><table><tr><td>in1</td></tr><tr><td>in2</td></tr></table></td></tr></table>",
        );
        match &nodes[0] {
            ContentNode::Table { rows } => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0], vec!["outer".to_string()]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_images_and_figures() {
        let base = Url::parse("https://example.com/blog/").unwrap();
        let nodes = walk_html_with(
            r#"<img src="a.png" alt="A">
               <figure><img data-src="/b.png"><figcaption>Caption B</figcaption></figure>
               <img src="data:image/gif;base64,R0l">
               <figure><p>no image</p></figure>"#,
            Some(&base),
        );
        assert_eq!(
            nodes,
            vec![
                ContentNode::Image { src: "https://example.com/blog/a.png".into(), alt: "A".into() },
                ContentNode::Image { src: "https://example.com/b.png".into(), alt: "Caption B".into() },
            ]
        );
    }

    #[test]
    fn test_hr_and_blockquote() {
        let nodes = walk_html("<blockquote> Quoted\n words </blockquote><hr><blockquote></blockquote>");
        assert_eq!(
            nodes,
            vec![ContentNode::Blockquote { text: "Quoted words".into() }, ContentNode::HorizontalRule]
        );
    }

    #[test]
    fn test_skips_noise_and_hidden() {
        let nodes = walk_html(
            r#"<nav><p>Navigation paragraph</p></nav>
               <div class="share-bar"><p>Share this story</p></div>
               <div style="display:none"><p>Hidden paragraph</p></div>
               <div><div><p>Kept paragraph</p></div></div>"#,
        );
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0], ContentNode::Paragraph { text, .. } if text == "Kept paragraph"));
    }

    #[test]
    fn test_depth_limit_stops_descent() {
        let nest = |n: usize| format!("{}<p>Buried paragraph</p>{}", "<div>".repeat(n), "</div>".repeat(n));
        assert!(walk_html(&nest(25)).is_empty());
        assert_eq!(walk_html(&nest(15)).len(), 1);
    }

    #[test]
    fn test_leaf_blocks_are_not_descended() {
        let nodes = walk_html("<blockquote><p>Inner paragraph text</p><h2>Inner heading</h2></blockquote>");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], ContentNode::Blockquote { .. }));
    }
}
