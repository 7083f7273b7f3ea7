//! Print-ready HTML rendering.
//!
//! A standalone document with an embedded stylesheet; open it in a browser
//! and print to PDF. All page-derived text is escaped.

use std::fmt::Write as _;

use crate::result::{ContentNode, ExtractionResult};
use crate::summary::Notes;

use super::{slugify, RenderOptions};

const STYLESHEET: &str = r#"
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: system-ui, sans-serif; font-size: 11pt; line-height: 1.75; color: #1a1a2e; background: #fff; }
    .page-wrapper { max-width: 740px; margin: 0 auto; padding: 48px 52px; }
    .doc-header { border-bottom: 2px solid #e0e7ff; padding-bottom: 20px; margin-bottom: 32px; }
    .doc-title { font-size: 22pt; font-weight: 700; line-height: 1.2; margin-bottom: 8px; }
    .doc-meta { font-size: 8.5pt; color: #6b7280; }
    .doc-meta a { color: #6366f1; text-decoration: none; }
    .notes { background: #f0f4ff; border: 1px solid #c7d2fe; border-radius: 10px; padding: 20px 24px; margin: 24px 0; }
    .notes h2 { font-size: 11pt; color: #6366f1; margin-bottom: 12px; }
    .notes h3 { font-size: 9pt; text-transform: uppercase; letter-spacing: .06em; color: #818cf8; margin: 12px 0 6px; }
    .toc { background: #f8fafc; border-left: 3px solid #6366f1; padding: 16px 20px; margin: 24px 0; }
    .toc-title { font-size: 9pt; font-weight: 700; text-transform: uppercase; color: #6366f1; margin-bottom: 10px; }
    .toc a { color: #374151; text-decoration: none; font-size: 10pt; }
    h1 { font-size: 18pt; margin: 28px 0 10px; }
    h2 { font-size: 14pt; margin: 24px 0 8px; border-bottom: 1px solid #e2e8f0; }
    h3 { font-size: 12pt; margin: 18px 0 6px; }
    h4, h5, h6 { font-size: 10.5pt; margin: 12px 0 4px; }
    p { margin: 0 0 12px; }
    ul, ol { padding-left: 22px; margin: 0 0 12px; }
    pre { background: #0f172a; color: #e2e8f0; padding: 14px 18px; border-radius: 8px; margin: 0 0 14px; overflow-x: auto; }
    code { font-family: ui-monospace, monospace; font-size: 9pt; }
    blockquote { border-left: 3px solid #a5b4fc; padding: 6px 16px; margin: 0 0 12px; color: #4b5563; font-style: italic; }
    img { max-width: 100%; height: auto; margin: 12px 0; }
    table { width: 100%; border-collapse: collapse; margin: 0 0 16px; font-size: 10pt; }
    th { background: #f1f5f9; padding: 8px 12px; text-align: left; border: 1px solid #e2e8f0; }
    td { padding: 7px 12px; border: 1px solid #e2e8f0; }
    hr { border: none; border-top: 1px solid #e2e8f0; margin: 24px 0; }
    .source-footer { margin-top: 36px; padding-top: 16px; border-top: 1px solid #e2e8f0; font-size: 8.5pt; color: #9ca3af; }
    @media print {
      .page-wrapper { padding: 20px 24px; max-width: 100%; }
      pre { white-space: pre-wrap; word-break: break-all; }
      a { color: inherit; }
    }
"#;

/// Escape HTML special characters
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render `result` as a standalone HTML document.
#[must_use]
pub fn render(result: &ExtractionResult, notes: Option<&Notes>, options: &RenderOptions) -> String {
    let meta = &result.metadata;
    let title = html_escape(&meta.title);
    let url = html_escape(&meta.canonical_url);

    let mut body = String::new();
    let _ = write!(
        body,
        "<div class=\"doc-header\"><h1 class=\"doc-title\">{title}</h1>\
         <div class=\"doc-meta\"><a href=\"{url}\">{url}</a> &middot; {}</div></div>\n",
        html_escape(&meta.date)
    );

    if let Some(notes) = notes.filter(|n| !n.is_empty()) {
        body.push_str(&notes_block(notes));
        body.push('\n');
    }

    let headings: Vec<(u8, &str)> = result.headings().collect();
    if options.include_toc && headings.len() > 1 {
        body.push_str(&table_of_contents(&headings));
        body.push('\n');
    }

    for node in &result.nodes {
        if let Some(html) = node_to_html(node, options.include_images) {
            body.push_str(&html);
            body.push('\n');
        }
    }

    let _ = write!(
        body,
        "<div class=\"source-footer\">Source: <a href=\"{url}\">{title}</a> &middot; saved {}</div>",
        html_escape(&meta.date)
    );

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n\
         <style>{STYLESHEET}</style>\n</head>\n<body>\n<div class=\"page-wrapper\">\n{body}\n</div>\n</body>\n</html>\n"
    )
}

fn notes_block(notes: &Notes) -> String {
    let mut out = String::from("<div class=\"notes\"><h2>Notes</h2>");
    if !notes.summary.is_empty() {
        let _ = write!(out, "<h3>Summary</h3><p>{}</p>", html_escape(&notes.summary));
    }
    if !notes.key_points.is_empty() {
        out.push_str("<h3>Key Points</h3><ul>");
        for point in &notes.key_points {
            let _ = write!(out, "<li>{}</li>", html_escape(point));
        }
        out.push_str("</ul>");
    }
    if !notes.definitions.is_empty() {
        out.push_str("<h3>Key Terms</h3><ul>");
        for def in &notes.definitions {
            let _ = write!(
                out,
                "<li><strong>{}</strong>: {}</li>",
                html_escape(&def.term),
                html_escape(&def.definition)
            );
        }
        out.push_str("</ul>");
    }
    out.push_str("</div>");
    out
}

fn table_of_contents(headings: &[(u8, &str)]) -> String {
    let items: String = headings
        .iter()
        .map(|(level, text)| {
            let indent = if *level > 1 {
                format!(" style=\"margin-left:{}px\"", u32::from(*level - 1) * 14)
            } else {
                String::new()
            };
            format!("<li{indent}><a href=\"#{}\">{}</a></li>", slugify(text), html_escape(text))
        })
        .collect();
    format!("<div class=\"toc\"><div class=\"toc-title\">Contents</div><ul>{items}</ul></div>")
}

fn node_to_html(node: &ContentNode, include_images: bool) -> Option<String> {
    match node {
        ContentNode::Heading { level, text } => Some(format!(
            "<h{level} id=\"{}\">{}</h{level}>",
            slugify(text),
            html_escape(text)
        )),
        ContentNode::Paragraph { text, .. } => Some(format!("<p>{}</p>", html_escape(text))),
        ContentNode::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let items: String = items.iter().map(|i| format!("<li>{}</li>", html_escape(i))).collect();
            Some(format!("<{tag}>{items}</{tag}>"))
        }
        ContentNode::Code { language, code } => {
            let class = language
                .as_deref()
                .map(|l| format!(" class=\"language-{}\"", html_escape(l)))
                .unwrap_or_default();
            Some(format!("<pre><code{class}>{}</code></pre>", html_escape(code)))
        }
        ContentNode::Blockquote { text } => Some(format!("<blockquote>{}</blockquote>", html_escape(text))),
        ContentNode::Image { src, alt } => include_images.then(|| {
            format!(
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                html_escape(src),
                html_escape(alt)
            )
        }),
        ContentNode::Table { rows } => {
            let (header, body) = rows.split_first()?;
            let head: String = header.iter().map(|c| format!("<th>{}</th>", html_escape(c))).collect();
            let body: String = body
                .iter()
                .map(|row| {
                    let cells: String = row.iter().map(|c| format!("<td>{}</td>", html_escape(c))).collect();
                    format!("<tr>{cells}</tr>")
                })
                .collect();
            Some(format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"))
        }
        ContentNode::HorizontalRule => Some("<hr>".to_string()),
    }
}
