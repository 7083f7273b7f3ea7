//! Markdown rendering.
//!
//! Produces notes-app friendly Markdown: YAML frontmatter, an optional notes
//! block, a table of contents when the page has more than one heading, the
//! content nodes, and a source footer.

use crate::result::{ContentNode, ExtractionResult, PageMetadata};
use crate::summary::Notes;

use super::{slugify, RenderOptions};

/// Characters that have special meaning in Markdown link text.
const MARKDOWN_SPECIAL_CHARS: &[char] = &['\\', '*', '_', '[', ']', '<', '>'];

/// Escape Markdown special characters in text content.
///
/// # Examples
///
/// ```
/// use page_distill::render::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("*not italic*"), r"\*not italic\*");
/// assert_eq!(escape_markdown("my_variable_name"), r"my\_variable\_name");
/// ```
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&ch) {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}

fn escape_frontmatter(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', " ")
}

fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render `result` as a Markdown document.
#[must_use]
pub fn render(result: &ExtractionResult, notes: Option<&Notes>, options: &RenderOptions) -> String {
    let mut parts = vec![frontmatter(&result.metadata)];

    if let Some(notes) = notes.filter(|n| !n.is_empty()) {
        parts.push(notes_block(notes));
    }

    let headings: Vec<(u8, &str)> = result.headings().collect();
    if options.include_toc && headings.len() > 1 {
        parts.push(table_of_contents(&headings));
    }

    parts.extend(result.nodes.iter().filter_map(|node| node_to_markdown(node, options.include_images)));

    parts.push(format!(
        "\n---\n*Source: [{}]({})*  \n*Saved on {}*",
        escape_markdown(&result.metadata.title),
        result.metadata.canonical_url,
        result.metadata.date
    ));

    parts.join("\n")
}

fn frontmatter(meta: &PageMetadata) -> String {
    let mut lines = vec![
        "---".to_string(),
        format!("title: \"{}\"", escape_frontmatter(&meta.title)),
        format!("source: \"{}\"", escape_frontmatter(&meta.canonical_url)),
        format!("date: {}", meta.date),
    ];
    if !meta.description.is_empty() {
        lines.push(format!("description: \"{}\"", escape_frontmatter(&meta.description)));
    }
    lines.push("tags: [page-distill]".to_string());
    lines.push("---".to_string());
    lines.join("\n")
}

fn notes_block(notes: &Notes) -> String {
    let mut parts = vec!["\n## Notes\n".to_string()];

    if !notes.summary.is_empty() {
        parts.push("### Summary\n".to_string());
        parts.push(format!("{}\n", notes.summary));
    }
    if !notes.key_points.is_empty() {
        parts.push("### Key Points\n".to_string());
        parts.extend(notes.key_points.iter().map(|p| format!("- {p}")));
        parts.push(String::new());
    }
    if !notes.definitions.is_empty() {
        parts.push("### Key Terms\n".to_string());
        parts.extend(notes.definitions.iter().map(|d| format!("**{}**: {}", d.term, d.definition)));
        parts.push(String::new());
    }

    parts.push("---\n".to_string());
    parts.join("\n")
}

fn table_of_contents(headings: &[(u8, &str)]) -> String {
    let mut lines = vec!["\n## Contents\n".to_string()];
    for (level, text) in headings {
        let indent = "  ".repeat(usize::from(level.saturating_sub(1)));
        lines.push(format!("{indent}- [{}](#{})", escape_markdown(text), slugify(text)));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn node_to_markdown(node: &ContentNode, include_images: bool) -> Option<String> {
    match node {
        ContentNode::Heading { level, text } => Some(format!("\n{} {text}\n", "#".repeat(usize::from(*level)))),
        ContentNode::Paragraph { text, .. } => {
            let clean = crate::dom::normalize_text(text);
            (!clean.is_empty()).then(|| format!("\n{clean}\n"))
        }
        ContentNode::List { ordered, items } => {
            let lines: Vec<String> = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item = crate::dom::normalize_text(item);
                    if *ordered {
                        format!("{}. {item}", i + 1)
                    } else {
                        format!("- {item}")
                    }
                })
                .collect();
            Some(format!("\n{}\n", lines.join("\n")))
        }
        ContentNode::Code { language, code } => {
            let fence = code_fence(code);
            Some(format!(
                "\n{fence}{}\n{code}\n{fence}\n",
                language.as_deref().unwrap_or_default()
            ))
        }
        ContentNode::Blockquote { text } => {
            let lines: Vec<String> = text.lines().map(|l| format!("> {l}")).collect();
            Some(format!("\n{}\n", lines.join("\n")))
        }
        ContentNode::Image { src, alt } => include_images.then(|| {
            let alt = if alt.is_empty() { "image" } else { alt.as_str() };
            format!("\n![{}]({src})\n", escape_markdown(alt))
        }),
        ContentNode::Table { rows } => table(rows),
        ContentNode::HorizontalRule => Some("\n---\n".to_string()),
    }
}

/// Backtick fence longer than any backtick run inside `code`, at least three.
fn code_fence(code: &str) -> String {
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or_default();
    "`".repeat(longest_run.max(2) + 1)
}

/// GFM table; the first row is the header.
fn table(rows: &[Vec<String>]) -> Option<String> {
    let (header, body) = rows.split_first()?;
    let line = |row: &[String]| {
        let cells: Vec<String> = row.iter().map(|c| escape_table_cell(c)).collect();
        format!("| {} |", cells.join(" | "))
    };

    let mut lines = vec![line(header.as_slice()), format!("| {} |", vec!["---"; header.len()].join(" | "))];
    lines.extend(body.iter().map(|row| line(row.as_slice())));
    Some(format!("\n{}\n", lines.join("\n")))
}
