//! Output renderers.
//!
//! Turn an [`ExtractionResult`](crate::ExtractionResult) (plus optional
//! [`Notes`](crate::summary::Notes)) into a portable document:
//!
//! - [`markdown::render`]: frontmatter, notes, contents, body, source footer
//! - [`html::render`]: standalone print-ready HTML

pub mod html;
pub mod markdown;

/// Name used when a page title yields no usable filename.
pub const DEFAULT_FILENAME: &str = "page-distill-notes";

const MAX_FILENAME_LEN: usize = 80;

/// Renderer switches.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit a table of contents when the page has enough headings.
    ///
    /// Default: `true`
    pub include_toc: bool,

    /// Emit image nodes.
    ///
    /// Default: `true`
    pub include_images: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_toc: true,
            include_images: true,
        }
    }
}

/// Heading anchor: lowercase, punctuation dropped, whitespace runs to `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        } else if ch.is_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        }
    }

    slug
}

/// Filesystem-safe name derived from a page title (no extension).
#[must_use]
pub fn suggested_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') && !c.is_control())
        .collect();

    let name: String = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .take(MAX_FILENAME_LEN)
        .collect();

    if name.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        name
    }
}
