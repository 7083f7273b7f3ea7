//! Metadata extraction module.
//!
//! Builds the [`PageMetadata`] attached to every extraction result from
//! Open Graph tags, the `<title>` element and link relations.

pub mod meta_tags;

use chrono::Local;
use dom_query::Document;

use crate::dom;
use crate::result::PageMetadata;
use crate::Options;

pub use meta_tags::{examine_meta, MetaTags};

/// Title used when a page declares none.
pub const UNTITLED: &str = "Untitled";

/// Extract page metadata from a document.
///
/// - title: `og:title`, then `<title>`, then [`UNTITLED`]
/// - description: `og:description`, then `<meta name="description">`
/// - date: `Options::extraction_date`, else today (local time)
/// - canonical URL: `Options::url`, then `link[rel=canonical]`, then `og:url`
#[must_use]
pub fn build_metadata(doc: &Document, opts: &Options) -> PageMetadata {
    let meta = examine_meta(doc);

    let title = meta
        .og_title
        .or_else(|| title_element(doc))
        .unwrap_or_else(|| UNTITLED.to_string());

    let description = meta.og_description.or(meta.description).unwrap_or_default();

    let canonical_url = opts
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .or_else(|| canonical_link(doc))
        .or(meta.og_url)
        .unwrap_or_default();

    let date = opts
        .extraction_date
        .unwrap_or_else(|| Local::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();

    PageMetadata {
        title,
        canonical_url,
        date,
        description,
    }
}

fn title_element(doc: &Document) -> Option<String> {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| dom::normalize_text(&node.text()))
        .filter(|t| !t.is_empty())
}

fn canonical_link(doc: &Document) -> Option<String> {
    doc.select(r#"link[rel="canonical"]"#)
        .attr("href")
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}
