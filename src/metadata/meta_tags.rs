//! HTML Meta Tag Extraction
//!
//! Collects the Open Graph and standard `<meta>` values page metadata is
//! built from. The first non-empty value for each key wins.

use dom_query::{Document, NodeRef};

use crate::dom;

/// Values read from `<meta>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_url: Option<String>,
    pub description: Option<String>,
}

fn set_once(slot: &mut Option<String>, content: &str) {
    if slot.is_none() {
        *slot = Some(content.to_string());
    }
}

/// Examine every `<meta>` tag, keyed by both `name` and `property`.
#[must_use]
pub fn examine_meta(doc: &Document) -> MetaTags {
    let mut result = MetaTags::default();

    for node in doc.select("meta").nodes() {
        let content = dom::get_attribute(node, "content").unwrap_or_default();
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        for key in meta_keys(node) {
            match key.as_str() {
                "og:title" => set_once(&mut result.og_title, content),
                "og:description" => set_once(&mut result.og_description, content),
                "og:url" => set_once(&mut result.og_url, content),
                "description" => set_once(&mut result.description, content),
                _ => {}
            }
        }
    }

    result
}

/// Lowercased non-empty `name` and `property` values of a `<meta>` element.
fn meta_keys(node: &NodeRef<'_>) -> Vec<String> {
    ["name", "property"]
        .into_iter()
        .filter_map(|attr| dom::get_attribute(node, attr))
        .map(|value| value.trim().to_lowercase())
        .filter(|key| !key.is_empty())
        .collect()
}
