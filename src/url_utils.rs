//! URL Utility Functions
//!
//! Resolution of image sources and other references against the document's
//! base URL (`<base href>` resolved against the page address).

use dom_query::Document;
use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// With no base, or when resolution fails, the trimmed input is returned.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: Option<&Url>) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    if let (true, Some(url)) = is_absolute_url(url_str) {
        return url.to_string();
    }

    match base.map(|b| b.join(url_str)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => url_str.to_string(),
    }
}

/// Base URL of a document.
///
/// A `<base href>` is resolved against `page_url`; without one the page URL
/// itself is the base. `None` when neither yields an absolute URL.
#[must_use]
pub fn document_base(doc: &Document, page_url: Option<&str>) -> Option<Url> {
    let page = page_url.and_then(|u| Url::parse(u.trim()).ok());

    let base_href = doc
        .select("base[href]")
        .attr("href")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match (base_href, page) {
        (Some(href), Some(page)) => page.join(&href).ok().or(Some(page)),
        (Some(href), None) => Url::parse(&href).ok(),
        (None, page) => page,
    }
}
