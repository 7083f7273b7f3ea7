//! Visibility Oracle
//!
//! Decides whether an element is effectively visible. Style evaluation goes
//! through the [`StyleOracle`] trait so a host with a real style engine can
//! supply computed styles; the default [`InlineStyleOracle`] evaluates what a
//! static document carries (inline `style`, the `hidden` attribute, and
//! display-none utility classes). A hidden utility class is ignored when the
//! same element carries a breakpoint display class such as `md:block`, since
//! such content is only hidden on small screens.
//!
//! Checks are best-effort and fail open: when style computation errors the
//! element counts as visible.

use dom_query::NodeRef;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{HIDDEN_CLASS_TOKENS, RESPONSIVE_DISPLAY_CLASS};

/// Opacity below which an element counts as invisible.
pub const MIN_VISIBLE_OPACITY: f64 = 0.01;

/// The subset of computed style the visibility check reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: f64,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: String::new(),
            visibility: "visible".to_string(),
            opacity: 1.0,
        }
    }
}

impl ComputedStyle {
    /// False if display is `none`, visibility is `hidden`, or opacity < 0.01.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.display != "none" && self.visibility != "hidden" && self.opacity >= MIN_VISIBLE_OPACITY
    }
}

/// Source of computed styles for elements.
pub trait StyleOracle: Send + Sync {
    /// Computed style of `node`, or `Error::StyleComputation` when it cannot
    /// be evaluated.
    fn computed_style(&self, node: &NodeRef<'_>) -> Result<ComputedStyle>;
}

/// Style oracle for static documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleOracle;

impl StyleOracle for InlineStyleOracle {
    fn computed_style(&self, node: &NodeRef<'_>) -> Result<ComputedStyle> {
        let mut style = ComputedStyle::default();

        if dom::get_attribute(node, "hidden").is_some() || has_hiding_class(node) {
            style.display = "none".to_string();
        }

        if let Some(inline) = dom::get_attribute(node, "style") {
            apply_declarations(&mut style, &inline)?;
        }

        Ok(style)
    }
}

/// True if a hidden utility class applies without a breakpoint override.
fn has_hiding_class(node: &NodeRef<'_>) -> bool {
    let classes: Vec<String> = dom::class_tokens(node)
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    classes.iter().any(|c| HIDDEN_CLASS_TOKENS.contains(&c.as_str()))
        && !classes.iter().any(|c| RESPONSIVE_DISPLAY_CLASS.is_match(c))
}

/// Apply `prop: value` declarations in order; later ones win.
fn apply_declarations(style: &mut ComputedStyle, declarations: &str) -> Result<()> {
    for declaration in declarations.split(';') {
        let Some((prop, value)) = declaration.split_once(':') else {
            continue;
        };
        let prop = prop.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        let value = value.trim_end_matches("!important").trim();

        match prop.as_str() {
            "display" => style.display = value.to_string(),
            "visibility" => style.visibility = value.to_string(),
            "opacity" => style.opacity = parse_opacity(value)?,
            _ => {}
        }
    }
    Ok(())
}

fn parse_opacity(value: &str) -> Result<f64> {
    let parsed = if let Some(percent) = value.strip_suffix('%') {
        percent.trim().parse::<f64>().map(|p| p / 100.0)
    } else {
        value.parse::<f64>()
    };
    parsed.map_err(|_| Error::StyleComputation(format!("unparsable opacity `{value}`")))
}

/// Whether `node` is effectively visible according to `oracle`.
///
/// Style computation failures are swallowed and the node counts as visible.
#[must_use]
pub fn is_visible(node: &NodeRef<'_>, oracle: &dyn StyleOracle) -> bool {
    match oracle.computed_style(node) {
        Ok(style) => style.is_visible(),
        Err(err) => {
            tracing::trace!("visibility check failed open: {err}");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn visible(html: &str) -> bool {
        let doc = parse(html);
        let node = *doc.select("#t").nodes().first().unwrap();
        is_visible(&node, &InlineStyleOracle)
    }

    #[test]
    fn plain_element_is_visible() {
        assert!(visible(r#"<div id="t">x</div>"#));
    }

    #[test]
    fn display_none_is_hidden() {
        assert!(!visible(r#"<div id="t" style="display: none">x</div>"#));
        assert!(!visible(r#"<div id="t" style="color:red; DISPLAY:NONE !important">x</div>"#));
    }

    #[test]
    fn visibility_hidden_is_hidden() {
        assert!(!visible(r#"<div id="t" style="visibility:hidden">x</div>"#));
    }

    #[test]
    fn near_zero_opacity_is_hidden() {
        assert!(!visible(r#"<div id="t" style="opacity:0">x</div>"#));
        assert!(!visible(r#"<div id="t" style="opacity:0.005">x</div>"#));
        assert!(visible(r#"<div id="t" style="opacity:0.5">x</div>"#));
        assert!(!visible(r#"<div id="t" style="opacity:0%">x</div>"#));
    }

    #[test]
    fn later_declaration_wins() {
        assert!(visible(r#"<div id="t" style="display:none; display:block">x</div>"#));
    }

    #[test]
    fn hidden_attribute_and_utility_class() {
        assert!(!visible(r#"<div id="t" hidden>x</div>"#));
        assert!(!visible(r#"<div id="t" class="card d-none">x</div>"#));
        assert!(visible(r#"<div id="t" hidden style="display:block">x</div>"#));
    }

    #[test]
    fn breakpoint_display_class_overrides_hidden_class() {
        assert!(visible(r#"<div id="t" class="hidden md:block">x</div>"#));
        assert!(visible(r#"<div id="t" class="d-none d-lg-flex">x</div>"#));
        assert!(!visible(r#"<div id="t" class="hidden md:text-lg">x</div>"#));
        assert!(!visible(r#"<div id="t" class="md:block" hidden>x</div>"#));
    }

    #[test]
    fn malformed_opacity_fails_open() {
        let doc = parse(r#"<div id="t" style="opacity: banana">x</div>"#);
        let node = *doc.select("#t").nodes().first().unwrap();
        assert!(matches!(
            InlineStyleOracle.computed_style(&node),
            Err(Error::StyleComputation(_))
        ));
        assert!(is_visible(&node, &InlineStyleOracle));
    }

    struct BrokenOracle;

    impl StyleOracle for BrokenOracle {
        fn computed_style(&self, _node: &NodeRef<'_>) -> Result<ComputedStyle> {
            Err(Error::StyleComputation("detached element".into()))
        }
    }

    #[test]
    fn oracle_errors_never_hide_content() {
        let doc = parse(r#"<div id="t" style="display:none">x</div>"#);
        let node = *doc.select("#t").nodes().first().unwrap();
        assert!(is_visible(&node, &BrokenOracle));
    }
}
