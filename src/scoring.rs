//! Element Scorer
//!
//! Computes a "contentfulness" score for a candidate content root: dense,
//! low-link prose scores high, and each structural descendant (paragraph,
//! heading, pre, blockquote, list item) adds a fixed bonus so article bodies
//! beat long sidebars of plain text.
//!
//! ```text
//! score = round(total_len * (1 - link_ratio)) + structural_count * bonus
//! ```
//!
//! Elements with too little text, or whose text is mostly links, score 0.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::link_density::{link_ratio, link_text_len};
use crate::patterns::STRUCTURAL_SELECTOR;
use crate::selector::visibility::StyleOracle;
use crate::Options;

/// The measurements behind a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub total_len: usize,
    pub link_len: usize,
    pub link_ratio: f64,
    pub structural_count: usize,
    pub score: u64,
}

/// Score `node` as a content-root candidate.
#[must_use]
pub fn score(node: &NodeRef<'_>, oracle: &dyn StyleOracle, options: &Options) -> u64 {
    score_breakdown(node, oracle, options).score
}

/// Score `node` and report the intermediate measurements.
#[must_use]
pub fn score_breakdown(node: &NodeRef<'_>, oracle: &dyn StyleOracle, options: &Options) -> ScoreBreakdown {
    let total_len = dom::visible_text_len(node, oracle);
    let mut breakdown = ScoreBreakdown {
        total_len,
        link_len: 0,
        link_ratio: 0.0,
        structural_count: 0,
        score: 0,
    };

    // Too sparse to be an article
    if total_len < options.min_scorable_len {
        return breakdown;
    }

    breakdown.link_len = link_text_len(node, oracle);
    breakdown.link_ratio = link_ratio(breakdown.link_len, total_len);

    // Navigation-dominated
    if breakdown.link_ratio > options.max_link_ratio {
        return breakdown;
    }

    breakdown.structural_count = Selection::from(*node).select(STRUCTURAL_SELECTOR).length();

    let density = (total_len as f64 * (1.0 - breakdown.link_ratio)).round().max(0.0) as u64;
    breakdown.score = density + breakdown.structural_count as u64 * options.structural_bonus;
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;
    use crate::selector::visibility::InlineStyleOracle;

    fn score_of(html: &str) -> ScoreBreakdown {
        let doc = parse(html);
        let node = *doc.select("#t").nodes().first().unwrap();
        score_breakdown(&node, &InlineStyleOracle, &Options::default())
    }

    #[test]
    fn sparse_element_scores_zero() {
        let text = "x".repeat(99);
        let b = score_of(&format!(r#"<div id="t"><p>{text}</p></div>"#));
        assert_eq!(b.total_len, 99);
        assert_eq!(b.score, 0);
    }

    #[test]
    fn link_heavy_element_scores_zero() {
        let link = "l".repeat(70);
        let text = "t".repeat(30);
        let b = score_of(&format!(r##"<div id="t"><a href="#">{link}</a> {text}</div>"##));
        assert!(b.link_ratio > 0.6);
        assert_eq!(b.score, 0);
    }

    #[test]
    fn score_combines_density_and_structure() {
        let text = "a".repeat(100);
        let link = "b".repeat(50);
        // Visible text: "{text} {link} x" -> 153 chars, 50 of them link text.
        let b = score_of(&format!(
            r##"<div id="t"><p>{text} <a href="#">{link}</a></p><h2>x</h2></div>"##
        ));
        assert_eq!(b.total_len, 153);
        assert_eq!(b.link_len, 50);
        assert_eq!(b.structural_count, 2);
        let expected = (153.0_f64 * (1.0 - 50.0 / 153.0)).round() as u64 + 2 * 40;
        assert_eq!(b.score, expected);
    }

    #[test]
    fn hidden_text_does_not_count() {
        let hidden = "h".repeat(500);
        let b = score_of(&format!(
            r#"<div id="t"><p>short</p><p style="display:none">{hidden}</p></div>"#
        ));
        assert_eq!(b.score, 0);
    }
}
