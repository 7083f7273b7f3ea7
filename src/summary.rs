//! Heuristic notes: summary, key points and term definitions.
//!
//! Purely local text heuristics over the extracted content nodes; no model
//! or network is involved.

use std::collections::HashSet;

use dom_query::Document;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::patterns::{BOLD_TERM, MARKUP_TAG, SENTENCE, SIGNAL_PHRASES};
use crate::result::ContentNode;

const MIN_CONSIDERED_LEN: usize = 60;
const MIN_SUMMARY_PARAGRAPH_LEN: usize = 80;
const SUMMARY_PARAGRAPHS: usize = 2;
const MAX_SUMMARY_LEN: usize = 600;
const MAX_KEY_POINTS: usize = 8;
const MAX_DEFINITIONS: usize = 10;
const MAX_DFN_DEFINITION_LEN: usize = 200;

/// A term and what the page says it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

/// Notes derived from a page's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notes {
    pub summary: String,
    pub key_points: Vec<String>,
    pub definitions: Vec<Definition>,
}

impl Notes {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.key_points.is_empty() && self.definitions.is_empty()
    }
}

/// Analyze content nodes into [`Notes`].
#[must_use]
pub fn analyze(nodes: &[ContentNode]) -> Notes {
    let paragraphs: Vec<&str> = nodes
        .iter()
        .filter_map(|node| match node {
            ContentNode::Paragraph { text, .. } => Some(text.trim()),
            _ => None,
        })
        .filter(|text| text.chars().count() > MIN_CONSIDERED_LEN)
        .collect();

    Notes {
        summary: build_summary(&paragraphs),
        key_points: key_points(&paragraphs),
        definitions: definitions(nodes),
    }
}

fn build_summary(paragraphs: &[&str]) -> String {
    let joined = paragraphs
        .iter()
        .filter(|p| p.chars().count() > MIN_SUMMARY_PARAGRAPH_LEN)
        .take(SUMMARY_PARAGRAPHS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if joined.chars().count() > MAX_SUMMARY_LEN {
        let mut cut: String = joined.chars().take(MAX_SUMMARY_LEN).collect();
        cut.push('…');
        cut
    } else {
        joined
    }
}

fn key_points(paragraphs: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut points = Vec::new();

    for paragraph in paragraphs {
        let mut sentences: Vec<&str> = SENTENCE.find_iter(paragraph).map(|m| m.as_str()).collect();
        if sentences.is_empty() {
            sentences.push(paragraph);
        }

        for sentence in sentences {
            let lower = sentence.to_lowercase();
            if SIGNAL_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
                let clean = sentence.trim();
                let len = clean.chars().count();
                if len > 20 && len < 300 && seen.insert(clean.to_string()) {
                    points.push(clean.to_string());
                }
            }
            if points.len() >= MAX_KEY_POINTS {
                return points;
            }
        }
    }

    points
}

fn strip_definition_lead(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == ':' || c == '–' || c == '—' || c.is_whitespace())
}

fn definitions(nodes: &[ContentNode]) -> Vec<Definition> {
    let mut defs: Vec<Definition> = Vec::new();

    for node in nodes {
        let ContentNode::Paragraph { raw_markup, .. } = node else {
            continue;
        };
        if raw_markup.trim().is_empty() {
            continue;
        }

        let fragment = Document::from(format!("<div>{raw_markup}</div>"));

        for dfn in fragment.select("dfn").nodes() {
            let term = dom::normalize_text(&dfn.text());
            let parent = dfn
                .parent()
                .map(|p| dom::normalize_text(&p.text()))
                .unwrap_or_default();
            if !term.is_empty() && parent.chars().count() > term.chars().count() {
                let rest = parent.replacen(&term, "", 1);
                let definition: String = strip_definition_lead(&rest).chars().take(MAX_DFN_DEFINITION_LEN).collect();
                defs.push(Definition { term, definition });
            }
        }

        for abbr in fragment.select("abbr[title]").nodes() {
            let term = dom::normalize_text(&abbr.text());
            let title = dom::get_attribute(abbr, "title").unwrap_or_default();
            if !term.is_empty() && !title.trim().is_empty() {
                defs.push(Definition { term, definition: title.trim().to_string() });
            }
        }

        for caps in BOLD_TERM.captures_iter(raw_markup) {
            let (Some(whole), Some(open), Some(term), Some(close)) = (caps.get(0), caps.get(1), caps.get(2), caps.get(3)) else {
                continue;
            };
            if !open.as_str().eq_ignore_ascii_case(close.as_str()) {
                continue;
            }
            let term = term.as_str().trim();
            if !term.starts_with(|c: char| c.is_uppercase()) && term.split(' ').count() > 4 {
                continue;
            }
            let after = MARKUP_TAG.replace_all(&raw_markup[whole.end()..], "");
            let first_clause = after.trim().split(['.', '!', '?']).next().unwrap_or_default();
            let definition = strip_definition_lead(first_clause).trim();
            if definition.chars().count() > 10 {
                defs.push(Definition { term: term.to_string(), definition: definition.to_string() });
            }
        }

        if defs.len() >= MAX_DEFINITIONS {
            break;
        }
    }

    let mut seen = HashSet::new();
    defs.retain(|d| seen.insert(d.term.clone()));
    defs.truncate(MAX_DEFINITIONS);
    defs
}
