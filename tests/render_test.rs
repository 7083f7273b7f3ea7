use chrono::NaiveDate;
use page_distill::render::{html, markdown, suggested_filename, RenderOptions};
use page_distill::summary::analyze;
use page_distill::{extract_with_options, ExtractionResult, Options};

const PAGE: &str = r#"<html><head>
    <title>Ownership &amp; Borrowing | Rust Notes</title>
    <meta property="og:description" content="How Rust manages memory.">
</head><body>
    <nav><a href="/">Home</a><a href="/docs">Docs</a></nav>
    <article class="post-content">
        <h1>Ownership</h1>
        <p><strong>Ownership</strong> is the set of rules that govern how a Rust program manages memory. It is important to understand it before writing larger programs.</p>
        <h2>Borrowing</h2>
        <p>A reference lets you use a value without taking ownership of it. Note that mutable references are exclusive, so only one may exist at a time for any value.</p>
        <pre><code class="language-rust">let s = String::from("hi");
let r = &amp;s;</code></pre>
        <table><tr><th>Kind</th><th>Count</th></tr><tr><td>&amp;T</td><td>many</td></tr></table>
        <img src="/diagram.png" alt="Borrow diagram">
    </article>
</body></html>"#;

fn page() -> ExtractionResult {
    let options = Options {
        url: Some("https://notes.example.com/ownership".into()),
        extraction_date: NaiveDate::from_ymd_opt(2024, 3, 9),
        use_readability_fallback: false,
        ..Options::default()
    };
    extract_with_options(PAGE, &options)
}

#[test]
fn markdown_document_layout() {
    let md = markdown::render(&page(), None, &RenderOptions::default());

    assert!(md.starts_with("---\ntitle: \"Ownership & Borrowing | Rust Notes\"\n"));
    assert!(md.contains("source: \"https://notes.example.com/ownership\""));
    assert!(md.contains("date: 2024-03-09"));
    assert!(md.contains("description: \"How Rust manages memory.\""));
    assert!(md.contains("## Contents"));
    assert!(md.contains("- [Ownership](#ownership)\n  - [Borrowing](#borrowing)"));
    assert!(md.contains("\n# Ownership\n"));
    assert!(md.contains("\n## Borrowing\n"));
    assert!(md.contains("```rust\nlet s = String::from(\"hi\");\nlet r = &s;\n```"));
    assert!(md.contains("| Kind | Count |\n| --- | --- |\n| &T | many |"));
    assert!(md.contains("![Borrow diagram](https://notes.example.com/diagram.png)"));
    assert!(md.contains("*Saved on 2024-03-09*"));
    assert!(!md.contains("Home"));
}

#[test]
fn markdown_with_notes() {
    let result = page();
    let notes = analyze(&result.nodes);
    assert!(!notes.summary.is_empty());
    assert!(notes
        .key_points
        .iter()
        .any(|p| p.contains("important to understand")));
    assert!(notes.definitions.iter().any(|d| d.term == "Ownership"));

    let md = markdown::render(&result, Some(&notes), &RenderOptions::default());
    assert!(md.contains("## Notes"));
    assert!(md.contains("### Key Points"));
    assert!(md.contains("**Ownership**: is the set of rules that govern how a Rust program manages memory"));
}

#[test]
fn html_document_is_standalone_and_escaped() {
    let result = page();
    let notes = analyze(&result.nodes);
    let doc = html::render(&result, Some(&notes), &RenderOptions::default());

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>Ownership &amp; Borrowing | Rust Notes</title>"));
    assert!(doc.contains("<h1 id=\"ownership\">Ownership</h1>"));
    assert!(doc.contains("<pre><code class=\"language-rust\">let s = String::from(&quot;hi&quot;);\nlet r = &amp;s;</code></pre>"));
    assert!(doc.contains("<td>&amp;T</td>"));
    assert!(doc.contains("class=\"notes\""));
    assert!(doc.contains("class=\"toc\""));
}

#[test]
fn render_switches() {
    let opts = RenderOptions {
        include_toc: false,
        include_images: false,
    };
    let result = page();
    let md = markdown::render(&result, None, &opts);
    assert!(!md.contains("## Contents"));
    assert!(!md.contains("!["));

    let doc = html::render(&result, None, &opts);
    assert!(!doc.contains("<img"));
}

#[test]
fn filename_from_title() {
    assert_eq!(suggested_filename(&page().metadata.title), "ownership-&-borrowing-rust-notes");
    assert_eq!(suggested_filename(""), "page-distill-notes");
}
