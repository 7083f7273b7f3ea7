//! CLI that reads HTML from stdin and writes the extracted content to stdout.
//!
//! Usage: `extract_stdin [--url URL] [--format json|markdown|html] [--notes]
//! [--no-toc] [--no-images] [--save]`
//!
//! With `--save` the rendered document is written to
//! `<suggested filename>.<ext>` in the current directory instead.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use page_distill::frames::{Arbiter, HtmlFrameHost};
use page_distill::render::{self, RenderOptions};
use page_distill::summary::{self, Notes};
use page_distill::{ExtractionResult, Options};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Markdown,
    Html,
}

impl Format {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

#[derive(Debug)]
struct Args {
    url: Option<String>,
    format: Format,
    notes: bool,
    render: RenderOptions,
    save: bool,
}

fn usage() -> &'static str {
    "usage: extract_stdin [--url URL] [--format json|markdown|html] [--notes] [--no-toc] [--no-images] [--save]"
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        url: None,
        format: Format::Json,
        notes: false,
        render: RenderOptions::default(),
        save: false,
    };

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--url" => args.url = Some(argv.next().ok_or("--url needs a value")?),
            "--format" => {
                let value = argv.next().ok_or("--format needs a value")?;
                args.format = Format::parse(&value).ok_or_else(|| format!("unknown format: {value}"))?;
            }
            "--notes" => args.notes = true,
            "--no-toc" => args.render.include_toc = false,
            "--no-images" => args.render.include_images = false,
            "--save" => args.save = true,
            "-h" | "--help" => return Err(usage().to_string()),
            other => return Err(format!("unknown argument: {other}\n{}", usage())),
        }
    }

    Ok(args)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a Notes>,
}

fn render_output(result: &ExtractionResult, notes: Option<&Notes>, args: &Args) -> String {
    match args.format {
        Format::Json => serde_json::to_string_pretty(&JsonOutput { result, notes }).unwrap_or_default(),
        Format::Markdown => render::markdown::render(result, notes, &args.render),
        Format::Html => render::html::render(result, notes, &args.render),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let mut html = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut html) {
        eprintln!("Failed to read from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let options = Options {
        url: args.url.clone(),
        ..Options::default()
    };
    let host = HtmlFrameHost::single(html, options);

    let result = match Arbiter::default().run(&host).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let notes = args.notes.then(|| summary::analyze(&result.nodes));
    let output = render_output(&result, notes.as_ref(), &args);

    if args.save {
        let path = format!(
            "{}.{}",
            render::suggested_filename(&result.metadata.title),
            args.format.extension()
        );
        if let Err(e) = fs::write(&path, output) {
            eprintln!("Failed to write {path}: {e}");
            return ExitCode::FAILURE;
        }
        tracing::info!(path = %path, nodes = result.node_count(), "saved");
        println!("{path}");
    } else {
        let mut stdout = io::stdout().lock();
        if writeln!(stdout, "{output}").is_err() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
