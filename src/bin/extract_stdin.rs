//! Simple CLI that reads a JSON text-block document from stdin and writes
//! the extraction result as JSON to stdout.
//!
//! Usage: `extract_stdin [EXTRACTOR] [--fallback] [--boilerplate]`
//!
//! `EXTRACTOR` is one of the standard pipeline names (default `article`).
//! Set `RUST_LOG=rs_boilerpipe=debug` to trace the pipeline stages on stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use rs_boilerpipe::{extract_with_options, ExtractorKind, Options, TextDocument};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    boilerplate: Option<String>,
    changed: bool,
    used_fallback: bool,
    num_words: usize,
    num_blocks: usize,
}

fn parse_args() -> rs_boilerpipe::Result<Options> {
    let mut options = Options::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--fallback" => options.keep_everything_fallback = true,
            "--boilerplate" => options.include_boilerplate = true,
            name => options.extractor = name.parse::<ExtractorKind>()?,
        }
    }
    Ok(options)
}

fn run() -> rs_boilerpipe::Result<String> {
    let mut json = String::new();
    io::stdin().read_to_string(&mut json)?;

    let options = parse_args()?;

    let mut doc = TextDocument::from_json(&json)?;
    let result = extract_with_options(&mut doc, &options)?;

    let output = Output {
        content: result.content_text,
        boilerplate: result.boilerplate_text,
        changed: result.changed,
        used_fallback: result.used_fallback,
        num_words: result.statistics.num_words,
        num_blocks: result.statistics.num_blocks,
    };
    Ok(serde_json::to_string(&output)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("extract_stdin: {err}");
            ExitCode::FAILURE
        }
    }
}
