use std::io::Write;
use std::process::{Command, Stdio};

use rs_boilerpipe::{extract, Error, ExtractorKind, Options, TextDocument};

const DOCUMENT: &str = r#"{
  "title": "Budget passes after long night | Example Times",
  "blocks": [
    {"text": "Home Politics Business Sport", "offset": 0, "num_words": 4, "num_words_in_anchor_text": 4, "tag_level": 2},
    {"text": "Budget passes after long night", "offset": 3, "num_words": 5, "tag_level": 3, "labels": ["de.l3s.boilerpipe/HEADING"]},
    {"text": "Lawmakers approved the budget shortly before dawn, ending weeks of negotiation.", "offset": 6, "num_words": 60, "tag_level": 3},
    {"text": "The plan raises spending on schools and roads while trimming defence.", "offset": 7, "num_words": 55, "tag_level": 3},
    {"text": "Privacy Terms Contact", "offset": 10, "num_words": 3, "num_words_in_anchor_text": 3, "tag_level": 2}
  ]
}"#;

fn parse(json: &str) -> TextDocument {
    match TextDocument::from_json(json) {
        Ok(doc) => doc,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn json_document_extracts_article() {
    let mut doc = parse(DOCUMENT);
    assert_eq!(doc.title(), Some("Budget passes after long night | Example Times"));

    match extract(&mut doc) {
        Ok(result) => {
            assert!(result.content_text.starts_with("Budget passes after long night\nLawmakers approved"));
            assert!(result.content_text.ends_with("trimming defence."));
            assert!(!result.content_text.contains("Privacy"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn processed_document_serializes_classification() {
    let mut doc = parse(DOCUMENT);
    if let Err(err) = extract(&mut doc) {
        panic!("expected Ok(_), got Err({err:?})");
    }
    let json = match doc.to_json() {
        Ok(json) => json,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    let reparsed = parse(&json);
    assert_eq!(reparsed, doc);
    assert!(json.contains("\"offset_end\":7"));
}

#[test]
fn inconsistent_blocks_are_rejected() {
    let anchors = r#"{"blocks":[{"text":"x","offset":0,"num_words":2,"num_words_in_anchor_text":3}]}"#;
    assert!(matches!(TextDocument::from_json(anchors), Err(Error::Serialization(_))));

    let order = r#"{"blocks":[{"text":"a","offset":4,"num_words":1},{"text":"b","offset":4,"num_words":1}]}"#;
    assert!(matches!(TextDocument::from_json(order), Err(Error::InvalidBlock(_))));

    assert!(matches!(TextDocument::from_json("{not json"), Err(Error::Serialization(_))));
}

#[test]
fn options_load_from_partial_json() {
    match Options::from_json(r#"{"extractor":"largest-content","keep_everything_fallback":true}"#) {
        Ok(options) => {
            assert_eq!(options.extractor, ExtractorKind::LargestContent);
            assert!(options.keep_everything_fallback);
            assert!(!options.include_boilerplate);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

fn run_cli(args: &[&str], input: &[u8]) -> std::process::Output {
    let mut child = match Command::new(env!("CARGO_BIN_EXE_extract_stdin"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => panic!("failed to spawn extract_stdin: {err}"),
    };
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(err) = stdin.write_all(input) {
            panic!("failed to write stdin: {err}");
        }
    }
    match child.wait_with_output() {
        Ok(output) => output,
        Err(err) => panic!("failed to wait for extract_stdin: {err}"),
    }
}

#[test]
fn cli_prints_json_result() {
    let output = run_cli(&["article"], DOCUMENT.as_bytes());
    assert!(output.status.success());

    let value: serde_json::Value = match serde_json::from_slice(&output.stdout) {
        Ok(value) => value,
        Err(err) => panic!("expected JSON output, got {err}"),
    };
    let content = value["content"].as_str().unwrap_or_default();
    assert!(content.contains("Lawmakers approved"));
    assert_eq!(value["used_fallback"], serde_json::Value::Bool(false));
}

#[test]
fn cli_rejects_unknown_extractor() {
    let output = run_cli(&["readability"], DOCUMENT.as_bytes());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown extractor: readability"));
}

#[test]
fn cli_reports_unreadable_input_once() {
    let output = run_cli(&[], &[0xff, 0xfe, 0x00]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("I/O error").count(), 1, "stderr: {stderr}");
}
