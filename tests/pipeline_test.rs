use rs_boilerpipe::labels;
use rs_boilerpipe::{extract, extract_with_options, ExtractorKind, Options, TextBlock, TextDocument};

const NAV: &str = "Home News Sport Weather Contact";
const HEADLINE: &str = "Mars Rover Finds Water";
const P1: &str = "The rover drilled into the crater floor on Tuesday, and the samples it returned contain water ice.";
const P2: &str = "Scientists at the mission centre said the finding changes plans for the next landing site.";
const P3: &str = "Further measurements are scheduled for the coming weeks, weather permitting.";
const FOOTER: &str = "Copyright Example Media Group All rights reserved";

fn block(text: &str, offset: usize, words: usize, anchor: usize, level: usize) -> TextBlock {
    match TextBlock::builder(text, offset)
        .num_words(words)
        .num_words_in_anchor_text(anchor)
        .tag_level(level)
        .build()
    {
        Ok(b) => b,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

/// Navigation, headline, three article paragraphs (120 words) and a footer.
///
/// The producer dropped empty blocks around the headline, so offsets have
/// gaps there.
fn news_blocks(p3: &str) -> Vec<TextBlock> {
    let mut headline = block(HEADLINE, 3, 3, 0, 3);
    headline.add_label(labels::HEADING);
    headline.add_label(labels::H1);
    vec![
        block(NAV, 0, 5, 5, 2),
        headline,
        block(P1, 6, 40, 0, 3),
        block(P2, 7, 40, 0, 3),
        block(p3, 8, 40, 0, 3),
        block(FOOTER, 11, 8, 8, 2),
    ]
}

fn run(kind: ExtractorKind, doc: &mut TextDocument) -> String {
    let options = Options {
        extractor: kind,
        ..Options::default()
    };
    match extract_with_options(doc, &options) {
        Ok(result) => result.content_text,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn article_extractor_keeps_paragraphs_only() {
    let mut doc = TextDocument::new(news_blocks(P3));

    let result = extract(&mut doc);
    match result {
        Ok(result) => {
            assert_eq!(result.content_text, format!("{P1}\n{P2}\n{P3}"));
            assert!(result.changed);
            assert_eq!(result.statistics.num_words, 120);
            assert_eq!(result.statistics.num_blocks, 1);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }

    let content: Vec<&TextBlock> = doc.content_blocks().collect();
    assert_eq!(content.len(), 1);
    assert!(content[0].has_label(labels::VERY_LIKELY_CONTENT));
    assert_eq!((content[0].offset_start(), content[0].offset_end()), (6, 8));
}

#[test]
fn article_extractor_expands_to_matching_title() {
    let mut doc = TextDocument::with_title(format!("{HEADLINE} | Example News"), news_blocks(P3));
    let content = run(ExtractorKind::Article, &mut doc);
    assert_eq!(content, format!("{HEADLINE}\n{P1}\n{P2}\n{P3}"));
    assert!(doc.blocks()[0].has_label(labels::TITLE));
}

#[test]
fn article_extractor_stops_at_comment_section() {
    let mut blocks = news_blocks(P3);
    blocks.pop();
    blocks.push(block("Reader comments", 9, 2, 0, 3));
    blocks.push(block("First! Great article, I loved every word of it and will share it with all of my friends.", 10, 40, 0, 3));
    let mut doc = TextDocument::new(blocks);

    let content = run(ExtractorKind::Article, &mut doc);
    assert_eq!(content, format!("{P1}\n{P2}\n{P3}"));
}

#[test]
fn article_sentences_drops_lines_without_clauses() {
    let mut doc = TextDocument::new(news_blocks("Share this story"));
    let content = run(ExtractorKind::ArticleSentences, &mut doc);
    assert_eq!(content, format!("{P1}\n{P2}"));
}

#[test]
fn default_extractor_uses_densities() {
    let mut doc = TextDocument::new(vec![
        block(NAV, 0, 5, 5, 2),
        block(P1, 1, 40, 0, 3),
        block(P2, 2, 41, 0, 3),
        block(FOOTER, 3, 8, 8, 2),
    ]);
    let content = run(ExtractorKind::Default, &mut doc);
    assert_eq!(content, format!("{P1}\n{P2}"));
}

#[test]
fn largest_content_extractor_keeps_one_fused_block() {
    let mut doc = TextDocument::new(vec![
        block(NAV, 0, 5, 5, 2),
        block(P1, 3, 40, 0, 3),
        block(P2, 4, 41, 0, 3),
        block(P3, 8, 20, 0, 3),
        block(FOOTER, 9, 8, 8, 2),
    ]);
    let content = run(ExtractorKind::LargestContent, &mut doc);
    assert_eq!(content, format!("{P1}\n{P2}"));

    let very_likely = doc
        .blocks()
        .iter()
        .filter(|b| b.has_label(labels::VERY_LIKELY_CONTENT))
        .count();
    assert_eq!(very_likely, 1);
}

#[test]
fn keep_everything_extractor_keeps_everything() {
    let mut doc = TextDocument::new(news_blocks(P3));
    let content = run(ExtractorKind::KeepEverything, &mut doc);
    assert_eq!(content, [NAV, HEADLINE, P1, P2, P3, FOOTER].join("\n"));
}

#[test]
fn include_boilerplate_returns_the_rest() {
    let mut doc = TextDocument::new(vec![
        block(NAV, 0, 5, 5, 2),
        block(P1, 1, 40, 0, 3),
        block(P2, 2, 41, 0, 3),
        block(FOOTER, 3, 8, 8, 2),
    ]);
    let options = Options {
        extractor: ExtractorKind::Default,
        include_boilerplate: true,
        ..Options::default()
    };
    match extract_with_options(&mut doc, &options) {
        Ok(result) => assert_eq!(result.boilerplate_text.as_deref(), Some(format!("{NAV}\n{FOOTER}").as_str())),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn shared_extractors_run_concurrently() {
    let template = TextDocument::new(news_blocks(P3));
    let expected = format!("{P1}\n{P2}\n{P3}");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut doc = template.clone();
                scope.spawn(move || run(ExtractorKind::Article, &mut doc))
            })
            .collect();
        for handle in handles {
            match handle.join() {
                Ok(content) => assert_eq!(content, expected),
                Err(_) => panic!("extraction thread panicked"),
            }
        }
    });
}
