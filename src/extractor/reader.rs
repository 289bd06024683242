use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;
use tracing::debug;

use crate::extractor::model::{Segment, SegmentKind};
use crate::source::{Document, SourceError};

/// Main-content containers, most specific first.
const CONTENT_SELECTORS: [&str; 3] = ["#mw-content-text", ".mw-parser-output", "body"];

const BLOCK_ELEMENTS: &str = "p, h1, h2, h3, h4, h5, h6, li, td, th";

/// Elements whose text never counts as content.
const SKIPPED_TAGS: [&str; 3] = ["script", "style", "noscript"];

const TITLE_SEPARATORS: [&str; 2] = ["---", " - "];

static CONTENT_REGIONS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    CONTENT_SELECTORS
        .iter()
        .map(|css| (*css, Selector::parse(css).unwrap()))
        .collect()
});

static BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(BLOCK_ELEMENTS).unwrap());

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// The part of a document treated as main content.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub element: ElementRef<'a>,
    /// Selector that matched, `None` for the whole-document fallback.
    pub selector: Option<&'static str>,
}

pub fn parse(document: &Document) -> Result<Html, SourceError> {
    if document.markup.trim().is_empty() {
        return Err(SourceError::Parse {
            source_id: document.source_id.clone(),
            reason: "document has no markup".to_string(),
        });
    }

    let html = Html::parse_document(&document.markup);
    if !html.errors.is_empty() {
        debug!(
            source = %document.source_id,
            errors = html.errors.len(),
            "markup parsed with recoverable errors"
        );
    }
    Ok(html)
}

pub fn locate(html: &Html) -> Region<'_> {
    for (css, selector) in CONTENT_REGIONS.iter() {
        if let Some(element) = html.select(selector).next()
            && !flatten_text(element).trim().is_empty()
        {
            return Region {
                element,
                selector: Some(*css),
            };
        }
    }

    Region {
        element: html.root_element(),
        selector: None,
    }
}

/// Block-level content nodes under `region`, in document order. Nested matches (a
/// paragraph inside a list item) each produce their own segment.
pub fn segments(region: Region<'_>) -> Vec<Segment> {
    region
        .element
        .select(&BLOCK_SELECTOR)
        .filter_map(|element| {
            let kind = SegmentKind::from_tag(element.value().name())?;
            Some(Segment::new(kind, flatten_text(element)))
        })
        .collect()
}

pub fn title(html: &Html) -> Option<Segment> {
    let element = html.select(&TITLE_SELECTOR).next()?;
    let text = flatten_text(element).trim().to_string();
    (!text.is_empty()).then(|| Segment::new(SegmentKind::Title, text))
}

/// Drops the site-name tail of a page title (`煤气灯效应 - 维基百科`).
pub fn title_head(title: &str) -> &str {
    TITLE_SEPARATORS
        .iter()
        .find_map(|sep| title.split_once(sep).map(|(head, _)| head))
        .unwrap_or(title)
        .trim()
}

/// Splits node text on sentence ends and line breaks.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['。', '\n'])
}

pub fn flatten_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_text(element, &mut text);
    text
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if SKIPPED_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_text(child, out);
                }
            }
            _ => {}
        }
    }
}
