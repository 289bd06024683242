use std::fs;

use crate::extractor::{ExtractionMode, extract};
use crate::source::{Document, SourceError};

fn fixture_document(name: &str) -> Document {
    let path = format!("src/extractor/tests/fixtures/{name}");
    let markup = fs::read_to_string(&path).expect("Failed to read test fixture");
    Document::new(path, "煤气灯效应", markup)
}

#[test]
fn test_extract_pure_chinese_sentences() {
    let document = fixture_document("gaslighting.html");
    let entries = extract(&document, ExtractionMode::PureChinese).unwrap();

    assert_eq!(
        entries,
        vec![
            "【标题】煤气灯效应",
            "施虐者通过否认事实让受害者怀疑自己的记忆和判断",
            "煤气灯效应是一种心理操纵手段",
            "施虐者通过否认事实让受害者怀疑自己的记忆和判断",
            "这一名称源自一九四四年的同名电影",
            "施虐者会公然撒谎并否认说过的话",
            "受害者逐渐失去对现实的判断能力",
            "受害者察觉到不对劲但选择忽视",
        ]
    );
}

#[test]
fn test_extract_chinese_nodes() {
    let document = fixture_document("gaslighting.html");
    let entries = extract(&document, ExtractionMode::Chinese).unwrap();

    assert_eq!(entries[0], "【标题】煤气灯效应 - 维基百科，自由的百科全书");
    assert_eq!(
        entries[1],
        "煤气灯效应（英语：Gaslighting）是一种心理操纵手段。施虐者通过否认事实让受害者怀疑自己的记忆和判断。"
    );
    assert_eq!(entries.len(), 6);
    assert!(entries.contains(&"受害者逐渐失去对现实的判断能力".to_string()));
}

#[test]
fn test_extract_skips_navigation_and_categories() {
    let document = fixture_document("gaslighting.html");
    for mode in [ExtractionMode::Chinese, ExtractionMode::PureChinese] {
        let entries = extract(&document, mode).unwrap();
        assert!(entries.iter().all(|e| !e.contains("导航")));
        assert!(entries.iter().all(|e| !e.contains("分类")));
        assert!(entries.iter().all(|e| !e.contains("wgPageName")));
        assert!(entries.iter().all(|e| !e.contains('[')));
    }
}

#[test]
fn test_extract_drops_urls_and_english() {
    let document = fixture_document("gaslighting.html");
    for mode in [ExtractionMode::Chinese, ExtractionMode::PureChinese] {
        let entries = extract(&document, mode).unwrap();
        assert!(entries.iter().all(|e| !e.contains("https://")));
        assert!(entries.iter().all(|e| !e.contains("Manipulation")));
    }
}

#[test]
fn test_extract_english_page_yields_nothing() {
    let document = fixture_document("empty.html");
    assert!(extract(&document, ExtractionMode::Chinese).unwrap().is_empty());
    assert!(extract(&document, ExtractionMode::PureChinese).unwrap().is_empty());
}

#[test]
fn test_extract_blank_document_is_parse_failure() {
    let document = Document::new("blank.html", "未知概念", "   ");
    let err = extract(&document, ExtractionMode::PureChinese).unwrap_err();
    assert!(matches!(err, SourceError::Parse { ref source_id, .. } if source_id == "blank.html"));
}

#[test]
fn test_malformed_html() {
    let markup = "<html><head><title>破损页面测试标题</title><body><p>未闭合的段落标签内容<div>更多的内容在这里";
    let document = Document::new("broken.html", "未知概念", markup);

    let entries = extract(&document, ExtractionMode::Chinese).unwrap();
    assert_eq!(entries[0], "【标题】破损页面测试标题");
    assert!(entries.iter().any(|e| e.contains("未闭合的段落标签内容")));
}

#[test]
fn test_mixed_sentence_node_keeps_clean_sentences() {
    let markup = "<body><p>The gaslighting 煤气灯效应。受害者往往会陷入长期的自我怀疑。</p></body>";
    let document = Document::new("mixed.html", "煤气灯效应", markup);

    let entries = extract(&document, ExtractionMode::PureChinese).unwrap();
    assert_eq!(entries, vec!["受害者往往会陷入长期的自我怀疑"]);
}

#[test]
fn test_lenient_entries_must_exceed_three_chars() {
    let markup = "<body><p>心理学</p><p>心理学家</p></body>";
    let document = Document::new("short.html", "未知概念", markup);

    let entries = extract(&document, ExtractionMode::Chinese).unwrap();
    assert_eq!(entries, vec!["心理学家"]);
}

#[test]
fn test_strict_entries_must_exceed_five_chars() {
    let markup = "<body><p>心理学研究。认知心理学家</p></body>";
    let document = Document::new("short.html", "未知概念", markup);

    let entries = extract(&document, ExtractionMode::PureChinese).unwrap();
    assert_eq!(entries, vec!["认知心理学家"]);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::{Purity, clean, is_meaningful};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(markup in ".*") {
            let document = Document::new("fuzz.html", "未知概念", markup);
            let _ = extract(&document, ExtractionMode::Chinese);
            let _ = extract(&document, ExtractionMode::PureChinese);
        }

        #[test]
        fn test_punctuation_and_digits_never_meaningful(
            text in "[0-9 \\t\\-_=.,;:!?()\\[\\]。，、；：！？…]{0,40}",
        ) {
            prop_assert!(!is_meaningful(&text, Purity::Lenient));
            prop_assert!(!is_meaningful(&text, Purity::Strict));
        }

        #[test]
        fn test_few_chinese_chars_never_strict(
            text in "[心理学操纵]{0,4}[0-9 ，。a-z]{0,12}",
        ) {
            prop_assert!(!is_meaningful(&text, Purity::Strict));
        }

        #[test]
        fn test_urls_never_meaningful(
            head in "[心理学是一门研究行为的学科]{0,20}",
            host in "[a-z]{1,10}\\.[a-z]{2,3}",
            tail in "[心理学条目]{0,10}",
        ) {
            let text = format!("{head}https://{host}{tail}");
            prop_assert!(!is_meaningful(&text, Purity::Lenient));
            prop_assert!(!is_meaningful(&text, Purity::Strict));
        }

        #[test]
        fn test_clean_is_idempotent(line in ".*") {
            if let Some(once) = clean(&line) {
                prop_assert_eq!(clean(&once), Some(once));
            }
        }
    }
}
