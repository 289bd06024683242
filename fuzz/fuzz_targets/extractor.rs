#![no_main]

use libfuzzer_sys::fuzz_target;

use glean::extractor::{ExtractionMode, clean, extract};
use glean::report::clean_report_text;
use glean::source::Document;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let markup = String::from_utf8_lossy(data).to_string();

    let document = Document::new("fuzz.html", "未知概念", markup.clone());

    // The extractor should never panic regardless of input
    let _ = extract(&document, ExtractionMode::Chinese);
    let _ = extract(&document, ExtractionMode::PureChinese);

    for line in markup.lines() {
        if let Some(once) = clean(line) {
            assert_eq!(clean(&once), Some(once));
        }
    }
    let _ = clean_report_text(&markup);
});
