use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::extractor::language::{chinese_char_count, contains_chinese, is_chinese};

const MIN_SEGMENT_CHARS: usize = 3;
const MIN_STRICT_CHINESE_CHARS: usize = 5;
const MAX_FOREIGN_RATIO: f64 = 0.1;

/// How strictly a segment has to read as Chinese prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purity {
    /// Any Chinese character, as long as the text is not pure digits/Latin/punctuation.
    Lenient,
    /// At least five Chinese characters, at most 10% foreign characters, no English words.
    Strict,
}

impl Purity {
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Whole-text shapes that never carry content.
static NOISE_SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^[\s\-_=.,;:!?()\[\]]*$",
        r"^[0-9\s\-_=.,;:!?()\[\]]*$",
        r"^[a-zA-Z\s\-_=.,;:!?()\[\]]*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Characters tolerated next to Chinese text in strict mode.
static ALLOWED_NON_CHINESE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\s\d\[\]()（）。，、；：！？“”‘’"'…—·\-_=.,;:!?《》【】]"#).unwrap()
});

static URL_SIGNATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)https?://", r"(?i)www\.", r"(?i)\.com"]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

static ENGLISH_SIGNATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)[a-z]{3,}",
        r"(?i)\b(?:the|and|of|to|in|for|with|by|from|at|on)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

pub fn is_meaningful(text: &str, purity: Purity) -> bool {
    let text = text.trim();
    if text.chars().count() < MIN_SEGMENT_CHARS {
        return false;
    }

    if is_noise_shape(text) {
        return false;
    }

    let passes_ratio = match purity {
        Purity::Lenient => contains_chinese(text),
        Purity::Strict => has_enough_chinese(text),
    };
    if !passes_ratio {
        return false;
    }

    if URL_SIGNATURES.iter().any(|re| re.is_match(text)) {
        return false;
    }

    if purity.is_strict() && ENGLISH_SIGNATURES.iter().any(|re| re.is_match(text)) {
        return false;
    }

    true
}

fn is_noise_shape(text: &str) -> bool {
    NOISE_SHAPES.iter().any(|re| re.is_match(text))
}

fn has_enough_chinese(text: &str) -> bool {
    if chinese_char_count(text) < MIN_STRICT_CHINESE_CHARS {
        return false;
    }

    let remaining = ALLOWED_NON_CHINESE.replace_all(text, "");
    let foreign = remaining.chars().filter(|c| !is_chinese(*c)).count();
    let total = text.chars().count();

    (foreign as f64) <= total as f64 * MAX_FOREIGN_RATIO
}
