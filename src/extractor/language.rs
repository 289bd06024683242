const CJK_UNIFIED_START: char = '\u{4E00}';
const CJK_UNIFIED_END: char = '\u{9FFF}';

/// True for characters in the CJK Unified Ideographs block.
pub fn is_chinese(c: char) -> bool {
    (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&c)
}

pub fn chinese_char_count(text: &str) -> usize {
    text.chars().filter(|c| is_chinese(*c)).count()
}

pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(is_chinese)
}
