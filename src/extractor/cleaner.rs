use regex::Regex;
use std::sync::LazyLock;

use crate::extractor::model::normalize_whitespace;

const MIN_LINE_CHARS: usize = 3;

/// Prefixes that mark separators and section headings; kept even when short.
const PRESERVED_PREFIXES: [char; 3] = ['=', '-', '📚'];

enum Action {
    /// Drop the line when the trimmed line matches.
    Drop(Regex),
    /// Delete every match.
    Remove(Regex),
    CollapseWhitespace,
    DropShort,
}

struct Rule {
    name: &'static str,
    action: Action,
}

impl Rule {
    fn drop(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            action: Action::Drop(Regex::new(pattern).unwrap()),
        }
    }

    fn remove(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            action: Action::Remove(Regex::new(pattern).unwrap()),
        }
    }

    fn apply(&self, line: String) -> Option<String> {
        match &self.action {
            Action::Drop(re) => (!re.is_match(line.trim())).then_some(line),
            Action::Remove(re) => Some(re.replace_all(&line, "").into_owned()),
            Action::CollapseWhitespace => Some(normalize_whitespace(&line)),
            Action::DropShort => {
                let preserved = line.starts_with(PRESERVED_PREFIXES);
                (preserved || line.chars().count() >= MIN_LINE_CHARS).then_some(line)
            }
        }
    }
}

/// Bracket removal runs before whitespace collapse and the length filter, otherwise a
/// line holding only a marker would be measured before the marker is gone.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::drop("citation-index-line", r"^\d+\.\s*\[\d+\]\s*$"),
        Rule::remove("numeric-citation", r"\[\d+\]"),
        Rule::remove(
            "annotation",
            r"\[(?:citation needed|来源请求|需要引用|编辑|edit)\]",
        ),
        Rule::remove("archive-backup", r"\[页面存档备份[^\[\]]*?\]"),
        Rule::remove("archive", r"\[[^\[\]]*?存档[^\[\]]*?\]"),
        Rule {
            name: "whitespace",
            action: Action::CollapseWhitespace,
        },
        Rule::drop("numbering", r"^[\d.\s]*$"),
        Rule::drop("edit-view-history", r"^[编辑查看历史]+$"),
        Rule::drop("expand-edit", r"^展开.*编$"),
        Rule::drop("collapse-edit", r"^折叠.*编$"),
        Rule::drop("view-talk-edit", r"^查论编"),
        Rule::drop("date-check-notice", r"^请检查.*?日期值"),
        Rule::drop("citation-format-notice", r"^引文格式.*?维护"),
        Rule::drop("bare-date", r"^\([年月日\s\d]+\)$"),
        Rule::drop("category", r"^分类："),
        Rule::drop("tag", r"^标签："),
        Rule {
            name: "short-line",
            action: Action::DropShort,
        },
    ]
});

static LEADING_ORDINAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Strips wiki artifacts from a line, or returns `None` when nothing reportable is left.
///
/// The rule list is re-run until the line stops changing, so a marker uncovered by an
/// earlier removal (`[[1]2]`) is caught as well and `clean(clean(x)) == clean(x)`.
pub fn clean(line: &str) -> Option<String> {
    let mut current = line.to_string();
    loop {
        let next = apply_rules(current.clone())?;
        if next == current {
            return Some(next);
        }
        current = next;
    }
}

fn apply_rules(line: String) -> Option<String> {
    RULES.iter().try_fold(line, |line, rule| {
        let outcome = rule.apply(line);
        if outcome.is_none() {
            tracing::trace!(rule = rule.name, "line dropped");
        }
        outcome
    })
}

/// Cleans one sentence cut from a content node: drops a leading `12.` ordinal, then
/// strips artifacts.
pub fn tidy_sentence(sentence: &str) -> Option<String> {
    let sentence = LEADING_ORDINAL.replace(sentence.trim(), "");
    clean(&sentence)
}
