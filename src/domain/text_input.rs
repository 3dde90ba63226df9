//! 输入文本规范化
//!
//! 把多行自由文本整理成去重、保序、限长的 keyphrase 列表；
//! 标签列表按同样的规则整理

use std::collections::HashSet;

use super::value_objects::{Label, TextLine};

/// 默认最多处理的行数
pub const DEFAULT_MAX_LINES: usize = 5;

/// 默认最多保留的标签数
pub const DEFAULT_MAX_LABELS: usize = 3;

/// 规范化结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub items: Vec<T>,
    /// 是否因超过上限而被截断
    pub truncated: bool,
}

impl<T> Normalized<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// 保序去重，丢弃空项，截断到 `limit`
fn dedup_capped<'a, T, I, F>(items: I, limit: usize, make: F) -> Normalized<T>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&'a str) -> Option<T>,
{
    let mut seen = HashSet::new();
    let mut kept: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(*item))
        .filter_map(make)
        .collect();

    let truncated = kept.len() > limit;
    if truncated {
        kept.truncate(limit);
    }

    Normalized {
        items: kept,
        truncated,
    }
}

/// 对输入文本进行规范化
///
/// 1. 按 `\n` 切分（不做 trim）
/// 2. 保序去重，保留首次出现
/// 3. 丢弃空行
/// 4. 超过 `max_lines` 时只保留前 `max_lines` 行
pub fn normalize_lines(raw_text: &str, max_lines: usize) -> Normalized<TextLine> {
    dedup_capped(raw_text.split('\n'), max_lines, TextLine::new)
}

/// 对候选标签进行规范化（规则同 [`normalize_lines`]）
pub fn normalize_labels<S: AsRef<str>>(labels: &[S], max_labels: usize) -> Normalized<Label> {
    dedup_capped(labels.iter().map(|l| l.as_ref()), max_labels, Label::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strs(lines: &Normalized<TextLine>) -> Vec<&str> {
        lines.items.iter().map(|l| l.as_str()).collect()
    }

    #[test]
    fn test_dedup_and_empty_filter() {
        let raw = "Hanoi is the capital of Vietnam.\nHanoi is the capital of Vietnam.\n";
        let lines = normalize_lines(raw, 5);
        assert_eq!(as_strs(&lines), vec!["Hanoi is the capital of Vietnam."]);
        assert!(!lines.truncated);
    }

    #[test]
    fn test_preserves_first_occurrence_order() {
        let raw = "b\na\n\nb\nc\na";
        let lines = normalize_lines(raw, 5);
        assert_eq!(as_strs(&lines), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_truncates_to_max_lines() {
        let raw = "1\n2\n2\n3\n\n4\n5\n6\n7";
        let lines = normalize_lines(raw, 5);
        assert_eq!(as_strs(&lines), vec!["1", "2", "3", "4", "5"]);
        assert!(lines.truncated);
    }

    #[test]
    fn test_exactly_max_lines_is_not_truncated() {
        let lines = normalize_lines("1\n2\n3", 3);
        assert_eq!(lines.len(), 3);
        assert!(!lines.truncated);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let lines = normalize_lines(" padded \n padded", 5);
        assert_eq!(as_strs(&lines), vec![" padded ", " padded"]);
    }

    #[test]
    fn test_all_empty_input() {
        assert!(normalize_lines("", 5).is_empty());
        assert!(normalize_lines("\n\n\n", 5).is_empty());
    }

    #[test]
    fn test_output_invariants_hold_for_mixed_inputs() {
        let inputs = [
            "x\ny\nx\ny\nz\n\nw\nv\nu",
            "\n\nonly\n\nonly\n",
            "a\r\nb\na\r\n",
            "one",
        ];
        for raw in inputs {
            for max_lines in 1..=6 {
                let lines = normalize_lines(raw, max_lines);
                assert!(lines.len() <= max_lines);
                let unique: HashSet<_> = lines.items.iter().collect();
                assert_eq!(unique.len(), lines.len());
                assert!(lines.items.iter().all(|l| !l.as_str().is_empty()));

                // 截断结果等于完整去重序列的前缀
                let full = normalize_lines(raw, usize::MAX);
                assert_eq!(lines.items[..], full.items[..lines.len()]);
                assert_eq!(lines.truncated, full.len() > max_lines);
            }
        }
    }

    #[test]
    fn test_normalize_labels() {
        let labels = normalize_labels(&["Positive", "", "Positive", "Negative"], 3);
        let names: Vec<&str> = labels.items.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, vec!["Positive", "Negative"]);
        assert!(!labels.truncated);
    }

    #[test]
    fn test_normalize_labels_truncates() {
        let labels = normalize_labels(&["a", "b", "c", "d"], DEFAULT_MAX_LABELS);
        assert_eq!(labels.len(), 3);
        assert!(labels.truncated);
    }
}
