//! 提交前置校验

use super::{TaskInputError, TaskKind};
use crate::domain::value_objects::{Label, TextLine};

/// 校验一次提交
///
/// 文本为空总是被拒绝；分类任务还要求至少两个不同的标签
pub fn validate_submission(
    kind: TaskKind,
    lines: &[TextLine],
    labels: &[Label],
) -> Result<(), TaskInputError> {
    if lines.is_empty() {
        return Err(TaskInputError::EmptyInput);
    }

    if kind.uses_labels() {
        match labels.len() {
            0 => return Err(TaskInputError::NoLabels),
            1 => return Err(TaskInputError::SingleLabel),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<TextLine> {
        items.iter().filter_map(|s| TextLine::new(*s)).collect()
    }

    fn labels(items: &[&str]) -> Vec<Label> {
        items.iter().filter_map(|s| Label::new(*s)).collect()
    }

    #[test]
    fn test_empty_text_rejected_for_both_kinds() {
        for kind in TaskKind::ALL {
            assert_eq!(
                validate_submission(kind, &[], &labels(&["a", "b"])),
                Err(TaskInputError::EmptyInput)
            );
        }
    }

    #[test]
    fn test_classification_label_count() {
        let text = lines(&["This book is interesting."]);
        let kind = TaskKind::ZeroShotClassification;
        assert_eq!(validate_submission(kind, &text, &[]), Err(TaskInputError::NoLabels));
        assert_eq!(
            validate_submission(kind, &text, &labels(&["Positive"])),
            Err(TaskInputError::SingleLabel)
        );
        assert_eq!(
            validate_submission(kind, &text, &labels(&["Positive", "Negative"])),
            Ok(())
        );
    }

    #[test]
    fn test_extraction_ignores_labels() {
        let text = lines(&["Hanoi is the capital of Vietnam."]);
        assert_eq!(
            validate_submission(TaskKind::NamedEntityRecognition, &text, &[]),
            Ok(())
        );
    }
}
