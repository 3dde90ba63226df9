//! Task Config - 任务配置
//!
//! 只在 configure 阶段修改，执行期间保持不变

use serde::Serialize;

use crate::domain::task::TaskKind;
use crate::domain::{Checkpoint, TextLine, DEFAULT_MAX_LABELS, DEFAULT_MAX_LINES};

/// 输入上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    pub max_lines: usize,
    pub max_labels: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_labels: DEFAULT_MAX_LABELS,
        }
    }
}

/// 任务配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskConfig {
    pub kind: TaskKind,
    pub display_name: String,
    pub checkpoint: Checkpoint,
    /// `api_root + checkpoint`
    pub endpoint_url: String,
    pub sample_input: Vec<TextLine>,
    pub max_lines: usize,
    pub max_labels: usize,
}

impl TaskConfig {
    /// 使用任务种类的默认值构造
    pub fn defaults(kind: TaskKind, api_root: &str, limits: TaskLimits) -> Self {
        let checkpoint = Checkpoint::builtin(kind.default_checkpoint());
        Self {
            kind,
            display_name: kind.display_name().to_string(),
            endpoint_url: checkpoint.endpoint_url(api_root),
            checkpoint,
            sample_input: kind
                .sample_input()
                .iter()
                .filter_map(|line| TextLine::new(*line))
                .collect(),
            max_lines: limits.max_lines,
            max_labels: limits.max_labels,
        }
    }

    /// 文本框中预填的示例文本
    pub fn sample_text(&self) -> String {
        self.sample_input
            .iter()
            .map(|line| line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_ROOT: &str = "https://api-inference.huggingface.co/models/";

    #[test]
    fn test_defaults() {
        let config = TaskConfig::defaults(TaskKind::NamedEntityRecognition, API_ROOT, TaskLimits::default());
        assert_eq!(config.display_name, "Named Entity Recognition");
        assert_eq!(
            config.endpoint_url,
            "https://api-inference.huggingface.co/models/dslim/bert-base-NER"
        );
        assert_eq!(config.max_lines, 5);
        assert_eq!(config.sample_input.len(), 2);
    }

    #[test]
    fn test_sample_text_joins_lines() {
        let config = TaskConfig::defaults(TaskKind::ZeroShotClassification, API_ROOT, TaskLimits::default());
        assert_eq!(
            config.sample_text(),
            "I want to buy something in this store.\nThis book is interesting.\nMy internet connection is terribly slow."
        );
    }
}
