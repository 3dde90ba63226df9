//! Task Kind - 支持的 NLP 任务种类

use serde::{Deserialize, Serialize};

/// 任务种类
///
/// 所有种类共享 normalize → build → call → shape 流水线，
/// 只在请求体形状和结果形状上不同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// 命名实体识别
    #[serde(rename = "ner")]
    NamedEntityRecognition,
    /// 零样本文本分类
    #[serde(rename = "zero-shot")]
    ZeroShotClassification,
}

impl TaskKind {
    pub const ALL: [TaskKind; 2] = [
        TaskKind::NamedEntityRecognition,
        TaskKind::ZeroShotClassification,
    ];

    /// URL / JSON 中使用的短名
    pub fn slug(&self) -> &'static str {
        match self {
            TaskKind::NamedEntityRecognition => "ner",
            TaskKind::ZeroShotClassification => "zero-shot",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskKind::NamedEntityRecognition => "Named Entity Recognition",
            TaskKind::ZeroShotClassification => "Zero-Shot Text Classification",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TaskKind::NamedEntityRecognition => "Identify named entities in keyphrases on-the-fly.",
            TaskKind::ZeroShotClassification => {
                "Classify keyphrases on-the-fly. No ML training needed!"
            }
        }
    }

    pub fn default_checkpoint(&self) -> &'static str {
        match self {
            TaskKind::NamedEntityRecognition => "dslim/bert-base-NER",
            TaskKind::ZeroShotClassification => "valhalla/distilbart-mnli-12-3",
        }
    }

    pub fn sample_input(&self) -> &'static [&'static str] {
        match self {
            TaskKind::NamedEntityRecognition => &[
                "Hanoi is the capital of Vietnam.",
                "Google was founded by Larry Page and Sergey Brin in Menlo Park, California.",
            ],
            TaskKind::ZeroShotClassification => &[
                "I want to buy something in this store.",
                "This book is interesting.",
                "My internet connection is terribly slow.",
            ],
        }
    }

    /// 表单中预填的候选标签；抽取任务没有标签
    pub fn default_labels(&self) -> &'static [&'static str] {
        match self {
            TaskKind::NamedEntityRecognition => &[],
            TaskKind::ZeroShotClassification => &["Positive", "Negative", "Neutral"],
        }
    }

    /// 是否需要候选标签
    pub fn uses_labels(&self) -> bool {
        matches!(self, TaskKind::ZeroShotClassification)
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
