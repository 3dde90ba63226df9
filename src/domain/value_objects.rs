//! Domain Value Objects

use serde::{Deserialize, Serialize};

/// 一行输入文本（keyphrase）
///
/// 保证非空；首尾空白原样保留
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextLine(String);

impl TextLine {
    /// 空字符串返回 None
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TextLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 分类候选标签
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if label.is_empty() {
            None
        } else {
            Some(Self(label))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 模型 checkpoint 标识（如 `dslim/bert-base-NER`）
///
/// 拼接在 API 根地址之后构成完整的推理 URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checkpoint(String);

impl Checkpoint {
    pub fn new(checkpoint: impl Into<String>) -> Result<Self, &'static str> {
        let checkpoint = checkpoint.into();
        let trimmed = checkpoint.trim();
        if trimmed.is_empty() {
            return Err("checkpoint cannot be empty");
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 内置的默认 checkpoint
    pub(crate) fn builtin(checkpoint: &'static str) -> Self {
        Self(checkpoint.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 拼接完整的推理端点 URL
    pub fn endpoint_url(&self, api_root: &str) -> String {
        format!("{}{}", api_root, self.0)
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
