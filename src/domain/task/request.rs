//! Inference Request - 推理请求构造
//!
//! 抽取任务请求体:
//! `{"inputs": "...", "options": {"wait_for_model": true}}`
//!
//! 分类任务请求体:
//! `{"inputs": "...", "parameters": {"candidate_labels": [...]}, "options": {"wait_for_model": true}}`

use serde::Serialize;

use crate::domain::value_objects::{Label, TextLine};

/// 单行推理请求，每次提交按行新建，不持久化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceRequest {
    pub text: TextLine,
    pub labels: Option<Vec<Label>>,
    /// 始终为 true，避免模型冷启动时直接失败
    pub wait_for_model: bool,
}

/// 请求体 (JSON)
#[derive(Debug, Serialize)]
pub struct InferencePayload<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<PayloadParameters<'a>>,
    options: PayloadOptions,
}

#[derive(Debug, Serialize)]
struct PayloadParameters<'a> {
    candidate_labels: &'a [Label],
}

#[derive(Debug, Serialize)]
struct PayloadOptions {
    wait_for_model: bool,
}

/// 构造推理请求
///
/// `labels` 为 `Some` 时（分类任务）请求体带 `candidate_labels`
pub fn build_request(text: TextLine, labels: Option<&[Label]>) -> InferenceRequest {
    InferenceRequest {
        text,
        labels: labels.map(|l| l.to_vec()),
        wait_for_model: true,
    }
}

impl InferenceRequest {
    /// 转换为线上请求体
    pub fn payload(&self) -> InferencePayload<'_> {
        InferencePayload {
            inputs: self.text.as_str(),
            parameters: self
                .labels
                .as_deref()
                .map(|candidate_labels| PayloadParameters { candidate_labels }),
            options: PayloadOptions {
                wait_for_model: self.wait_for_model,
            },
        }
    }
}
