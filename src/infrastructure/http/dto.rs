//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{TaskConfig, TaskSummary};
use crate::domain::task::TaskKind;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

// ============================================================================
// Session DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct OpenSessionRequest {
    #[serde(default)]
    pub wide_layout: bool,
}

#[derive(Debug, Serialize)]
pub struct OpenSessionResponseDto {
    pub session_id: String,
    pub wide_layout: bool,
}

#[derive(Debug, Deserialize)]
pub struct CloseSessionRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct CloseSessionResponseDto {
    pub session_id: String,
}

// ============================================================================
// Task DTOs
// ============================================================================

/// 任务目录条目
#[derive(Debug, Serialize)]
pub struct TaskSummaryDto {
    pub task: TaskKind,
    pub display_name: String,
    pub description: String,
    pub uses_labels: bool,
    pub default_checkpoint: String,
    pub endpoint_url: String,
    pub sample_input: String,
    pub default_labels: Vec<String>,
    pub max_lines: usize,
    pub max_labels: usize,
}

impl From<TaskSummary> for TaskSummaryDto {
    fn from(s: TaskSummary) -> Self {
        Self {
            task: s.kind,
            display_name: s.display_name,
            description: s.description,
            uses_labels: s.uses_labels,
            default_checkpoint: s.default_checkpoint,
            endpoint_url: s.endpoint_url,
            sample_input: s.sample_input,
            default_labels: s.default_labels,
            max_lines: s.max_lines,
            max_labels: s.max_labels,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConfigureTaskRequest {
    pub session_id: String,
    pub task: TaskKind,
    pub display_name: Option<String>,
    pub checkpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetTaskConfigRequest {
    pub session_id: String,
    pub task: TaskKind,
}

/// 任务配置响应
#[derive(Debug, Serialize)]
pub struct TaskConfigDto {
    pub task: TaskKind,
    pub display_name: String,
    pub checkpoint: String,
    pub endpoint_url: String,
    pub sample_input: String,
    pub max_lines: usize,
    pub max_labels: usize,
}

impl From<TaskConfig> for TaskConfigDto {
    fn from(config: TaskConfig) -> Self {
        Self {
            task: config.kind,
            sample_input: config.sample_text(),
            display_name: config.display_name,
            checkpoint: config.checkpoint.as_str().to_string(),
            endpoint_url: config.endpoint_url,
            max_lines: config.max_lines,
            max_labels: config.max_labels,
        }
    }
}

/// 渲染周期请求
#[derive(Debug, Deserialize)]
pub struct ExecuteTaskRequest {
    pub session_id: String,
    pub task: TaskKind,
    #[serde(default)]
    pub submitted: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub labels: Vec<String>,
    pub wide_layout: Option<bool>,
}
