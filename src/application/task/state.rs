//! 渲染周期状态与输出
//!
//! 表现层每个交互周期把 [`SubmissionState`] 传入，执行结束后拿回新的状态

use serde::{Deserialize, Serialize};

use crate::domain::task::{ResultTable, TaskInputError, TaskKind};

/// 跨交互周期保留的提交状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionState {
    /// 最近一次提交是否通过了输入校验
    pub valid_inputs_received: bool,
}

/// 表单边界：一次渲染周期收集到的输入
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    /// 本周期是否点击了提交
    pub submitted: bool,
    /// 原始多行文本
    pub text: String,
    /// 候选标签（仅分类任务使用）
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Warning,
    Success,
    Error,
}

/// 用户可见的提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// 页面布局
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Centered,
    Wide,
}

impl Layout {
    pub fn from_wide(wide: bool) -> Self {
        if wide {
            Layout::Wide
        } else {
            Layout::Centered
        }
    }
}

/// 本周期的终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStatus {
    /// 没有提交，也没有之前的有效提交
    Idle,
    RejectedEmptyText,
    RejectedNoLabels,
    RejectedSingleLabel,
    /// 远程调用全部成功，表格已生成
    Displayed,
    /// 远程调用失败，整批结果被丢弃
    Failed,
}

impl FrameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameStatus::Idle => "idle",
            FrameStatus::RejectedEmptyText => "rejected_empty_text",
            FrameStatus::RejectedNoLabels => "rejected_no_labels",
            FrameStatus::RejectedSingleLabel => "rejected_single_label",
            FrameStatus::Displayed => "displayed",
            FrameStatus::Failed => "failed",
        }
    }
}

impl From<TaskInputError> for FrameStatus {
    fn from(err: TaskInputError) -> Self {
        match err {
            TaskInputError::EmptyInput => FrameStatus::RejectedEmptyText,
            TaskInputError::NoLabels => FrameStatus::RejectedNoLabels,
            TaskInputError::SingleLabel => FrameStatus::RejectedSingleLabel,
        }
    }
}

/// 一个渲染周期的完整输出，交给外部渲染器
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    pub task: TaskKind,
    pub display_name: String,
    pub endpoint_url: String,
    pub status: FrameStatus,
    /// 执行后的提交状态，由调用方保存并在下个周期传回
    pub state: SubmissionState,
    pub layout: Layout,
    pub notifications: Vec<Notification>,
    /// 仅在 `Displayed` 时存在
    pub table: Option<ResultTable>,
}
