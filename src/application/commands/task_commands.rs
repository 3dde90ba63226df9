//! Task Commands - 任务配置与执行命令

use crate::application::task::TaskForm;
use crate::domain::task::TaskKind;

/// 配置任务命令
///
/// 未提供的字段保持会话中已保存的值（或任务默认值）
#[derive(Debug, Clone)]
pub struct ConfigureTaskCommand {
    pub session_id: String,
    pub kind: TaskKind,
    pub display_name: Option<String>,
    pub checkpoint: Option<String>,
}

/// 执行一个渲染周期
#[derive(Debug, Clone)]
pub struct ExecuteTaskCommand {
    pub session_id: String,
    pub kind: TaskKind,
    pub form: TaskForm,
    /// 提供时先更新会话的宽布局开关
    pub wide_layout: Option<bool>,
}
