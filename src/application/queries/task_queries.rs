//! Task Queries

/// 列出所有可用任务
#[derive(Debug, Clone)]
pub struct ListTasks;

/// 获取会话中某个任务的当前配置
#[derive(Debug, Clone)]
pub struct GetTaskConfig {
    pub session_id: String,
    pub kind: crate::domain::task::TaskKind,
}
