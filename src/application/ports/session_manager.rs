//! Session Manager Port - 会话状态管理
//!
//! 保存跨渲染周期的状态，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::application::task::{SubmissionState, TaskConfig};
use crate::domain::task::TaskKind;

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already exists: {0}")]
    AlreadyExists(String),
}

/// 会话状态（in-memory）
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    /// 上一次提交是否有效
    pub submission: SubmissionState,
    /// 宽布局开关
    pub wide_layout: bool,
    /// 每种任务已保存的配置；未配置的任务使用默认值
    pub tasks: HashMap<TaskKind, TaskConfig>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            submission: SubmissionState::default(),
            wide_layout: false,
            tasks: HashMap::new(),
            created_at: now,
            last_activity: now,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Session Manager Port
///
/// 所有状态存储在内存中
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话
    fn create(&self, session: Session) -> Result<String, SessionError>;

    /// 获取会话
    fn get(&self, id: &str) -> Result<Session, SessionError>;

    /// 保存任务配置
    fn save_task_config(&self, id: &str, config: TaskConfig) -> Result<(), SessionError>;

    /// 保存提交状态
    fn save_submission(&self, id: &str, state: SubmissionState) -> Result<(), SessionError>;

    /// 更新宽布局开关
    fn set_wide_layout(&self, id: &str, wide: bool) -> Result<(), SessionError>;

    /// 关闭会话
    fn close(&self, id: &str) -> Result<(), SessionError>;

    /// 获取所有过期会话的 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;

    /// 获取所有会话 ID
    fn list_all(&self) -> Vec<String>;
}
