//! Task Factory - 按任务种类创建 Task

use super::config::{TaskConfig, TaskLimits};
use super::lifecycle::Task;
use crate::application::ports::RequestHeaders;
use crate::domain::task::TaskKind;

/// 保存所有任务共享的 API 根地址、请求头和输入上限
#[derive(Debug, Clone)]
pub struct TaskFactory {
    api_root: String,
    headers: RequestHeaders,
    limits: TaskLimits,
}

impl TaskFactory {
    pub fn new(api_root: impl Into<String>, headers: RequestHeaders, limits: TaskLimits) -> Self {
        Self {
            api_root: api_root.into(),
            headers,
            limits,
        }
    }

    pub fn limits(&self) -> TaskLimits {
        self.limits
    }

    /// 默认配置的任务
    pub fn create(&self, kind: TaskKind) -> Task {
        Task::new(kind, self.api_root.clone(), self.headers.clone(), self.limits)
    }

    /// 有已保存配置时从配置恢复，否则使用默认配置
    pub fn restore(&self, kind: TaskKind, saved: Option<&TaskConfig>) -> Task {
        match saved {
            Some(config) => Task::from_config(config.clone(), self.api_root.clone(), self.headers.clone()),
            None => self.create(kind),
        }
    }

    pub fn default_config(&self, kind: TaskKind) -> TaskConfig {
        TaskConfig::defaults(kind, &self.api_root, self.limits)
    }
}
