//! Task Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SessionManagerPort;
use crate::application::queries::{GetTaskConfig, ListTasks};
use crate::application::task::{TaskConfig, TaskFactory};
use crate::domain::task::TaskKind;

// ============================================================================
// Response DTOs
// ============================================================================

/// 任务目录条目
#[derive(Debug, Clone)]
pub struct TaskSummary {
    pub kind: TaskKind,
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

impl From<TaskConfig> for TaskSummary {
    fn from(config: TaskConfig) -> Self {
        let kind = config.kind;
        Self {
            kind,
            display_name: config.display_name.clone(),
            description: kind.description().to_string(),
            uses_labels: kind.uses_labels(),
            default_checkpoint: config.checkpoint.as_str().to_string(),
            sample_input: config.sample_text(),
            endpoint_url: config.endpoint_url,
            default_labels: kind.default_labels().iter().map(|l| l.to_string()).collect(),
            max_lines: config.max_lines,
            max_labels: config.max_labels,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListTasks Handler
pub struct ListTasksHandler {
    factory: Arc<TaskFactory>,
}

impl ListTasksHandler {
    pub fn new(factory: Arc<TaskFactory>) -> Self {
        Self { factory }
    }

    pub async fn handle(&self, _query: ListTasks) -> Result<Vec<TaskSummary>, ApplicationError> {
        Ok(TaskKind::ALL
            .iter()
            .map(|kind| TaskSummary::from(self.factory.default_config(*kind)))
            .collect())
    }
}

/// GetTaskConfig Handler - 未配置过的任务返回默认配置
pub struct GetTaskConfigHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    factory: Arc<TaskFactory>,
}

impl GetTaskConfigHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>, factory: Arc<TaskFactory>) -> Self {
        Self {
            session_manager,
            factory,
        }
    }

    pub async fn handle(&self, query: GetTaskConfig) -> Result<TaskConfig, ApplicationError> {
        let session = self.session_manager.get(&query.session_id)?;
        Ok(self
            .factory
            .restore(query.kind, session.tasks.get(&query.kind))
            .config()
            .clone())
    }
}
