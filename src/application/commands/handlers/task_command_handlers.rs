//! Task Command Handlers
//!
//! 从会话中恢复任务配置和提交状态，执行后把新状态写回会话

use std::sync::Arc;

use crate::application::commands::task_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{InferenceEnginePort, SessionManagerPort};
use crate::application::task::{Layout, RenderFrame, TaskConfig, TaskFactory};

/// ConfigureTask Handler - 更新会话中的任务配置
pub struct ConfigureTaskHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    factory: Arc<TaskFactory>,
}

impl ConfigureTaskHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>, factory: Arc<TaskFactory>) -> Self {
        Self {
            session_manager,
            factory,
        }
    }

    pub async fn handle(&self, cmd: ConfigureTaskCommand) -> Result<TaskConfig, ApplicationError> {
        let session = self.session_manager.get(&cmd.session_id)?;
        let mut task = self.factory.restore(cmd.kind, session.tasks.get(&cmd.kind));

        let config = task
            .configure(cmd.display_name.as_deref(), cmd.checkpoint.as_deref())?
            .clone();
        self.session_manager
            .save_task_config(&cmd.session_id, config.clone())?;

        Ok(config)
    }
}

/// ExecuteTask Handler - 运行一个渲染周期
pub struct ExecuteTaskHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    engine: Arc<dyn InferenceEnginePort>,
    factory: Arc<TaskFactory>,
}

impl ExecuteTaskHandler {
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        engine: Arc<dyn InferenceEnginePort>,
        factory: Arc<TaskFactory>,
    ) -> Self {
        Self {
            session_manager,
            engine,
            factory,
        }
    }

    pub async fn handle(&self, cmd: ExecuteTaskCommand) -> Result<RenderFrame, ApplicationError> {
        let session = self.session_manager.get(&cmd.session_id)?;

        let wide = match cmd.wide_layout {
            Some(wide) if wide != session.wide_layout => {
                self.session_manager.set_wide_layout(&cmd.session_id, wide)?;
                wide
            }
            Some(wide) => wide,
            None => session.wide_layout,
        };

        let task = self.factory.restore(cmd.kind, session.tasks.get(&cmd.kind));
        let frame = task
            .execute(
                self.engine.as_ref(),
                &cmd.form,
                session.submission,
                Layout::from_wide(wide),
            )
            .await;

        self.session_manager
            .save_submission(&cmd.session_id, frame.state)?;

        tracing::debug!(
            session_id = %cmd.session_id,
            task = %cmd.kind,
            status = frame.status.as_str(),
            "Render cycle finished"
        );

        Ok(frame)
    }
}
