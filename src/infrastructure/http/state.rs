//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CloseSessionHandler, ConfigureTaskHandler, ExecuteTaskHandler, OpenSessionHandler,
    // Query handlers
    GetTaskConfigHandler, ListTasksHandler,
    // Ports
    InferenceEnginePort, SessionManagerPort,
    TaskFactory,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub session_manager: Arc<dyn SessionManagerPort>,
    pub inference_engine: Arc<dyn InferenceEnginePort>,
    pub factory: Arc<TaskFactory>,

    // ========== Command Handlers ==========
    pub open_session_handler: OpenSessionHandler,
    pub close_session_handler: CloseSessionHandler,
    pub configure_task_handler: ConfigureTaskHandler,
    pub execute_task_handler: ExecuteTaskHandler,

    // ========== Query Handlers ==========
    pub list_tasks_handler: ListTasksHandler,
    pub get_task_config_handler: GetTaskConfigHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        inference_engine: Arc<dyn InferenceEnginePort>,
        factory: Arc<TaskFactory>,
    ) -> Self {
        Self {
            // Command handlers
            open_session_handler: OpenSessionHandler::new(session_manager.clone()),
            close_session_handler: CloseSessionHandler::new(session_manager.clone()),
            configure_task_handler: ConfigureTaskHandler::new(
                session_manager.clone(),
                factory.clone(),
            ),
            execute_task_handler: ExecuteTaskHandler::new(
                session_manager.clone(),
                inference_engine.clone(),
                factory.clone(),
            ),

            // Query handlers
            list_tasks_handler: ListTasksHandler::new(factory.clone()),
            get_task_config_handler: GetTaskConfigHandler::new(
                session_manager.clone(),
                factory.clone(),
            ),

            // Ports
            session_manager,
            inference_engine,
            factory,
        }
    }
}
