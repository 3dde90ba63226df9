//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（InferenceEngine、SessionManager）
//! - task: 任务生命周期（配置、渲染周期、提交状态）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod task;

// Re-exports
pub use commands::{
    CloseSessionCommand,
    CloseSessionResponse,
    ConfigureTaskCommand,
    ExecuteTaskCommand,
    OpenSessionCommand,
    OpenSessionResponse,
    // Handlers
    handlers::{CloseSessionHandler, ConfigureTaskHandler, ExecuteTaskHandler, OpenSessionHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Inference engine
    InferenceEnginePort,
    InferenceError,
    RequestHeaders,
    // Session manager
    Session,
    SessionError,
    SessionManagerPort,
};

pub use queries::{
    GetTaskConfig,
    ListTasks,
    // Handlers
    handlers::{GetTaskConfigHandler, ListTasksHandler, TaskSummary},
};

pub use task::{
    FrameStatus, Layout, Notification, NotificationLevel, RenderFrame, SubmissionState, Task,
    TaskConfig, TaskFactory, TaskForm, TaskLimits,
};
