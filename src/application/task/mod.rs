//! Task 契约
//!
//! 包含：
//! - config: 任务配置与输入上限
//! - factory: 按种类创建 Task
//! - state: 提交状态、表单边界、渲染帧
//! - pipeline: 逐行推理查询
//! - lifecycle: configure / execute

mod config;
mod factory;
mod lifecycle;
mod pipeline;
mod state;

pub use config::{TaskConfig, TaskLimits};
pub use factory::TaskFactory;
pub use lifecycle::{Task, SUCCESS_MESSAGE, TIMEOUT_MESSAGE};
pub use pipeline::query_lines;
pub use state::{
    FrameStatus, Layout, Notification, NotificationLevel, RenderFrame, SubmissionState, TaskForm,
};
