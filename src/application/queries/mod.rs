//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：任务目录和会话内任务配置

mod task_queries;

pub mod handlers;

pub use task_queries::*;
