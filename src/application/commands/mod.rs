//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：会话开关、任务配置与执行

mod session_commands;
mod task_commands;

pub mod handlers;

pub use session_commands::*;
pub use task_commands::*;
