//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionManager，保存跨渲染周期的会话状态；SessionSweeper 定期清理空闲会话

mod session_manager;
mod session_sweeper;

pub use session_manager::InMemorySessionManager;
pub use session_sweeper::SessionSweeper;
