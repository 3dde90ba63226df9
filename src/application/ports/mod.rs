//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod inference_engine;
mod session_manager;

pub use inference_engine::{InferenceEnginePort, InferenceError, RequestHeaders};
pub use session_manager::{Session, SessionError, SessionManagerPort};
