//! Session Commands - 会话相关命令

/// 打开会话命令
#[derive(Debug, Clone, Default)]
pub struct OpenSessionCommand {
    /// 初始宽布局开关
    pub wide_layout: bool,
}

/// 打开会话响应
#[derive(Debug, Clone)]
pub struct OpenSessionResponse {
    pub session_id: String,
    pub wide_layout: bool,
}

/// 关闭会话命令
#[derive(Debug, Clone)]
pub struct CloseSessionCommand {
    pub session_id: String,
}

/// 关闭会话响应
#[derive(Debug, Clone)]
pub struct CloseSessionResponse {
    pub session_id: String,
}
