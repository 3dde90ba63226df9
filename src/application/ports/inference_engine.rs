//! Inference Engine Port - 远程推理抽象
//!
//! 定义远程推理调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::task::InferenceRequest;

/// 推理调用错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("Request timeout")]
    Timeout,

    #[error("Remote error: HTTP {status_code}: {body}")]
    RemoteError { status_code: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 请求头集合
///
/// Debug 输出时隐藏 Authorization 的值
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders(Vec<(String, String)>);

impl RequestHeaders {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// `Authorization: Bearer {token}`
    pub fn bearer(token: &str) -> Self {
        let mut headers = Self::new();
        headers.insert("Authorization", format!("Bearer {}", token));
        headers
    }

    /// 插入请求头，同名（大小写不敏感）时覆盖
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .0
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| {
                let shown = if k.eq_ignore_ascii_case("authorization") {
                    "<redacted>"
                } else {
                    v.as_str()
                };
                (k.as_str(), shown)
            }))
            .finish()
    }
}

/// Inference Engine Port
///
/// 每次调用只处理一行输入；超时在适配器内部固定
#[async_trait]
pub trait InferenceEnginePort: Send + Sync {
    /// 发送单行推理请求，成功时返回解析后的 JSON
    async fn call(
        &self,
        endpoint_url: &str,
        headers: &RequestHeaders,
        request: &InferenceRequest,
    ) -> Result<Value, InferenceError>;
}
