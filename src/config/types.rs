//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::TaskLimits;

/// 未配置 `inference.api_token` 时读取的环境变量
pub const API_TOKEN_ENV: &str = "HF_API_KEY";

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 推理 API 配置
    #[serde(default)]
    pub inference: InferenceConfig,

    /// 任务输入上限
    #[serde(default)]
    pub task: TaskSettings,

    /// 会话过期配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 推理 API 配置
#[derive(Clone, Deserialize)]
pub struct InferenceConfig {
    /// 模型 URL 前缀，checkpoint 直接拼接在后面
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Bearer token
    #[serde(default)]
    pub api_token: Option<String>,

    /// 单次请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_root() -> String {
    "https://api-inference.huggingface.co/models/".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            api_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("api_root", &self.api_root)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl InferenceConfig {
    /// 配置中的 token 优先，否则查找 `lookup(API_TOKEN_ENV)`；空白值视为缺失
    pub fn resolve_token<F>(&self, lookup: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.api_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| lookup(API_TOKEN_ENV).filter(|t| !t.trim().is_empty()))
    }
}

/// 任务输入上限
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSettings {
    /// 每次提交最多处理的行数
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// 最多使用的标签数
    #[serde(default = "default_max_labels")]
    pub max_labels: usize,
}

fn default_max_lines() -> usize {
    5
}

fn default_max_labels() -> usize {
    3
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            max_labels: default_max_labels(),
        }
    }
}

impl TaskSettings {
    pub fn limits(&self) -> TaskLimits {
        TaskLimits {
            max_lines: self.max_lines,
            max_labels: self.max_labels,
        }
    }
}

/// 会话过期配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// 空闲多久后过期（秒）
    #[serde(default = "default_session_expire")]
    pub expire_secs: u64,

    /// 清理间隔（秒）
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_session_expire() -> u64 {
    86400 // 24 小时
}

fn default_sweep_interval() -> u64 {
    600
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expire_secs: default_session_expire(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8501");
        assert_eq!(
            config.inference.api_root,
            "https://api-inference.huggingface.co/models/"
        );
        assert_eq!(config.inference.timeout_secs, 10);
        assert_eq!(config.task.limits(), TaskLimits::default());
        assert_eq!(config.session.expire_secs, 86400);
    }

    #[test]
    fn test_resolve_token_prefers_config() {
        let config = InferenceConfig {
            api_token: Some("hf_config".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_token(|_| Some("hf_env".to_string())),
            Some("hf_config".to_string())
        );
    }

    #[test]
    fn test_resolve_token_falls_back_to_env() {
        let config = InferenceConfig::default();
        let token = config.resolve_token(|name| {
            assert_eq!(name, "HF_API_KEY");
            Some("hf_env".to_string())
        });
        assert_eq!(token, Some("hf_env".to_string()));

        let blank = InferenceConfig {
            api_token: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.resolve_token(|_| None), None);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = InferenceConfig {
            api_token: Some("hf_secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
