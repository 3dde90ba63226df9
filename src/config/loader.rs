//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, API_TOKEN_ENV};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("No API token: set inference.api_token or the {0} environment variable")]
    MissingToken(&'static str),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `HFSERVE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `HFSERVE_SERVER__PORT=8080`
/// - `HFSERVE_INFERENCE__API_TOKEN=hf_xxx`
/// - `HFSERVE_INFERENCE__TIMEOUT_SECS=30`
/// - `HFSERVE_TASK__MAX_LINES=10`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8501)?
        .set_default("inference.api_root", "https://api-inference.huggingface.co/models/")?
        .set_default("inference.timeout_secs", 10)?
        .set_default("task.max_lines", 5)?
        .set_default("task.max_labels", 3)?
        .set_default("session.expire_secs", 86400)?
        .set_default("session.sweep_interval_secs", 600)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: HFSERVE_INFERENCE__API_ROOT=http://localhost:9000/models/
    builder = builder.add_source(
        Environment::with_prefix("HFSERVE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.inference.api_root.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Inference API root cannot be empty".to_string(),
        ));
    }

    if config.inference.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Inference timeout cannot be 0".to_string(),
        ));
    }

    if config.task.max_lines == 0 {
        return Err(ConfigError::ValidationError(
            "task.max_lines must be at least 1".to_string(),
        ));
    }

    // 分类至少需要两个标签
    if config.task.max_labels < 2 {
        return Err(ConfigError::ValidationError(
            "task.max_labels must be at least 2".to_string(),
        ));
    }

    if config.session.sweep_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "session.sweep_interval_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 获取 API token，缺失时返回错误
pub fn bearer_token(config: &AppConfig) -> Result<String, ConfigError> {
    config
        .inference
        .resolve_token(|name| std::env::var(name).ok())
        .ok_or(ConfigError::MissingToken(API_TOKEN_ENV))
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    let token_source = match &config.inference.api_token {
        Some(_) => "config",
        None => API_TOKEN_ENV,
    };

    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Inference API Root: {}", config.inference.api_root);
    tracing::info!("Inference Token: <redacted> (from {})", token_source);
    tracing::info!("Inference Timeout: {}s", config.inference.timeout_secs);
    tracing::info!(
        "Task Limits: {} lines, {} labels",
        config.task.max_lines,
        config.task.max_labels
    );
    tracing::info!(
        "Session Expire: {}s (sweep every {}s)",
        config.session.expire_secs,
        config.session.sweep_interval_secs
    );
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}
