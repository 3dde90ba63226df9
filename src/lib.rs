//! hfserve - HuggingFace Inference API 任务服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Task: 任务种类、输入校验、请求构建、结果整形
//! - 输入规范化: 文本行和标签的去重与截断
//!
//! 应用层 (application/):
//! - Ports: 端口定义（InferenceEngine, SessionManager）
//! - Task: 任务生命周期（configure / execute）与渲染帧
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API
//! - Memory: SessionManager 内存实现与过期清理
//! - Adapters: HuggingFace Inference HTTP Client

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
