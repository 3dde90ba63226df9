//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/tasks             GET   任务目录
//! - /api/session/open      POST  打开会话
//! - /api/session/close     POST  关闭会话
//! - /api/task/configure    POST  配置任务（显示名称、checkpoint）
//! - /api/task/get          POST  获取会话内任务配置
//! - /api/task/execute      POST  执行一个渲染周期

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/tasks", get(handlers::list_tasks))
        .nest("/session", session_routes())
        .nest("/task", task_routes())
}

/// Session 路由
fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/open", post(handlers::open_session))
        .route("/close", post(handlers::close_session))
}

/// Task 路由
fn task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/configure", post(handlers::configure_task))
        .route("/get", post(handlers::get_task_config))
        .route("/execute", post(handlers::execute_task))
}
