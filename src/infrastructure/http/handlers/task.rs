//! Task Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{
    ConfigureTaskCommand, ExecuteTaskCommand, GetTaskConfig, ListTasks, RenderFrame, TaskForm,
};
use crate::infrastructure::http::dto::{
    ApiResponse, ConfigureTaskRequest, ExecuteTaskRequest, GetTaskConfigRequest, TaskConfigDto,
    TaskSummaryDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TaskSummaryDto>>>, ApiError> {
    let tasks = state.list_tasks_handler.handle(ListTasks).await?;
    Ok(Json(ApiResponse::success(
        tasks.into_iter().map(TaskSummaryDto::from).collect(),
    )))
}

pub async fn configure_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConfigureTaskRequest>,
) -> Result<Json<ApiResponse<TaskConfigDto>>, ApiError> {
    let config = state
        .configure_task_handler
        .handle(ConfigureTaskCommand {
            session_id: req.session_id,
            kind: req.task,
            display_name: req.display_name,
            checkpoint: req.checkpoint,
        })
        .await?;

    Ok(Json(ApiResponse::success(config.into())))
}

pub async fn get_task_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetTaskConfigRequest>,
) -> Result<Json<ApiResponse<TaskConfigDto>>, ApiError> {
    let config = state
        .get_task_config_handler
        .handle(GetTaskConfig {
            session_id: req.session_id,
            kind: req.task,
        })
        .await?;

    Ok(Json(ApiResponse::success(config.into())))
}

/// 一个渲染周期；校验和远程错误都在帧的 notifications 中返回
pub async fn execute_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExecuteTaskRequest>,
) -> Result<Json<ApiResponse<RenderFrame>>, ApiError> {
    let frame = state
        .execute_task_handler
        .handle(ExecuteTaskCommand {
            session_id: req.session_id,
            kind: req.task,
            form: TaskForm {
                submitted: req.submitted,
                text: req.text,
                labels: req.labels,
            },
            wide_layout: req.wide_layout,
        })
        .await?;

    Ok(Json(ApiResponse::success(frame)))
}
