//! Session Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CloseSessionCommand, OpenSessionCommand};
use crate::infrastructure::http::dto::{
    ApiResponse, CloseSessionRequest, CloseSessionResponseDto, OpenSessionRequest,
    OpenSessionResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn open_session(
    State(state): State<Arc<AppState>>,
    req: Option<Json<OpenSessionRequest>>,
) -> Result<Json<ApiResponse<OpenSessionResponseDto>>, ApiError> {
    let req = req.map(|Json(r)| r).unwrap_or_default();
    let result = state
        .open_session_handler
        .handle(OpenSessionCommand {
            wide_layout: req.wide_layout,
        })
        .await?;

    Ok(Json(ApiResponse::success(OpenSessionResponseDto {
        session_id: result.session_id,
        wide_layout: result.wide_layout,
    })))
}

pub async fn close_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CloseSessionRequest>,
) -> Result<Json<ApiResponse<CloseSessionResponseDto>>, ApiError> {
    let result = state
        .close_session_handler
        .handle(CloseSessionCommand {
            session_id: req.session_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(CloseSessionResponseDto {
        session_id: result.session_id,
    })))
}
