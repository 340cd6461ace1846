//! 认证相关的 HTTP 处理器

use crate::{
    error::AppError,
    middleware::AppState,
    models::user::{LoginRequest, RegisterRequest},
};
use axum::{extract::State, response::IntoResponse, Form, Json};
use std::sync::Arc;

/// 注册：成功后直接签发令牌
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.register(req).await?;

    Ok(Json(response))
}

/// 登录（表单编码请求体）
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(req): Form<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}
