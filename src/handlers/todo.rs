//! 待办事项的 HTTP 处理器

use crate::{
    auth::middleware::CurrentUser,
    error::AppError,
    middleware::AppState,
    models::todo::{CreateTodoRequest, ListTodosQuery, UpdateTodoRequest},
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// 列出调用者的待办事项
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Query(query): Query<ListTodosQuery>,
) -> Result<impl IntoResponse, AppError> {
    let todos = state.todo_service.list(current_user.id, &query).await?;

    Ok(Json(todos))
}

/// 创建待办事项
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Json(req): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todo_service.create(current_user.id, req).await?;

    Ok(Json(todo))
}

/// 部分更新待办事项
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todo_service.update(current_user.id, id, req).await?;

    Ok(Json(todo))
}

/// 删除待办事项
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.todo_service.delete(current_user.id, id).await?;

    Ok(Json(json!({ "ok": true })))
}
