//! 健康检查处理器

use crate::{db, middleware::AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// 存活 + 数据库连通性检查
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let db_status = db::health_check(&state.db).await;
    db::record_pool_metrics(&state.db);

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if db_status.is_healthy() {
            "healthy".to_string()
        } else {
            "unhealthy".to_string()
        },
    })
}
