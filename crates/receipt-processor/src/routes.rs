//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router, middleware,
    routing::{get, post},
};
use receipt_shared::observability::middleware as obs_middleware;

use crate::{handlers, state::AppState};

/// 构建小票相关的路由
pub fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
}

/// 构建完整应用
///
/// 挂载业务路由与存活探针，并附加请求追踪和请求 ID 中间件。
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(receipt_routes())
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
