//! 小票 API 处理器
//!
//! 请求体解析失败与字段校验失败统一映射为 400，查询不到的 ID 映射为 404。

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use points_engine::ReceiptPayload;
use tracing::instrument;

use crate::{
    dto::{PointsResponse, ProcessReceiptResponse},
    error::{ReceiptError, Result},
    state::AppState,
};

/// 提交小票
///
/// POST /receipts/process
#[instrument(skip(state, payload))]
pub async fn process_receipt(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ReceiptPayload>, ReceiptError>,
) -> Result<Json<ProcessReceiptResponse>> {
    let record = state.store.submit(&payload)?;

    Ok(Json(ProcessReceiptResponse {
        id: record.id.to_string(),
    }))
}

/// 查询小票积分
///
/// GET /receipts/{id}/points
#[instrument(skip(state))]
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let points = state.store.lookup(&id)?;

    Ok(Json(PointsResponse { points }))
}

/// 存活探针
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "receipt-processor"
    }))
}
