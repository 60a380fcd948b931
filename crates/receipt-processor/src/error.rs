//! 小票服务错误类型定义
//!
//! 对外只暴露两类错误：小票校验失败（400）与小票不存在（404）。
//! 详细原因只写日志，响应体保持固定文案。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use points_engine::PointsError;

use crate::dto::ErrorResponse;

/// 校验失败时返回给客户端的固定文案
pub const INVALID_RECEIPT_MESSAGE: &str = "Invalid receipt";
/// 小票不存在时返回给客户端的固定文案
pub const RECEIPT_NOT_FOUND_MESSAGE: &str = "Receipt not found";

/// 小票服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("小票校验失败: {0}")]
    Validation(#[from] PointsError),

    #[error("请求体无法解析: {0}")]
    MalformedBody(String),

    #[error("小票不存在: {0}")]
    NotFound(String),
}

impl ReceiptError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// 返回错误码（用于日志）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.code(),
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::NotFound(_) => "RECEIPT_NOT_FOUND",
        }
    }

    /// 返回给客户端的错误文案
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => INVALID_RECEIPT_MESSAGE,
            Self::NotFound(_) => RECEIPT_NOT_FOUND_MESSAGE,
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(_) | Self::MalformedBody(_) => {
                tracing::warn!(code = self.error_code(), error = %self, "小票被拒绝");
            }
            Self::NotFound(id) => {
                tracing::debug!(receipt_id = %id, "小票不存在");
            }
        }

        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// 从 JSON 提取失败转换（非 JSON、Content-Type 错误、字段类型错误）
impl From<JsonRejection> for ReceiptError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ReceiptError>;
