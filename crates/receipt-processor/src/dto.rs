//! 请求和响应的数据传输对象
//!
//! 请求体直接使用规则引擎的 `ReceiptPayload`，这里只定义响应体。

use serde::{Deserialize, Serialize};

/// 小票提交成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// 积分查询响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// 错误响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
