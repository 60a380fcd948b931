//! 规则引擎错误类型
//!
//! 所有变体都属于小票校验失败，由调用方统一映射为客户端错误。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointsError {
    #[error("缺少必填字段: {0}")]
    MissingField(&'static str),

    #[error("商品缺少必填字段: items[{index}].{field}")]
    MissingItemField { index: usize, field: &'static str },

    #[error("无效的购买日期: {0}（期望 YYYY-MM-DD）")]
    InvalidDate(String),

    #[error("无效的购买时间: {0}（期望 HH:MM）")]
    InvalidTime(String),

    #[error("无效的金额 {field}={value}: {reason}")]
    InvalidAmount {
        field: String,
        value: String,
        reason: String,
    },
}

impl PointsError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::MissingItemField { .. } => "MISSING_ITEM_FIELD",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidTime(_) => "INVALID_TIME",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
        }
    }
}

pub type Result<T> = std::result::Result<T, PointsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PointsError::MissingField("total");
        assert_eq!(err.to_string(), "缺少必填字段: total");

        let err = PointsError::MissingItemField {
            index: 2,
            field: "price",
        };
        assert_eq!(err.to_string(), "商品缺少必填字段: items[2].price");
    }

    #[test]
    fn test_error_code() {
        assert_eq!(PointsError::InvalidTime("25:00".into()).code(), "INVALID_TIME");
        assert_eq!(PointsError::InvalidDate("2022-13-01".into()).code(), "INVALID_DATE");
    }
}
