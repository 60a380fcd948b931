//! 金额解析
//!
//! 金额以 `rust_decimal::Decimal` 精确保存，解析和规则判断全程不经过二进制浮点数，
//! 整元判断、0.25 倍数判断以及商品积分的向上取整结果可精确复现。
//! 小数位数不设上限，`"1.255"` 这类金额照常计分。

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PointsError, Result};

/// 报文中的原始金额，可以是 JSON 字符串（`"35.35"`）或 JSON 数字（`35.35`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 非负金额
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// 是否为整元金额（小数部分为零）
    pub fn is_whole_dollar(&self) -> bool {
        self.value.fract().is_zero()
    }

    /// 是否为 `step` 的整数倍，`step` 为零时恒为 false
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        self.value
            .checked_rem(step)
            .is_some_and(|rem| rem.is_zero())
    }

    /// 计算 `ceil(金额 * 0.2)`
    ///
    /// 结果超出 `u64` 时取 `u64::MAX`。
    pub fn fifth_rounded_up(&self) -> u64 {
        (self.value / Decimal::from(5))
            .ceil()
            .to_u64()
            .unwrap_or(u64::MAX)
    }

    /// 解析报文中的原始金额，`field` 用于错误信息定位
    pub fn parse(field: &str, raw: &RawAmount) -> Result<Self> {
        let text = raw.to_string();
        let invalid = |reason: &str| PointsError::InvalidAmount {
            field: field.to_string(),
            value: text.clone(),
            reason: reason.to_string(),
        };

        let value = parse_decimal(text.trim()).ok_or_else(|| invalid("不是有效的十进制数"))?;

        if value.is_sign_negative() && !value.is_zero() {
            return Err(invalid("金额不能为负数"));
        }

        Ok(Self { value: value.abs() })
    }
}

/// 依次尝试精确解析、超长小数舍入解析以及科学计数法
///
/// serde_json 输出极小或极大的数字时使用科学计数法（如 `1e-5`）。
fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str_exact(text)
        .or_else(|_| Decimal::from_str(text))
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
