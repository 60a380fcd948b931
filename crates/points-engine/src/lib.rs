//! 小票积分规则引擎
//!
//! 将一张购物小票映射为整数积分，提供：
//! - 小票报文（`ReceiptPayload`）到领域模型（`Receipt`）的校验转换
//! - 以整数分（cents）表示的定点金额，避免浮点误差
//! - 七条相互独立、结果累加的积分规则
//! - 按规则拆分的积分明细

pub mod amount;
pub mod calculator;
pub mod error;
pub mod models;
pub mod rules;

pub use amount::{Amount, RawAmount};
pub use calculator::{PointsBreakdown, PointsCalculator, RuleAward};
pub use error::{PointsError, Result};
pub use models::{Item, ItemPayload, Receipt, ReceiptPayload};
pub use rules::PointsRule;
