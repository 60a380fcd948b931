//! 积分计算器
//!
//! 依次评估全部规则并汇总积分，同时保留每条规则的得分明细。

use tracing::debug;

use crate::error::Result;
use crate::models::{Receipt, ReceiptPayload};
use crate::rules::PointsRule;

/// 单条规则的得分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleAward {
    pub rule: PointsRule,
    pub points: u64,
}

/// 积分明细
///
/// 包含所有规则（得分为 0 的规则也保留），`total` 为各规则得分之和，饱和于 `u64::MAX`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub awards: Vec<RuleAward>,
    pub total: u64,
}

impl PointsBreakdown {
    /// 获取指定规则的得分
    pub fn points_for(&self, rule: PointsRule) -> u64 {
        self.awards
            .iter()
            .find(|a| a.rule == rule)
            .map(|a| a.points)
            .unwrap_or(0)
    }

    /// 实际得分的规则
    pub fn matched_rules(&self) -> impl Iterator<Item = PointsRule> + '_ {
        self.awards.iter().filter(|a| a.points > 0).map(|a| a.rule)
    }
}

/// 积分计算器
///
/// 无内部状态，可在多线程间自由复制共享。
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsCalculator;

impl PointsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 对已校验的小票计算积分明细
    pub fn calculate(&self, receipt: &Receipt) -> PointsBreakdown {
        let awards: Vec<RuleAward> = PointsRule::ALL
            .iter()
            .map(|&rule| RuleAward {
                rule,
                points: rule.award(receipt),
            })
            .collect();

        let total = awards
            .iter()
            .map(|a| a.points)
            .fold(0, u64::saturating_add);
        let breakdown = PointsBreakdown { awards, total };

        debug!(
            retailer = %receipt.retailer,
            total,
            matched = ?breakdown.matched_rules().map(|r| r.code()).collect::<Vec<_>>(),
            "积分计算完成"
        );

        breakdown
    }

    /// 校验报文并计算积分明细
    pub fn evaluate(&self, payload: &ReceiptPayload) -> Result<PointsBreakdown> {
        let receipt = Receipt::from_payload(payload)?;
        Ok(self.calculate(&receipt))
    }

    /// 校验报文并返回总积分
    ///
    /// 缺少必填字段或字段格式非法时返回校验错误。
    pub fn compute_points(&self, payload: &ReceiptPayload) -> Result<u64> {
        self.evaluate(payload).map(|b| b.total)
    }
}
