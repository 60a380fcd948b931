//! 积分规则定义
//!
//! 七条规则相互独立，各自对小票给出非负积分，最终结果为各规则之和。

use chrono::{Datelike, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::models::{Item, Receipt};

/// 整元总额奖励
pub const ROUND_DOLLAR_POINTS: u64 = 50;
/// 总额为 0.25 倍数奖励
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// 每两件商品的奖励
pub const ITEM_PAIR_POINTS: u64 = 5;
/// 购买日为奇数日的奖励
pub const ODD_DAY_POINTS: u64 = 6;
/// 下午时段购买奖励
pub const AFTERNOON_POINTS: u64 = 10;

/// 0.25 元
fn quarter() -> Decimal {
    Decimal::new(25, 2)
}

/// 积分规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointsRule {
    /// 商家名中每个字母或数字字符 1 分
    RetailerName,
    /// 总额为整元时 50 分
    RoundDollarTotal,
    /// 总额为 0.25 的整数倍时 25 分
    QuarterMultipleTotal,
    /// 每两件商品 5 分
    ItemPairs,
    /// 去除首尾空白后描述长度为 3 的倍数的商品，得 ceil(价格 * 0.2) 分
    ItemDescription,
    /// 购买日为奇数日时 6 分
    OddPurchaseDay,
    /// 购买时间在 14:00 之后、15 点整点小时结束之前（含 15:59）时 10 分
    AfternoonPurchase,
}

impl PointsRule {
    /// 全部规则，按评估顺序排列
    pub const ALL: [PointsRule; 7] = [
        Self::RetailerName,
        Self::RoundDollarTotal,
        Self::QuarterMultipleTotal,
        Self::ItemPairs,
        Self::ItemDescription,
        Self::OddPurchaseDay,
        Self::AfternoonPurchase,
    ];

    /// 规则的稳定编码
    pub fn code(&self) -> &'static str {
        match self {
            Self::RetailerName => "retailer_name",
            Self::RoundDollarTotal => "round_dollar_total",
            Self::QuarterMultipleTotal => "quarter_multiple_total",
            Self::ItemPairs => "item_pairs",
            Self::ItemDescription => "item_description",
            Self::OddPurchaseDay => "odd_purchase_day",
            Self::AfternoonPurchase => "afternoon_purchase",
        }
    }

    /// 计算本规则对小票给出的积分
    ///
    /// 积分累加时饱和于 `u64::MAX`。
    pub fn award(&self, receipt: &Receipt) -> u64 {
        match self {
            Self::RetailerName => retailer_name_points(&receipt.retailer),
            Self::RoundDollarTotal => {
                bonus_if(receipt.total.is_whole_dollar(), ROUND_DOLLAR_POINTS)
            }
            Self::QuarterMultipleTotal => bonus_if(
                receipt.total.is_multiple_of(quarter()),
                QUARTER_MULTIPLE_POINTS,
            ),
            Self::ItemPairs => (receipt.items.len() as u64 / 2).saturating_mul(ITEM_PAIR_POINTS),
            Self::ItemDescription => receipt
                .items
                .iter()
                .map(item_description_points)
                .fold(0, u64::saturating_add),
            Self::OddPurchaseDay => {
                bonus_if(receipt.purchase_date.day() % 2 == 1, ODD_DAY_POINTS)
            }
            Self::AfternoonPurchase => {
                bonus_if(in_afternoon_window(receipt.purchase_time), AFTERNOON_POINTS)
            }
        }
    }
}

fn bonus_if(condition: bool, points: u64) -> u64 {
    if condition { points } else { 0 }
}

/// 商家名中的字母数字字符数（空格与标点不计）
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// 单件商品的描述积分
///
/// 空描述的长度 0 也是 3 的倍数。
pub fn item_description_points(item: &Item) -> u64 {
    let len = item.short_description.trim().chars().count();
    if len % 3 == 0 {
        item.price.fifth_rounded_up()
    } else {
        0
    }
}

/// 下午时段判定：14 点且分钟非零，或 15 点的任意分钟
///
/// 上界覆盖整个 15 点（15:59 仍得分），16:00 不得分；14:00 整点不得分。秒数不参与判定。
pub fn in_afternoon_window(time: NaiveTime) -> bool {
    match time.hour() {
        14 => time.minute() > 0,
        15 => true,
        _ => false,
    }
}
