//! 小票积分存储
//!
//! 使用 DashMap 保存进程生命周期内的 小票 ID -> 积分 映射。
//! 记录创建后不可修改、不会删除，进程重启即清空。

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use points_engine::{PointsCalculator, ReceiptPayload};
use receipt_shared::observability::metrics;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{ReceiptError, Result};

/// 小票积分记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRecord {
    pub id: Uuid,
    pub points: u64,
}

/// 小票积分存储
///
/// 以 ID 的标准连字符小写形式为键，查询时按字符串精确匹配。
/// `Clone` 只复制内部 `Arc`，所有克隆共享同一份数据。
#[derive(Clone, Default)]
pub struct ReceiptStore {
    records: Arc<DashMap<String, ReceiptRecord>>,
    calculator: PointsCalculator,
}

impl ReceiptStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 提交小票
    ///
    /// 先校验并计算积分，成功后才生成 ID 并写入；校验失败时存储保持不变。
    /// 返回新建的记录，其 `id` 即对外返回的小票 ID。
    #[instrument(skip(self, payload))]
    pub fn submit(&self, payload: &ReceiptPayload) -> Result<ReceiptRecord> {
        let breakdown = match self.calculator.evaluate(payload) {
            Ok(breakdown) => breakdown,
            Err(e) => {
                metrics::record_receipt_processed("rejected", None);
                return Err(e.into());
            }
        };
        let record = self.insert_new(breakdown.total);
        metrics::record_receipt_processed("accepted", Some(record.points));
        for rule in breakdown.matched_rules() {
            metrics::record_rule_points(rule.code(), breakdown.points_for(rule));
        }

        info!(
            receipt_id = %record.id,
            points = record.points,
            "小票已处理"
        );
        Ok(record)
    }

    /// 生成新 ID 并写入记录
    ///
    /// 通过 vacant entry 写入，保证同一个 ID 不会被覆盖；碰撞时重新生成。
    fn insert_new(&self, points: u64) -> ReceiptRecord {
        loop {
            let id = Uuid::new_v4();
            match self.records.entry(id.to_string()) {
                Entry::Vacant(entry) => {
                    let record = ReceiptRecord { id, points };
                    entry.insert(record.clone());
                    return record;
                }
                Entry::Occupied(_) => {
                    warn!(receipt_id = %id, "小票 ID 碰撞，重新生成");
                }
            }
        }
    }

    /// 按 ID 查询积分
    pub fn lookup(&self, id: &str) -> Result<u64> {
        let found = self.records.get(id).map(|r| r.points);
        metrics::record_points_lookup(found.is_some());

        found.ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }

    /// 获取当前存储的小票数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 检查存储是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
