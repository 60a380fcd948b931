//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use crate::store::ReceiptStore;

/// Axum 应用共享状态
///
/// 在进程启动时构造一次，通过 `State` 注入到各个 handler。
#[derive(Clone, Default)]
pub struct AppState {
    /// 小票积分存储
    pub store: ReceiptStore,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(store: ReceiptStore) -> Self {
        Self { store }
    }
}
