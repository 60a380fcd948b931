//! 小票积分服务
//!
//! 接收购物小票、计算积分并分配唯一 ID，之后按 ID 查询积分。
//!
//! ## 模块结构
//!
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义及 HTTP 映射
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//! - `store`: 进程内小票积分存储
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 并发存储：DashMap
//! - 序列化：serde (camelCase)

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;

pub use error::{ReceiptError, Result};
pub use routes::app;
pub use state::AppState;
pub use store::{ReceiptRecord, ReceiptStore};
