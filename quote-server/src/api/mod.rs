//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`offers`] - 报价计算、汇总、PDF、快照
//! - [`catalog`] - 商品模板生成报价行

pub mod catalog;
pub mod health;
pub mod offers;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
