//! 统一错误处理
//!
//! 错误类型来自 `shared::error`，这里只做转发，handler 统一从
//! `crate::utils` 引用。
//!
//! # 错误码规范
//!
//! | 范围 | 分类 | 示例 |
//! |------|------|------|
//! | 0xxx | 通用 | 0 成功 |
//! | 4xxx | 报价错误 | 4010 快照无效 |
//! | 6xxx | 商品目录错误 | 6002 商品价格无效 |
//! | 9xxx | 系统错误 | 9202 打印失败 |
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::new(ErrorCode::SnapshotInvalid).with_detail("reason", rejection.body_text()))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

