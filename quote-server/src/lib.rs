//! Quote Server - 门窗报价计价服务
//!
//! # 架构概述
//!
//! 报价编辑器、报价单 PDF 和已保存报价的合计全部来自同一个计价引擎，
//! 保证各处显示的金额一致。
//!
//! - **计价引擎** (`pricing`, `offer_money`): 行金额、折扣、填充件、增值税、合计
//! - **输出** (`printing`): 报价单表格模型和 PDF
//! - **快照** (`snapshot`): 已保存报价的缓存合计校验
//! - **HTTP API** (`api`): JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! quote-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── offer_money/   # Decimal 金额工具
//! ├── pricing/       # 输入规范化、行计算、报价汇总
//! ├── printing/      # 报价单文档、金额格式化、PDF
//! ├── snapshot.rs    # 快照与对账
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装和中间件
//! └── utils/         # 日志、错误转发
//! ```

pub mod api;
pub mod core;
pub mod offer_money;
pub mod pricing;
pub mod printing;
pub mod routes;
pub mod snapshot;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use pricing::{PricedOffer, compute, compute_offer, price_input, price_offer};
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 初始化日志并记录启动时间
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    api::health::mark_started();
}

pub fn print_banner() {
    println!(
        r#"
   ____              __
  / __ \__  ______  / /____
 / / / / / / / __ \/ __/ _ \
/ /_/ / /_/ / /_/ / /_/  __/
\___\_\__,_/\____/\__/\___/
    "#
    );
}
