//! Agrimarket Server - 农产品交易市场服务端
//!
//! # 架构概述
//!
//! 本模块是市场服务端的主入口，提供以下核心功能：
//!
//! - **存储** (`store`): 基于 redb 的集合键值存储
//! - **定价** (`pricing`): 市场均价与报价建议、需求匹配
//! - **订单** (`orders`): 订单生命周期状态机
//! - **认证** (`auth`): Argon2 口令 + 单席会话
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! market-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── store/         # redb 键值存储
//! ├── pricing/       # 价格建议与需求匹配
//! ├── orders/        # 订单生命周期管理
//! ├── auth/          # 认证与会话
//! ├── analytics/     # 指标汇总
//! ├── seed.rs        # 首启演示数据
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod analytics;
pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod pricing;
pub mod seed;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use orders::OrdersManager;
pub use store::MarketStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 初始化运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 缺失不算错误
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ___            _                       __        __
   /   | ____ _____(_)___ ___  ____ ______/ /_____  / /_
  / /| |/ __ `/ ___/ / __ `__ \/ __ `/ ___/ //_/ _ \/ __/
 / ___ / /_/ / /  / / / / / / / /_/ / /  / ,< /  __/ /_
/_/  |_\__, /_/  /_/_/ /_/ /_/\__,_/_/  /_/|_|\___/\__/
      /____/
    "#
    );
}
