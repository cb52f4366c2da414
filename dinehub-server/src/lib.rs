//! DineHub Server - 餐厅点餐平台服务端
//!
//! # 架构概述
//!
//! 客户扫码点餐 + 员工后台管理的单节点服务：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储（菜单、订单、计数器）
//! - **订单** (`orders`): 订单生命周期管理（状态机 + 单号分配）
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! dinehub-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 订单生命周期管理
//! ├── db/            # 数据库层
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use orders::OrderManager;
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  _            __  __      __
   / __ \(_)___  ___  / / / /_  __/ /_
  / / / / / __ \/ _ \/ /_/ / / / / __ \
 / /_/ / / / / /  __/ __  / /_/ / /_/ /
/_____/_/_/ /_/\___/_/ /_/\__,_/_.___/
"#
    );
}
