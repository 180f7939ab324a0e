//! Open Server - 餐厅营业时间查询服务
//!
//! # 架构概述
//!
//! 启动时从 JSON 文件加载餐厅及其营业时间字符串，解析为每周时间表，
//! 之后以只读方式回答 "某一时刻哪些餐厅营业" 的查询。
//!
//! # 模块结构
//!
//! ```text
//! open-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── services/      # 数据加载、餐厅目录
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志、时间解析
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use services::RestaurantDirectory;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 `.env` 并初始化日志，返回最终配置
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
   ____
  / __ \____  ___  ____
 / / / / __ \/ _ \/ __ \
/ /_/ / /_/ /  __/ / / /
\____/ .___/\___/_/ /_/
    /_/      restaurants
    "#
    );
}
